//! Application systems
//!
//! Frame timing and the window, kept out of main.rs so they can be tested.

mod simulation;
mod window;

pub use simulation::{overlay_line, SimulationResult, SimulationSystem};
pub use window::{CursorMode, WindowError, WindowSystem};
