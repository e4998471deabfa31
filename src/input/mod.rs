//! Input handling module
//!
//! Maps window-level keys and clicks to application actions.

mod input_mapper;

pub use input_mapper::{AppAction, InputMapper};
