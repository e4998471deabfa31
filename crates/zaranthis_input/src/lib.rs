//! Input handling for the player avatar
//!
//! Raw keyboard events are resolved once, at [`KeyBindings`], into a
//! strongly typed [`InputState`] the controller consumes.

mod input_state;
mod key_bindings;

pub use input_state::{ActionSet, HeldKeys, InputAction, InputState, LogicalKey};
pub use key_bindings::{Binding, KeyBindings};
