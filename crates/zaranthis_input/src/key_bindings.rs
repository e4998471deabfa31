//! Physical key → logical input mapping
//!
//! Default bindings (physical key positions, so ZQSD on AZERTY works too):
//! - W / ArrowUp: forward
//! - S / ArrowDown: back
//! - A / ArrowLeft: strafe left
//! - D / ArrowRight: strafe right
//! - I (release): toggle debug overlay
//! - R (release): reset camera

use std::collections::HashMap;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::input_state::{InputAction, InputState, LogicalKey};

/// What a physical key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Held while pressed
    Move(LogicalKey),
    /// Fires once when released
    Action(InputAction),
}

/// Maps physical key codes to bindings
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Binding>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty()
            .bind(KeyCode::KeyW, Binding::Move(LogicalKey::MoveForward))
            .bind(KeyCode::ArrowUp, Binding::Move(LogicalKey::MoveForward))
            .bind(KeyCode::KeyS, Binding::Move(LogicalKey::MoveBack))
            .bind(KeyCode::ArrowDown, Binding::Move(LogicalKey::MoveBack))
            .bind(KeyCode::KeyA, Binding::Move(LogicalKey::StrafeLeft))
            .bind(KeyCode::ArrowLeft, Binding::Move(LogicalKey::StrafeLeft))
            .bind(KeyCode::KeyD, Binding::Move(LogicalKey::StrafeRight))
            .bind(KeyCode::ArrowRight, Binding::Move(LogicalKey::StrafeRight))
            .bind(KeyCode::KeyI, Binding::Action(InputAction::ToggleDebug))
            .bind(KeyCode::KeyR, Binding::Action(InputAction::ResetCamera))
    }
}

impl KeyBindings {
    /// Bindings with nothing mapped
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Builder: bind (or rebind) a key
    pub fn bind(mut self, key: KeyCode, binding: Binding) -> Self {
        self.bindings.insert(key, binding);
        self
    }

    /// Look up a key's binding
    pub fn binding(&self, key: KeyCode) -> Option<Binding> {
        self.bindings.get(&key).copied()
    }

    /// Apply a keyboard event to the input state
    ///
    /// Returns true if the key is bound.
    pub fn process_keyboard(&self, input: &mut InputState, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match self.binding(key) {
            Some(Binding::Move(logical)) => {
                if pressed {
                    input.press(logical);
                } else {
                    input.release(logical);
                }
                true
            }
            Some(Binding::Action(action)) => {
                if !pressed {
                    input.fire(action);
                }
                true
            }
            None => false,
        }
    }
}
