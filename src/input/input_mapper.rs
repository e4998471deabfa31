//! Window-level key and mouse handling
//!
//! Only keys that act on the window live here. Movement, the debug toggle and
//! the camera reset go through `KeyBindings` into the session's `InputState`.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// What the window should do in response to a key or click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Grab or release the cursor
    ToggleCursor,
    /// Close the application
    Exit,
    ToggleFullscreen,
}

/// Maps raw window events to [`AppAction`]s
pub struct InputMapper;

impl InputMapper {
    /// Escape first releases a captured cursor and only exits once it is free.
    /// F toggles fullscreen. Releases and all other keys map to nothing.
    pub fn map_keyboard(key: KeyCode, state: ElementState, cursor_captured: bool) -> Option<AppAction> {
        if !state.is_pressed() {
            return None;
        }
        match (key, cursor_captured) {
            (KeyCode::Escape, true) => Some(AppAction::ToggleCursor),
            (KeyCode::Escape, false) => Some(AppAction::Exit),
            (KeyCode::KeyF, _) => Some(AppAction::ToggleFullscreen),
            _ => None,
        }
    }

    /// A left click on a free cursor captures it
    pub fn map_mouse_button(button: MouseButton, state: ElementState, cursor_captured: bool) -> Option<AppAction> {
        let click = button == MouseButton::Left && state.is_pressed();
        (click && !cursor_captured).then_some(AppAction::ToggleCursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_releases_then_exits() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, true),
            Some(AppAction::ToggleCursor)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, false),
            Some(AppAction::Exit)
        );
    }

    #[test]
    fn test_gameplay_keys_left_to_bindings() {
        for key in [
            KeyCode::KeyW,
            KeyCode::KeyA,
            KeyCode::KeyS,
            KeyCode::KeyD,
            KeyCode::ArrowUp,
            KeyCode::ArrowLeft,
            KeyCode::KeyI,
            KeyCode::KeyR,
        ] {
            assert_eq!(InputMapper::map_keyboard(key, ElementState::Pressed, true), None, "{:?}", key);
        }
    }

    #[test]
    fn test_releases_do_nothing() {
        assert_eq!(InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released, true), None);
        assert_eq!(InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Released, false), None);
    }

    #[test]
    fn test_fullscreen_regardless_of_cursor() {
        for captured in [true, false] {
            assert_eq!(
                InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed, captured),
                Some(AppAction::ToggleFullscreen)
            );
        }
    }

    #[test]
    fn test_click_captures_free_cursor_only() {
        assert_eq!(
            InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, false),
            Some(AppAction::ToggleCursor)
        );
        assert_eq!(InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, true), None);
        assert_eq!(InputMapper::map_mouse_button(MouseButton::Right, ElementState::Pressed, false), None);
    }
}
