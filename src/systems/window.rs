//! The game window: cursor grab, fullscreen and the status title bar

use winit::error::OsError;
use winit::event_loop::ActiveEventLoop;
use winit::window::{CursorGrabMode, Fullscreen, Window};
use zaranthis_core::SessionStatus;

use super::simulation::overlay_line;
use crate::config::WindowConfig;

/// Whether mouse motion steers the camera
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    Free,
    Captured,
}

impl CursorMode {
    fn hint(self) -> &'static str {
        match self {
            CursorMode::Free => "[Click to capture]",
            CursorMode::Captured => "[Esc to release]",
        }
    }
}

pub struct WindowSystem {
    window: Window,
    cursor: CursorMode,
    base_title: String,
}

impl WindowSystem {
    /// Open the window described by `config`
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, WindowError> {
        let fullscreen = config.fullscreen.then_some(Fullscreen::Borderless(None));
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
            .with_fullscreen(fullscreen);

        let window = event_loop.create_window(attrs)?;
        log::info!("Opened {}x{} window", config.width, config.height);

        Ok(Self {
            window,
            cursor: CursorMode::Free,
            base_title: config.title.clone(),
        })
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor
    }

    pub fn is_cursor_captured(&self) -> bool {
        self.cursor == CursorMode::Captured
    }

    /// Grab and hide the cursor. Locked is preferred; some platforms only
    /// support Confined.
    pub fn capture_cursor(&mut self) -> bool {
        let grabbed = [CursorGrabMode::Locked, CursorGrabMode::Confined]
            .into_iter()
            .any(|mode| self.window.set_cursor_grab(mode).is_ok());

        if !grabbed {
            log::warn!("Cursor grab not supported here");
            return false;
        }
        self.window.set_cursor_visible(false);
        self.cursor = CursorMode::Captured;
        log::info!("Mouse look on (Escape releases)");
        true
    }

    pub fn release_cursor(&mut self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Cursor ungrab failed: {}", e);
        }
        self.window.set_cursor_visible(true);
        self.cursor = CursorMode::Free;
        log::info!("Mouse look off (click to capture)");
    }

    pub fn toggle_fullscreen(&self) {
        let next = match self.window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        self.window.set_fullscreen(next);
    }

    /// Show the session status in the title bar
    pub fn update_title(&self, status: &SessionStatus, fps: f32, overlay: bool) {
        self.window
            .set_title(&format_title(&self.base_title, status, fps, overlay, self.cursor));
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// World name and cursor hint, or the full overlay line when the overlay is on
fn format_title(base: &str, status: &SessionStatus, fps: f32, overlay: bool, cursor: CursorMode) -> String {
    let body = if overlay {
        overlay_line(fps, status)
    } else {
        status.world.to_string()
    };
    format!("{} - {} {}", base, body, cursor.hint())
}

#[derive(Debug)]
pub enum WindowError {
    Create(OsError),
}

impl From<OsError> for WindowError {
    fn from(e: OsError) -> Self {
        WindowError::Create(e)
    }
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::Create(e) => write!(f, "could not open window: {}", e),
        }
    }
}

impl std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WindowError::Create(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zaranthis_core::{CameraKind, MovementState, Vec3, WorldId};

    fn running_in_zaranthis() -> SessionStatus {
        SessionStatus {
            world: WorldId::Zaranthis,
            movement: MovementState::Running,
            position: Some(Vec3::new(500.0, 0.9, 501.5)),
            cooldown: 1.5,
            camera: CameraKind::Follow,
        }
    }

    #[test]
    fn test_title_shows_world_and_release_hint() {
        let title = format_title("Game", &running_in_zaranthis(), 60.0, false, CursorMode::Captured);
        assert_eq!(title, format!("Game - {} [Esc to release]", WorldId::Zaranthis));
    }

    #[test]
    fn test_title_capture_hint_when_free() {
        let title = format_title("Game", &running_in_zaranthis(), 60.0, false, CursorMode::Free);
        assert!(title.ends_with("[Click to capture]"));
    }

    #[test]
    fn test_title_with_overlay() {
        let title = format_title("Game", &running_in_zaranthis(), 60.0, true, CursorMode::Captured);
        assert!(title.contains("60 fps"));
        assert!(title.contains("Running"));
        assert!(title.contains("(500.0, 0.9, 501.5)"));
        assert!(title.contains("cooldown 1.5s"));
    }
}
