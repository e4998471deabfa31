//! Labo / Zaranthis
//!
//! Walk around the Labo, step on the pad, run around Zaranthis and come back.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use zaranthis::config::AppConfig;
use zaranthis::input::{AppAction, InputMapper};
use zaranthis::systems::{SimulationSystem, WindowSystem};
use zaranthis_core::{GameSession, InputState, SessionBuilder, SessionError, WorldLayout};
use zaranthis_input::KeyBindings;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    session: GameSession,
    simulation: SimulationSystem,
    bindings: KeyBindings,
    input: InputState,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, SessionError> {
        let layout = if config.scene.layout_path.is_empty() {
            WorldLayout::builtin()
        } else {
            WorldLayout::load(&config.scene.layout_path)?
        };
        log::info!("Using world layout '{}'", layout.name);

        let session = SessionBuilder::new()
            .with_config(config.to_session_config())
            .with_layout(&layout)
            .build()?;

        let simulation =
            SimulationSystem::new(config.physics.max_frame_time, config.debug.show_overlay);

        Ok(Self {
            config,
            window: None,
            session,
            simulation,
            bindings: KeyBindings::default(),
            input: InputState::new(),
        })
    }

    fn apply(&mut self, action: AppAction, event_loop: &ActiveEventLoop) {
        let Some(window) = &mut self.window else {
            return;
        };
        match action {
            AppAction::ToggleCursor => {
                if window.is_cursor_captured() {
                    window.release_cursor();
                } else {
                    window.capture_cursor();
                }
            }
            AppAction::Exit => event_loop.exit(),
            AppAction::ToggleFullscreen => window.toggle_fullscreen(),
        }
    }

    fn cursor_captured(&self) -> bool {
        self.window.as_ref().is_some_and(|w| w.is_cursor_captured())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Focused(false) => {
                // Keys released while unfocused never reach us
                self.input.clear();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) =
                        InputMapper::map_keyboard(key, event.state, self.cursor_captured())
                    {
                        self.apply(action, event_loop);
                        return;
                    }
                    self.bindings.process_keyboard(&mut self.input, key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(action) =
                    InputMapper::map_mouse_button(button, state, self.cursor_captured())
                {
                    self.apply(action, event_loop);
                }
            }

            WindowEvent::RedrawRequested => {
                self.simulation.update(&mut self.session, &mut self.input);

                if let Some(window) = &self.window {
                    window.update_title(
                        &self.session.status(),
                        self.simulation.fps(),
                        self.simulation.is_overlay_visible(),
                    );
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.cursor_captured() {
                self.session.process_mouse_motion(delta.0, delta.1);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting Labo / Zaranthis");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut app = App::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;
    Ok(())
}
