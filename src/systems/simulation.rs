//! Game simulation system
//!
//! Manages the game loop simulation including:
//! - Delta time calculation
//! - Ticking the session (movement, teleports, physics, cameras)
//! - The once-per-second debug overlay

use std::time::Instant;
use zaranthis_core::{GameSession, InputAction, InputState, SessionStatus, TeleportEvent};

/// Seconds between debug overlay reports
const OVERLAY_INTERVAL: f32 = 1.0;

/// Result of a simulation update
#[derive(Debug, Default)]
pub struct SimulationResult {
    /// Teleport fired during this frame, if any
    pub teleport: Option<TeleportEvent>,
    /// Delta time actually fed to the session
    pub dt: f32,
}

/// Manages the game simulation loop
pub struct SimulationSystem {
    last_frame: Instant,
    max_frame_time: f32,
    show_overlay: bool,
    overlay_timer: f32,
    frames_since_report: u32,
    fps: f32,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new(max_frame_time: f32, show_overlay: bool) -> Self {
        Self {
            last_frame: Instant::now(),
            max_frame_time,
            show_overlay,
            overlay_timer: 0.0,
            frames_since_report: 0,
            fps: 0.0,
        }
    }

    /// Run one simulation frame using wall-clock time
    pub fn update(&mut self, session: &mut GameSession, input: &mut InputState) -> SimulationResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.step(session, input, raw_dt)
    }

    /// Run one simulation frame with an explicit delta
    ///
    /// The delta is capped at `max_frame_time`. One-shot actions in `input`
    /// are consumed once the session has seen them.
    pub fn step(
        &mut self,
        session: &mut GameSession,
        input: &mut InputState,
        raw_dt: f32,
    ) -> SimulationResult {
        // Cap dt so a stall (first frame, window drag) doesn't tunnel the player
        let dt = raw_dt.min(self.max_frame_time);

        if input.was_released(InputAction::ToggleDebug) {
            self.show_overlay = !self.show_overlay;
            log::info!(
                "Debug overlay {}",
                if self.show_overlay { "enabled" } else { "disabled" }
            );
        }

        let teleport = session.tick(input, dt);
        if let Some(event) = &teleport {
            log::debug!("Frame teleport via '{}'", event.zone);
        }
        input.end_frame();

        self.frames_since_report += 1;
        self.overlay_timer += dt;
        if self.overlay_timer >= OVERLAY_INTERVAL {
            self.fps = self.frames_since_report as f32 / self.overlay_timer;
            self.frames_since_report = 0;
            self.overlay_timer = 0.0;
            if self.show_overlay {
                log::info!("{}", overlay_line(self.fps, &session.status()));
            }
        }

        SimulationResult { teleport, dt }
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.show_overlay
    }

    /// Frames per second measured over the last overlay interval
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(0.25, false)
    }
}

/// One-line summary used by the overlay and the window title
pub fn overlay_line(fps: f32, status: &SessionStatus) -> String {
    let position = match status.position {
        Some(p) => format!("({:.1}, {:.1}, {:.1})", p.x, p.y, p.z),
        None => "(no body)".to_string(),
    };
    format!(
        "{:.0} fps | {} | {} | {} | cooldown {:.1}s",
        fps, status.world, status.movement, position, status.cooldown
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use zaranthis_core::{LogicalKey, MovementState, SessionBuilder, WorldId};

    #[test]
    fn test_delta_time_capped() {
        let mut sim = SimulationSystem::default();
        let mut session = SessionBuilder::default_scene().build().unwrap();
        let mut input = InputState::new();

        let result = sim.step(&mut session, &mut input, 3.0);
        assert_eq!(result.dt, 0.25);
        assert!((session.elapsed() - 0.25).abs() < 0.0001);
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert!(!sim.is_overlay_visible());
        assert_eq!(sim.fps(), 0.0);
    }

    #[test]
    fn test_toggle_debug_consumed_after_one_frame() {
        let mut sim = SimulationSystem::default();
        let mut session = SessionBuilder::default_scene().build().unwrap();
        let mut input = InputState::new();

        input.fire(InputAction::ToggleDebug);
        sim.step(&mut session, &mut input, 0.016);
        assert!(sim.is_overlay_visible());
        assert!(!input.was_released(InputAction::ToggleDebug));

        // Next frame without a new release keeps the overlay on
        sim.step(&mut session, &mut input, 0.016);
        assert!(sim.is_overlay_visible());
    }

    #[test]
    fn test_held_keys_survive_end_frame() {
        let mut sim = SimulationSystem::default();
        let mut session = SessionBuilder::default_scene().build().unwrap();
        let mut input = InputState::with_held(&[LogicalKey::MoveForward]);

        sim.step(&mut session, &mut input, 0.016);
        assert!(input.is_held(LogicalKey::MoveForward));
        assert_eq!(session.status().movement, MovementState::Walking);
    }

    #[test]
    fn test_fps_measured_each_interval() {
        let mut sim = SimulationSystem::default();
        let mut session = SessionBuilder::default_scene().build().unwrap();
        let mut input = InputState::new();

        for _ in 0..8 {
            sim.step(&mut session, &mut input, 0.125);
        }
        assert!((sim.fps() - 8.0).abs() < 0.0001, "fps = {}", sim.fps());
    }

    #[test]
    fn test_overlay_line_contents() {
        let session = SessionBuilder::default_scene().build().unwrap();
        let line = overlay_line(60.0, &session.status());
        assert!(line.contains("60 fps"));
        assert!(line.contains(&WorldId::Labo.to_string()));
        assert!(line.contains("Idle"));
        assert!(line.contains("cooldown 0.0s"));
    }
}
