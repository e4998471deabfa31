//! The per-frame game loop
//!
//! [`GameSession`] owns every piece of mutable state and advances it once
//! per frame in a fixed order:
//! 1. Active player's controller
//! 2. World switcher (cooldown, then pads)
//! 3. Physics step
//! 4. Follow camera tracking

use crate::animation::AnimationClip;
use crate::camera::{CameraKind, CameraRig, CameraSettings};
use crate::context::WorldContext;
use crate::player::{MovementSettings, MovementState, PlayerController, PlayerRoster};
use crate::switcher::{TeleportEvent, WorldSwitcher, DEFAULT_TELEPORT_COOLDOWN};
use crate::teleport::{TeleportZoneRegistry, DEFAULT_TRIGGER_RADIUS};
use crate::world_id::WorldId;
use zaranthis_input::{InputAction, InputState};
use zaranthis_math::Vec3;
use zaranthis_physics::{PhysicsConfig, PhysicsWorld, PlayerBodyDesc};

/// Tuning for a whole session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub movement: MovementSettings,
    pub body: PlayerBodyDesc,
    pub physics: PhysicsConfig,
    pub cameras: CameraSettings,
    /// Seconds during which pads are ignored after a teleport
    pub teleport_cooldown: f32,
    /// Radius for pads that don't specify one
    pub trigger_radius: f32,
    /// Clip names the avatar asset exposes
    pub animation_clips: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            movement: MovementSettings::default(),
            body: PlayerBodyDesc::default(),
            physics: PhysicsConfig::default(),
            cameras: CameraSettings::default(),
            teleport_cooldown: DEFAULT_TELEPORT_COOLDOWN,
            trigger_radius: DEFAULT_TRIGGER_RADIUS,
            animation_clips: AnimationClip::ALL.iter().map(|c| c.name().to_string()).collect(),
        }
    }
}

/// Snapshot for the debug overlay and window title
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStatus {
    pub world: WorldId,
    pub movement: MovementState,
    pub position: Option<Vec3>,
    pub cooldown: f32,
    pub camera: CameraKind,
}

/// A running game: both players, the pads, and the world they live in
pub struct GameSession {
    context: WorldContext,
    players: PlayerRoster,
    zones: TeleportZoneRegistry,
    switcher: WorldSwitcher,
    elapsed: f32,
    teleport_count: u32,
}

impl GameSession {
    pub(crate) fn from_parts(
        context: WorldContext,
        players: PlayerRoster,
        zones: TeleportZoneRegistry,
        switcher: WorldSwitcher,
    ) -> Self {
        Self {
            context,
            players,
            zones,
            switcher,
            elapsed: 0.0,
            teleport_count: 0,
        }
    }

    /// Advance the session by one frame
    ///
    /// `input` must be captured before the call; the caller clears its
    /// one-shot actions afterwards. Negative or non-finite deltas count as 0.
    pub fn tick(&mut self, input: &InputState, delta_seconds: f32) -> Option<TeleportEvent> {
        let delta = if delta_seconds.is_finite() { delta_seconds.max(0.0) } else { 0.0 };

        if input.was_released(InputAction::ResetCamera) {
            self.context.cameras.reset_free();
        }

        let current = self.switcher.current();
        match self.players.get_mut(current) {
            Some(player) => player.update(input, &mut self.context, delta),
            None => log::warn!("No player for current world {}", current),
        }

        let event = self
            .switcher
            .update(&mut self.players, &self.zones, &mut self.context, delta);
        if event.is_some() {
            self.teleport_count += 1;
        }

        self.context.physics.step(delta);
        self.context.cameras.update_follow(&self.context.physics);
        self.elapsed += delta;

        event
    }

    /// Forward mouse motion to the active camera
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.context.cameras.process_mouse_motion(delta_x, delta_y);
    }

    pub fn current_world(&self) -> WorldId {
        self.switcher.current()
    }

    /// The player being controlled
    pub fn active_player(&self) -> Option<&PlayerController> {
        self.players.get(self.switcher.current())
    }

    pub fn player(&self, world: WorldId) -> Option<&PlayerController> {
        self.players.get(world)
    }

    pub fn players(&self) -> &PlayerRoster {
        &self.players
    }

    pub fn zones(&self) -> &TeleportZoneRegistry {
        &self.zones
    }

    pub fn switcher(&self) -> &WorldSwitcher {
        &self.switcher
    }

    pub fn context(&self) -> &WorldContext {
        &self.context
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.context.physics
    }

    pub fn cameras(&self) -> &CameraRig {
        &self.context.cameras
    }

    /// Simulated seconds since the session started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Teleports fired so far
    pub fn teleport_count(&self) -> u32 {
        self.teleport_count
    }

    /// Position of the active player's body
    pub fn player_position(&self) -> Option<Vec3> {
        self.active_player().and_then(|p| p.position(&self.context.physics))
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            world: self.current_world(),
            movement: self
                .active_player()
                .map_or(MovementState::Idle, |p| p.movement()),
            position: self.player_position(),
            cooldown: self.switcher.cooldown_remaining(),
            camera: self.context.cameras.active_kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SessionBuilder;
    use zaranthis_input::LogicalKey;

    #[test]
    fn test_default_config_values() {
        let config = SessionConfig::default();
        assert_eq!(config.movement.walk_speed, 2.0);
        assert_eq!(config.movement.run_speed, 6.0);
        assert_eq!(config.teleport_cooldown, 2.0);
        assert_eq!(config.trigger_radius, 1.5);
        assert_eq!(config.physics.gravity, -9.8);
        assert_eq!(config.animation_clips, vec!["idle", "walk", "run"]);
    }

    #[test]
    fn test_tick_with_bad_delta_is_noop() {
        let mut session = SessionBuilder::default_scene().build().unwrap();
        let before = session.player_position();
        session.tick(&InputState::new(), f32::NAN);
        session.tick(&InputState::new(), -1.0);
        assert_eq!(session.player_position(), before);
        assert_eq!(session.elapsed(), 0.0);
    }

    #[test]
    fn test_status_reflects_active_player() {
        let mut session = SessionBuilder::default_scene().build().unwrap();
        session.tick(&InputState::with_held(&[LogicalKey::MoveForward]), 0.016);

        let status = session.status();
        assert_eq!(status.world, WorldId::Labo);
        assert_eq!(status.movement, MovementState::Walking);
        assert_eq!(status.camera, CameraKind::Free);
        assert_eq!(status.cooldown, 0.0);
        assert!(status.position.is_some());
    }

    #[test]
    fn test_reset_camera_action() {
        let mut session = SessionBuilder::default_scene().build().unwrap();
        let start = session.cameras().active().yaw();
        session.process_mouse_motion(300.0, 0.0);
        assert!((session.cameras().active().yaw() - start).abs() > 0.1);

        let mut input = InputState::new();
        input.fire(InputAction::ResetCamera);
        session.tick(&input, 0.016);
        assert!((session.cameras().active().yaw() - start).abs() < 0.0001);
    }
}
