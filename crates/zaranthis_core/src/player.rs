//! Player controller
//!
//! Turns held movement keys plus the active camera's orientation into a
//! horizontal velocity command for the player's body, and keeps the
//! avatar's animation in step with the movement state.
//!
//! Per frame:
//! 1. Accumulate camera-relative input (axes projected onto the ground plane)
//! 2. Above the dead zone: set horizontal speed to `direction * base_speed`
//! 3. Otherwise: decay horizontal speed toward zero
//! 4. Write `(speed_x, current vertical velocity, speed_z)` to the body

use std::fmt;

use crate::animation::{AnimationBank, AnimationClip};
use crate::camera::CameraBasis;
use crate::context::WorldContext;
use crate::world_id::WorldId;
use zaranthis_input::{InputState, LogicalKey};
use zaranthis_math::{decay_toward_zero, Vec3};
use zaranthis_physics::{PhysicsError, PhysicsWorld, PlayerBody};

/// Movement state of one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementState {
    Idle,
    /// Moving in Labo
    Walking,
    /// Moving in Zaranthis
    Running,
}

impl MovementState {
    /// The moving state used in `world`
    pub fn moving_in(world: WorldId) -> Self {
        match world {
            WorldId::Labo => MovementState::Walking,
            WorldId::Zaranthis => MovementState::Running,
        }
    }

    pub fn is_moving(self) -> bool {
        !matches!(self, MovementState::Idle)
    }

    /// Clip that plays while in this state
    pub fn clip(self) -> AnimationClip {
        match self {
            MovementState::Idle => AnimationClip::Idle,
            MovementState::Walking => AnimationClip::Walk,
            MovementState::Running => AnimationClip::Run,
        }
    }
}

impl fmt::Display for MovementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MovementState::Idle => "Idle",
            MovementState::Walking => "Walking",
            MovementState::Running => "Running",
        };
        f.write_str(name)
    }
}

/// Tuning shared by both players
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementSettings {
    /// Base speed in Labo
    pub walk_speed: f32,
    /// Base speed in Zaranthis
    pub run_speed: f32,
    /// Exponential decay rate of horizontal speed once input stops
    pub deceleration: f32,
    /// Input vectors no longer than this count as no input
    pub dead_zone: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 6.0,
            deceleration: 12.0,
            dead_zone: 0.1,
        }
    }
}

impl MovementSettings {
    /// Base speed for a player living in `world`
    pub fn base_speed(&self, world: WorldId) -> f32 {
        match world {
            WorldId::Labo => self.walk_speed,
            WorldId::Zaranthis => self.run_speed,
        }
    }
}

/// Kinematic and animation state owned by a controller
///
/// Position and vertical velocity live in the physics body, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Normalized horizontal heading
    pub facing: Vec3,
    pub movement: MovementState,
    pub world: WorldId,
    pub base_speed: f32,
    pub speed_x: f32,
    pub speed_z: f32,
    /// Active player flag (body enabled and avatar visible)
    pub enabled: bool,
}

impl PlayerState {
    fn new(world: WorldId, base_speed: f32) -> Self {
        Self {
            facing: Vec3::Z,
            movement: MovementState::Idle,
            world,
            base_speed,
            speed_x: 0.0,
            speed_z: 0.0,
            enabled: true,
        }
    }

    /// Current horizontal speed vector
    pub fn horizontal_speed(&self) -> Vec3 {
        Vec3::new(self.speed_x, 0.0, self.speed_z)
    }
}

/// Drives one player's body and animations
#[derive(Debug, Clone)]
pub struct PlayerController {
    state: PlayerState,
    body: PlayerBody,
    animations: AnimationBank,
    deceleration: f32,
    dead_zone: f32,
    body_warned: bool,
}

impl PlayerController {
    /// Create an idle controller with the idle clip looping
    pub fn new(world: WorldId, body: PlayerBody, mut animations: AnimationBank, settings: &MovementSettings) -> Self {
        animations.start(AnimationClip::Idle, true);
        Self {
            state: PlayerState::new(world, settings.base_speed(world)),
            body,
            animations,
            deceleration: settings.deceleration,
            dead_zone: settings.dead_zone,
            body_warned: false,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn world(&self) -> WorldId {
        self.state.world
    }

    pub fn movement(&self) -> MovementState {
        self.state.movement
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn body(&self) -> &PlayerBody {
        &self.body
    }

    pub fn animations(&self) -> &AnimationBank {
        &self.animations
    }

    /// Body position, if the body exists
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec3> {
        self.body.position(physics)
    }

    /// Enable or disable this player
    ///
    /// The flag flips even if the body is missing; the error is returned so
    /// the caller can report it.
    pub fn set_enabled(&mut self, physics: &mut PhysicsWorld, enabled: bool) -> Result<(), PhysicsError> {
        self.state.enabled = enabled;
        self.body.set_enabled(physics, enabled)
    }

    /// Per-frame update using the world context's active camera
    pub fn update(&mut self, input: &InputState, ctx: &mut WorldContext, delta: f32) {
        self.update_with_camera(input, &ctx.cameras, &mut ctx.physics, delta);
    }

    /// Per-frame update against an explicit camera
    ///
    /// Disabled players ignore input entirely.
    pub fn update_with_camera(
        &mut self,
        input: &InputState,
        camera: &impl CameraBasis,
        physics: &mut PhysicsWorld,
        delta: f32,
    ) {
        if !self.state.enabled {
            return;
        }

        let movement = self.accumulate_input(input, camera);

        if movement.length() > self.dead_zone {
            let direction = movement.normalized();
            self.state.speed_x = direction.x * self.state.base_speed;
            self.state.speed_z = direction.z * self.state.base_speed;
            self.state.facing = self.state.horizontal_speed().normalized();

            if !self.state.movement.is_moving() {
                self.enter(MovementState::moving_in(self.state.world));
            }
        } else {
            self.state.speed_x = decay_toward_zero(self.state.speed_x, self.deceleration, delta);
            self.state.speed_z = decay_toward_zero(self.state.speed_z, self.deceleration, delta);

            if self.state.movement.is_moving() {
                self.enter(MovementState::Idle);
            }
        }

        self.animations.advance(delta);
        self.write_velocity(physics);
    }

    /// Sum of camera-relative axes for the held keys
    ///
    /// Each axis is flattened onto the ground and rescaled to unit length, so
    /// a camera looking steeply down still produces a full-length input.
    fn accumulate_input(&self, input: &InputState, camera: &impl CameraBasis) -> Vec3 {
        let forward = camera.forward_axis().horizontal().normalized();
        let right = camera.right_axis().horizontal().normalized();

        let mut movement = Vec3::ZERO;
        for key in LogicalKey::ALL {
            if !input.is_held(key) {
                continue;
            }
            movement += match key {
                LogicalKey::MoveForward => forward,
                LogicalKey::MoveBack => -forward,
                LogicalKey::StrafeRight => right,
                LogicalKey::StrafeLeft => -right,
            };
        }
        movement
    }

    fn enter(&mut self, next: MovementState) {
        log::debug!(
            "{} player: {} -> {}",
            self.state.world,
            self.state.movement,
            next
        );
        match next {
            MovementState::Idle => {
                self.animations.stop(AnimationClip::Walk);
                self.animations.stop(AnimationClip::Run);
                self.animations.start(AnimationClip::Idle, true);
            }
            MovementState::Walking | MovementState::Running => {
                self.animations.stop(AnimationClip::Idle);
                self.animations.start(next.clip(), true);
            }
        }
        self.state.movement = next;
    }

    fn write_velocity(&mut self, physics: &mut PhysicsWorld) {
        let result = match self.body.linear_velocity(physics) {
            Some(current) => {
                let velocity = Vec3::new(self.state.speed_x, current.y, self.state.speed_z);
                self.body.set_linear_velocity(physics, velocity)
            }
            None => Err(PhysicsError::BodyMissing),
        };

        match result {
            Ok(()) => self.body_warned = false,
            Err(e) if !self.body_warned => {
                log::warn!("{} player velocity not applied: {}", self.state.world, e);
                self.body_warned = true;
            }
            Err(_) => {}
        }
    }
}

/// The (at most two) players, one per world
#[derive(Debug, Clone, Default)]
pub struct PlayerRoster {
    players: [Option<PlayerController>; 2],
}

impl PlayerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a player in its world's slot, returning the one it replaces
    pub fn insert(&mut self, player: PlayerController) -> Option<PlayerController> {
        let slot = &mut self.players[player.world().index()];
        slot.replace(player)
    }

    pub fn get(&self, world: WorldId) -> Option<&PlayerController> {
        self.players[world.index()].as_ref()
    }

    pub fn get_mut(&mut self, world: WorldId) -> Option<&mut PlayerController> {
        self.players[world.index()].as_mut()
    }

    pub fn contains(&self, world: WorldId) -> bool {
        self.get(world).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerController> {
        self.players.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of players with the active flag set
    pub fn enabled_count(&self) -> usize {
        self.iter().filter(|p| p.is_enabled()).count()
    }
}
