//! SessionBuilder - Declarative session construction
//!
//! Collects static geometry, player spawns and teleport pads, then builds a
//! [`GameSession`] in a fixed order:
//! 1. Static collision geometry
//! 2. Player bodies, each with its one-time mass configuration
//! 3. Animation banks and controllers
//! 4. Teleport zone registry (validated)
//! 5. Starting world active, every other player disabled

use crate::animation::AnimationBank;
use crate::camera::CameraRig;
use crate::context::WorldContext;
use crate::error::SessionError;
use crate::layout::WorldLayout;
use crate::player::{PlayerController, PlayerRoster};
use crate::session::{GameSession, SessionConfig};
use crate::switcher::WorldSwitcher;
use crate::teleport::{TeleportZone, TeleportZoneRegistry};
use crate::world_id::WorldId;
use zaranthis_math::Vec3;
use zaranthis_physics::{PhysicsMaterial, PhysicsWorld, PlayerBody, StaticCollider};

/// Builder for a [`GameSession`]
///
/// # Example
/// ```ignore
/// let session = SessionBuilder::new()
///     .add_ground(Vec3::ZERO, Vec3::new(5.0, 0.05, 5.0), PhysicsMaterial::CONCRETE)
///     .add_player(WorldId::Labo, Vec3::new(-3.0, 1.0, -4.0))
///     .build()?;
/// ```
pub struct SessionBuilder {
    config: SessionConfig,
    start_world: WorldId,
    statics: Vec<StaticCollider>,
    spawns: [Option<Vec3>; 2],
    zones: Vec<TeleportZone>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    /// Empty builder starting in Labo
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            start_world: WorldId::Labo,
            statics: Vec::new(),
            spawns: [None, None],
            zones: Vec::new(),
        }
    }

    /// Builder pre-filled with the built-in layout
    pub fn default_scene() -> Self {
        Self::new().with_layout(&WorldLayout::builtin())
    }

    /// Replace the session tuning
    ///
    /// Call before [`with_layout`](Self::with_layout) so pads without an
    /// explicit radius pick up the configured one.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Override gravity (negative = downward)
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.config.physics.gravity = gravity;
        self
    }

    /// World whose player is active at start
    pub fn with_start_world(mut self, world: WorldId) -> Self {
        self.start_world = world;
        self
    }

    /// Add every region of a layout
    pub fn with_layout(mut self, layout: &WorldLayout) -> Self {
        if let Some(gravity) = layout.gravity {
            self = self.with_gravity(gravity);
        }
        for region in &layout.regions {
            self = self.add_ground(region.ground.center, region.ground.half_extents, region.ground.material);
            for wall in &region.walls {
                self = self.add_box(wall.center, wall.half_extents, wall.material);
            }
            self = self.add_player(region.world, region.spawn);
            if let Some(pad) = &region.pad {
                let radius = pad.trigger_radius.unwrap_or(self.config.trigger_radius);
                let zone = TeleportZone::new(pad.name.clone(), pad.center, region.world, pad.destination)
                    .with_radius(radius);
                self = self.add_teleport_zone(zone);
            }
        }
        self
    }

    /// Add a ground slab
    pub fn add_ground(self, center: Vec3, half_extents: Vec3, material: PhysicsMaterial) -> Self {
        self.add_static(StaticCollider::aabb(center, half_extents, material))
    }

    /// Add a wall or prop box
    pub fn add_box(self, center: Vec3, half_extents: Vec3, material: PhysicsMaterial) -> Self {
        self.add_static(StaticCollider::aabb(center, half_extents, material))
    }

    /// Add an infinite floor plane at height `y`
    pub fn add_floor(self, y: f32, material: PhysicsMaterial) -> Self {
        self.add_static(StaticCollider::floor(y, material))
    }

    fn add_static(mut self, collider: StaticCollider) -> Self {
        self.statics.push(collider);
        self
    }

    /// Spawn the player for `world`, replacing any earlier spawn
    pub fn add_player(mut self, world: WorldId, spawn: Vec3) -> Self {
        self.spawns[world.index()] = Some(spawn);
        self
    }

    /// Add a teleport pad (validated at build)
    pub fn add_teleport_zone(mut self, zone: TeleportZone) -> Self {
        self.zones.push(zone);
        self
    }

    /// Player spawn for `world`, if one was added
    pub fn player_spawn(&self, world: WorldId) -> Option<Vec3> {
        self.spawns[world.index()]
    }

    /// Build the session
    pub fn build(self) -> Result<GameSession, SessionError> {
        let config = self.config;

        let mut physics = PhysicsWorld::with_config(config.physics.clone());
        for collider in self.statics {
            physics.add_static_collider(collider);
        }

        let mut players = PlayerRoster::new();
        for world in WorldId::ALL {
            let Some(spawn) = self.spawns[world.index()] else {
                continue;
            };
            let mut body = PlayerBody::attach(&mut physics, spawn, config.body);
            body.configure_mass_properties(&mut physics)?;
            let animations = AnimationBank::from_names(&config.animation_clips);
            players.insert(PlayerController::new(world, body, animations, &config.movement));
        }

        let mut zones = TeleportZoneRegistry::new();
        for zone in self.zones {
            zones.register(zone)?;
        }

        if !players.contains(self.start_world) {
            return Err(SessionError::MissingPlayer(self.start_world));
        }

        let mut cameras = CameraRig::new(config.cameras);
        for world in WorldId::ALL {
            if world == self.start_world {
                continue;
            }
            if let Some(player) = players.get_mut(world) {
                player.set_enabled(&mut physics, false)?;
            }
        }
        if self.start_world == WorldId::Zaranthis {
            if let Some(player) = players.get(WorldId::Zaranthis) {
                cameras.activate_follow(player.body().key());
            }
        }

        debug_assert_eq!(players.enabled_count(), 1);

        log::info!(
            "Session built: {} player(s), {} teleport zone(s), {} static collider(s), starting in {}",
            players.len(),
            zones.len(),
            physics.static_colliders().len(),
            self.start_world
        );

        let switcher = WorldSwitcher::new(self.start_world, config.teleport_cooldown);
        let mut context = WorldContext::new(physics, cameras);
        context.cameras.update_follow(&context.physics);
        Ok(GameSession::from_parts(context, players, zones, switcher))
    }
}
