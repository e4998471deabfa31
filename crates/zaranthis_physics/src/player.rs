//! Player body adapter
//!
//! Wraps the single dynamic capsule body owned by a player. The controller
//! only ever reads and writes linear velocity through this type; position is
//! owned by the physics world.

use crate::body::{BodyKey, MassProperties, RigidBody};
use crate::collision::CollisionFilter;
use crate::error::PhysicsError;
use crate::material::PhysicsMaterial;
use crate::world::PhysicsWorld;
use zaranthis_math::Vec3;

/// Default player capsule height
pub const DEFAULT_PLAYER_HEIGHT: f32 = 1.7;

/// Default player capsule radius
pub const DEFAULT_PLAYER_RADIUS: f32 = 0.4;

/// Capsule dimensions and physical properties for a player body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerBodyDesc {
    pub height: f32,
    pub radius: f32,
    pub mass: f32,
    pub material: PhysicsMaterial,
}

impl Default for PlayerBodyDesc {
    fn default() -> Self {
        Self {
            height: DEFAULT_PLAYER_HEIGHT,
            radius: DEFAULT_PLAYER_RADIUS,
            mass: 1.0,
            material: PhysicsMaterial::PLAYER,
        }
    }
}

/// Handle to one player's dynamic capsule in a [`PhysicsWorld`]
#[derive(Clone, Debug)]
pub struct PlayerBody {
    key: BodyKey,
    height: f32,
    mass: f32,
    configured: bool,
}

impl PlayerBody {
    /// Insert a capsule body centered at `position`
    pub fn attach(world: &mut PhysicsWorld, position: Vec3, desc: PlayerBodyDesc) -> Self {
        let body = RigidBody::new_capsule(position, desc.height, desc.radius)
            .with_mass(desc.mass)
            .with_material(desc.material)
            .with_filter(CollisionFilter::player());
        let key = world.add_body(body);

        Self {
            key,
            height: desc.height,
            mass: desc.mass,
            configured: false,
        }
    }

    /// Key of the underlying body
    pub fn key(&self) -> BodyKey {
        self.key
    }

    /// Whether mass properties have been configured
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Lock angular inertia and pin the center of mass halfway up the capsule
    ///
    /// Must be called exactly once, after static collision geometry has been
    /// added to the world and before the first velocity write.
    pub fn configure_mass_properties(&mut self, world: &mut PhysicsWorld) -> Result<(), PhysicsError> {
        if self.configured {
            return Err(PhysicsError::AlreadyConfigured);
        }
        if world.static_colliders().is_empty() {
            return Err(PhysicsError::NoStaticGeometry);
        }
        let body = world.get_body_mut(self.key).ok_or(PhysicsError::BodyMissing)?;
        body.mass_properties = Some(MassProperties::rotation_locked(self.mass, self.height));
        body.angular_velocity = Vec3::ZERO;
        self.configured = true;
        log::debug!("Locked rotation for player body {:?} (height {})", self.key, self.height);
        Ok(())
    }

    /// Current linear velocity, or None if the body is gone
    pub fn linear_velocity(&self, world: &PhysicsWorld) -> Option<Vec3> {
        world.get_body(self.key).map(|b| b.velocity)
    }

    /// Overwrite the linear velocity
    pub fn set_linear_velocity(&self, world: &mut PhysicsWorld, velocity: Vec3) -> Result<(), PhysicsError> {
        if !self.configured {
            return Err(PhysicsError::NotConfigured);
        }
        let body = world.get_body_mut(self.key).ok_or(PhysicsError::BodyMissing)?;
        body.velocity = velocity;
        Ok(())
    }

    /// Current position (capsule center), or None if the body is gone
    pub fn position(&self, world: &PhysicsWorld) -> Option<Vec3> {
        world.get_body(self.key).map(|b| b.position)
    }

    /// Whether the body currently takes part in the simulation
    pub fn is_enabled(&self, world: &PhysicsWorld) -> bool {
        world.get_body(self.key).map_or(false, |b| b.enabled)
    }

    /// Enable or disable the body
    ///
    /// A disabled body keeps its state but neither integrates nor collides.
    pub fn set_enabled(&self, world: &mut PhysicsWorld, enabled: bool) -> Result<(), PhysicsError> {
        let body = world.get_body_mut(self.key).ok_or(PhysicsError::BodyMissing)?;
        body.enabled = enabled;
        body.filter = if enabled {
            CollisionFilter::player()
        } else {
            CollisionFilter::none()
        };
        Ok(())
    }
}
