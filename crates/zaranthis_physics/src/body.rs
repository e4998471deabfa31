//! Rigid body types

use crate::collision::CollisionFilter;
use crate::material::PhysicsMaterial;
use crate::shapes::{Aabb, Capsule, Collider, Plane};
use zaranthis_math::Vec3;
use slotmap::new_key_type;

new_key_type! {
    /// Key to a rigid body in the physics world
    ///
    /// Generational: once a body is removed, old keys return None instead of
    /// pointing at whatever reuses the slot.
    pub struct BodyKey;
}

/// Mass distribution of a dynamic body
///
/// `center_of_mass` is measured from the base of the body's collider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MassProperties {
    pub mass: f32,
    /// Principal moments of inertia; zero on an axis means rotation about it is locked
    pub inertia: Vec3,
    pub center_of_mass: Vec3,
}

impl MassProperties {
    /// Mass properties that forbid any rotation, with the center of mass
    /// halfway up a body of the given height
    pub fn rotation_locked(mass: f32, height: f32) -> Self {
        Self {
            mass,
            inertia: Vec3::ZERO,
            center_of_mass: Vec3::new(0.0, height * 0.5, 0.0),
        }
    }

    /// Whether angular motion is fully locked
    pub fn locks_rotation(&self) -> bool {
        self.inertia == Vec3::ZERO
    }
}

/// A rigid body with position, velocity, and collision shape
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// Position in world coordinates (collider center)
    pub position: Vec3,
    /// Linear velocity (units per second)
    pub velocity: Vec3,
    /// Angular velocity (radians per second, per axis)
    pub angular_velocity: Vec3,
    /// Mass of the body
    pub mass: f32,
    /// Friction and restitution
    pub material: PhysicsMaterial,
    /// Whether this body is affected by gravity
    pub affected_by_gravity: bool,
    /// The collision shape for this body (stores absolute world position)
    pub collider: Collider,
    /// Layer/mask filter
    pub filter: CollisionFilter,
    /// Disabled bodies neither integrate nor collide
    pub enabled: bool,
    /// Set once by the owner of the body; None until configured
    pub mass_properties: Option<MassProperties>,
}

impl RigidBody {
    /// Create a dynamic upright capsule body centered at `position`
    pub fn new_capsule(position: Vec3, height: f32, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 1.0,
            material: PhysicsMaterial::default(),
            affected_by_gravity: true,
            collider: Collider::Capsule(Capsule::new(position, height, radius)),
            filter: CollisionFilter::default(),
            enabled: true,
            mass_properties: None,
        }
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the mass of this body
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Set the physics material of this body
    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    /// Set the collision filter of this body
    pub fn with_filter(mut self, filter: CollisionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set whether this body is affected by gravity
    pub fn with_gravity(mut self, affected: bool) -> Self {
        self.affected_by_gravity = affected;
        self
    }

    /// Whether the body's rotation is locked by its mass properties
    pub fn rotation_locked(&self) -> bool {
        self.mass_properties.map_or(false, |m| m.locks_rotation())
    }

    /// Update the position and sync the collider
    pub fn set_position(&mut self, position: Vec3) {
        let delta = position - self.position;
        self.position = position;
        self.collider = self.collider.translated(delta);
    }

    /// Apply a positional correction (e.g., from collision resolution)
    pub fn apply_correction(&mut self, correction: Vec3) {
        self.position += correction;
        self.collider = self.collider.translated(correction);
    }
}

/// Immovable collision geometry (grounds, walls, props)
#[derive(Clone, Debug)]
pub struct StaticCollider {
    pub collider: Collider,
    pub material: PhysicsMaterial,
    pub filter: CollisionFilter,
}

impl StaticCollider {
    /// Box collider from center and half extents
    pub fn aabb(center: Vec3, half_extents: Vec3, material: PhysicsMaterial) -> Self {
        Self {
            collider: Collider::Aabb(Aabb::from_center_half_extents(center, half_extents)),
            material,
            filter: CollisionFilter::static_world(),
        }
    }

    /// Infinite plane collider
    pub fn plane(normal: Vec3, distance: f32, material: PhysicsMaterial) -> Self {
        Self {
            collider: Collider::Plane(Plane::new(normal, distance)),
            material,
            filter: CollisionFilter::static_world(),
        }
    }

    /// Horizontal floor plane at height `y`
    pub fn floor(y: f32, material: PhysicsMaterial) -> Self {
        Self::plane(Vec3::UP, y, material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_capsule_body() {
        let pos = Vec3::new(-3.0, 1.0, -4.0);
        let body = RigidBody::new_capsule(pos, 1.7, 0.4);

        assert_eq!(body.position, pos);
        assert_eq!(body.velocity, Vec3::ZERO);
        assert!(body.enabled);
        assert!(body.affected_by_gravity);
        assert!(body.mass_properties.is_none());
        assert_eq!(body.collider.center(), pos);
    }

    #[test]
    fn test_rotation_locked_mass_properties() {
        let props = MassProperties::rotation_locked(1.0, 1.7);
        assert!(props.locks_rotation());
        assert!((props.center_of_mass.y - 0.85).abs() < 0.0001);
        assert_eq!(props.center_of_mass.x, 0.0);
    }

    #[test]
    fn test_rotation_locked_only_after_configuration() {
        let mut body = RigidBody::new_capsule(Vec3::ZERO, 1.7, 0.4);
        assert!(!body.rotation_locked());
        body.mass_properties = Some(MassProperties::rotation_locked(1.0, 1.7));
        assert!(body.rotation_locked());
    }

    #[test]
    fn test_builder_methods() {
        let body = RigidBody::new_capsule(Vec3::ZERO, 1.7, 0.4)
            .with_velocity(Vec3::new(1.0, 2.0, 0.0))
            .with_mass(5.0)
            .with_material(PhysicsMaterial::PLAYER)
            .with_filter(CollisionFilter::player())
            .with_gravity(false);

        assert_eq!(body.velocity, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(body.mass, 5.0);
        assert_eq!(body.material, PhysicsMaterial::PLAYER);
        assert_eq!(body.filter, CollisionFilter::player());
        assert!(!body.affected_by_gravity);
    }

    #[test]
    fn test_set_position_syncs_collider() {
        let mut body = RigidBody::new_capsule(Vec3::ZERO, 1.7, 0.4);
        let new_pos = Vec3::new(5.0, 10.0, 3.0);
        body.set_position(new_pos);
        assert_eq!(body.position, new_pos);
        assert_eq!(body.collider.center(), new_pos);
    }

    #[test]
    fn test_apply_correction() {
        let mut body = RigidBody::new_capsule(Vec3::X, 1.7, 0.4);
        body.apply_correction(Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(body.position, Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(body.collider.center(), Vec3::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_static_collider_constructors() {
        let floor = StaticCollider::floor(0.0, PhysicsMaterial::CONCRETE);
        assert!(matches!(floor.collider, Collider::Plane(_)));
        assert_eq!(floor.filter, CollisionFilter::static_world());

        let slab = StaticCollider::aabb(Vec3::ZERO, Vec3::new(5.0, 0.05, 5.0), PhysicsMaterial::CONCRETE);
        assert_eq!(slab.collider.center(), Vec3::ZERO);
    }
}
