//! Physics world and simulation

use crate::body::{BodyKey, RigidBody, StaticCollider};
use crate::collision::{capsule_vs_aabb, capsule_vs_capsule, capsule_vs_plane, Contact};
use crate::shapes::Collider;
use zaranthis_math::Vec3;
use slotmap::SlotMap;

/// Configuration for the physics simulation
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Gravity acceleration (applied to Y-axis, negative = down)
    pub gravity: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self { gravity: -9.8 }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }
}

/// The physics world containing all rigid bodies
pub struct PhysicsWorld {
    /// All rigid bodies in the world (using generational keys)
    bodies: SlotMap<BodyKey, RigidBody>,
    /// Static colliders (grounds, walls, props)
    static_colliders: Vec<StaticCollider>,
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            static_colliders: Vec::new(),
            config,
        }
    }

    /// Add a static collider to the world
    pub fn add_static_collider(&mut self, collider: StaticCollider) {
        self.static_colliders.push(collider);
    }

    /// Get immutable access to static colliders
    pub fn static_colliders(&self) -> &[StaticCollider] {
        &self.static_colliders
    }

    /// Add a body to the world and return its key
    pub fn add_body(&mut self, body: RigidBody) -> BodyKey {
        self.bodies.insert(body)
    }

    /// Remove a body from the world and return it
    pub fn remove_body(&mut self, key: BodyKey) -> Option<RigidBody> {
        self.bodies.remove(key)
    }

    /// Get an immutable reference to a body by key
    pub fn get_body(&self, key: BodyKey) -> Option<&RigidBody> {
        self.bodies.get(key)
    }

    /// Get a mutable reference to a body by key
    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut RigidBody> {
        self.bodies.get_mut(key)
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of bodies currently taking part in the simulation
    pub fn enabled_body_count(&self) -> usize {
        self.bodies.values().filter(|b| b.enabled).count()
    }

    /// Step the physics simulation forward by dt seconds
    ///
    /// Disabled bodies are skipped entirely. Order:
    /// 1. Gravity and velocity integration
    /// 2. Static collider resolution
    /// 3. Body-body resolution
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        for (_key, body) in &mut self.bodies {
            if !body.enabled {
                continue;
            }

            if body.affected_by_gravity {
                body.velocity.y += self.config.gravity * dt;
            }

            // Locked inertia: contacts never spin the capsule
            if body.rotation_locked() {
                body.angular_velocity = Vec3::ZERO;
            }

            let displacement = body.velocity * dt;
            body.position += displacement;
            body.collider = body.collider.translated(displacement);
        }

        self.resolve_static_collisions();
        self.resolve_body_collisions();
    }

    /// Check for collision between a body collider and a static collider
    fn check_static_collision(body_collider: &Collider, static_collider: &Collider) -> Option<Contact> {
        match (body_collider, static_collider) {
            (Collider::Capsule(capsule), Collider::Plane(plane)) => capsule_vs_plane(capsule, plane),
            (Collider::Capsule(capsule), Collider::Aabb(aabb)) => capsule_vs_aabb(capsule, aabb),
            // Dynamic bodies are always capsules; static capsules are not used
            _ => None,
        }
    }

    /// Resolve collisions between bodies and static colliders
    fn resolve_static_collisions(&mut self) {
        for (_key, body) in &mut self.bodies {
            if !body.enabled {
                continue;
            }

            for static_col in &self.static_colliders {
                if !body.filter.collides_with(&static_col.filter) {
                    continue;
                }

                let Some(contact) = Self::check_static_collision(&body.collider, &static_col.collider) else {
                    continue;
                };
                if !contact.is_colliding() {
                    continue;
                }

                body.apply_correction(contact.normal * contact.penetration);

                let combined = body.material.combine(&static_col.material);
                let velocity_along_normal = body.velocity.dot(contact.normal);
                if velocity_along_normal < 0.0 {
                    // Remove the normal component (with bounce), then apply friction to the rest
                    let normal_velocity = contact.normal * velocity_along_normal;
                    body.velocity -= normal_velocity * (1.0 + combined.restitution);

                    let normal_part = contact.normal * body.velocity.dot(contact.normal);
                    let tangent_velocity = body.velocity - normal_part;
                    if tangent_velocity.length() > 0.0001 {
                        body.velocity = normal_part + tangent_velocity * (1.0 - combined.friction);
                    }
                }
            }
        }
    }

    /// Resolve collisions between enabled bodies
    fn resolve_body_collisions(&mut self) {
        let keys: Vec<BodyKey> = self
            .bodies
            .iter()
            .filter(|(_, b)| b.enabled)
            .map(|(k, _)| k)
            .collect();

        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                let (key_a, key_b) = (keys[i], keys[j]);
                let (a, b) = (&self.bodies[key_a], &self.bodies[key_b]);

                if !a.filter.collides_with(&b.filter) {
                    continue;
                }

                let contact = match (&a.collider, &b.collider) {
                    (Collider::Capsule(ca), Collider::Capsule(cb)) => capsule_vs_capsule(ca, cb),
                    _ => None,
                };

                let Some(contact) = contact else { continue };
                if !contact.is_colliding() {
                    continue;
                }

                // Normal points from B toward A: split the push by mass
                let total_mass = a.mass + b.mass;
                let ratio_a = if total_mass > 0.0 { b.mass / total_mass } else { 0.5 };
                let ratio_b = 1.0 - ratio_a;
                let push = contact.normal * contact.penetration;

                self.bodies[key_a].apply_correction(push * ratio_a);
                self.bodies[key_b].apply_correction(-push * ratio_b);
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::MassProperties;
    use crate::collision::CollisionFilter;
    use crate::material::PhysicsMaterial;

    fn world_with_floor(gravity: f32, floor_y: f32) -> PhysicsWorld {
        let mut world = PhysicsWorld::with_config(PhysicsConfig::new(gravity));
        world.add_static_collider(StaticCollider::floor(floor_y, PhysicsMaterial::new(0.0, 0.0)));
        world
    }

    #[test]
    fn test_physics_config_default() {
        let config = PhysicsConfig::default();
        assert!((config.gravity - (-9.8)).abs() < 0.0001);
    }

    #[test]
    fn test_world_add_and_remove_body() {
        let mut world = PhysicsWorld::new();
        let key = world.add_body(RigidBody::new_capsule(Vec3::new(0.0, 5.0, 0.0), 1.7, 0.4));
        assert_eq!(world.body_count(), 1);
        assert!(world.get_body(key).is_some());

        assert!(world.remove_body(key).is_some());
        assert!(world.get_body(key).is_none());

        // Stale key stays dead after the slot is reused
        let new_key = world.add_body(RigidBody::new_capsule(Vec3::ZERO, 1.7, 0.4));
        assert!(world.get_body(key).is_none());
        assert!(world.get_body(new_key).is_some());
    }

    #[test]
    fn test_gravity_application() {
        let mut world = PhysicsWorld::with_config(PhysicsConfig::new(-20.0));
        let key = world.add_body(RigidBody::new_capsule(Vec3::new(0.0, 10.0, 0.0), 1.7, 0.4));

        world.step(0.1);

        let body = world.get_body(key).unwrap();
        assert!((body.velocity.y - (-2.0)).abs() < 0.0001);
    }

    #[test]
    fn test_velocity_integration() {
        let mut world = PhysicsWorld::with_config(PhysicsConfig::new(0.0));
        let body = RigidBody::new_capsule(Vec3::new(0.0, 10.0, 0.0), 1.7, 0.4)
            .with_velocity(Vec3::new(10.0, 0.0, 0.0));
        let key = world.add_body(body);

        world.step(1.0);

        let body = world.get_body(key).unwrap();
        assert!((body.position.x - 10.0).abs() < 0.0001);
        assert_eq!(body.collider.center(), body.position);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut world = PhysicsWorld::new();
        let key = world.add_body(
            RigidBody::new_capsule(Vec3::new(0.0, 5.0, 0.0), 1.7, 0.4)
                .with_velocity(Vec3::new(1.0, 0.0, 0.0)),
        );
        world.step(0.0);
        let body = world.get_body(key).unwrap();
        assert_eq!(body.position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(body.velocity, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_disabled_body_is_frozen() {
        let mut world = PhysicsWorld::new();
        let mut body = RigidBody::new_capsule(Vec3::new(0.0, 5.0, 0.0), 1.7, 0.4)
            .with_velocity(Vec3::new(3.0, 0.0, 0.0));
        body.enabled = false;
        let key = world.add_body(body);

        world.step(0.5);

        let body = world.get_body(key).unwrap();
        assert_eq!(body.position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(body.velocity, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(world.enabled_body_count(), 0);
    }

    #[test]
    fn test_capsule_lands_on_floor() {
        let mut world = world_with_floor(-9.8, 0.0);
        let key = world.add_body(RigidBody::new_capsule(Vec3::new(0.0, 2.0, 0.0), 1.7, 0.4));

        for _ in 0..200 {
            world.step(0.016);
        }

        let body = world.get_body(key).unwrap();
        // Capsule base rests on the floor: center at half height
        assert!((body.position.y - 0.85).abs() < 0.05);
        assert!(body.velocity.y.abs() < 0.2);
    }

    #[test]
    fn test_capsule_stopped_by_wall() {
        let mut world = PhysicsWorld::with_config(PhysicsConfig::new(0.0));
        world.add_static_collider(StaticCollider::aabb(
            Vec3::new(5.0, 4.0, 0.0),
            Vec3::new(0.05, 4.0, 5.0),
            PhysicsMaterial::CONCRETE,
        ));
        let key = world.add_body(
            RigidBody::new_capsule(Vec3::new(3.0, 1.0, 0.0), 1.7, 0.4)
                .with_velocity(Vec3::new(2.0, 0.0, 0.0)),
        );

        for _ in 0..120 {
            world.step(0.016);
        }

        let body = world.get_body(key).unwrap();
        assert!(body.position.x <= 4.95 - 0.4 + 0.01, "x = {}", body.position.x);
    }

    #[test]
    fn test_locked_rotation_clears_angular_velocity() {
        let mut world = PhysicsWorld::with_config(PhysicsConfig::new(0.0));
        let mut body = RigidBody::new_capsule(Vec3::ZERO, 1.7, 0.4);
        body.angular_velocity = Vec3::new(1.0, 0.0, 2.0);
        body.mass_properties = Some(MassProperties::rotation_locked(1.0, 1.7));
        let key = world.add_body(body);

        world.step(0.016);

        assert_eq!(world.get_body(key).unwrap().angular_velocity, Vec3::ZERO);
    }

    #[test]
    fn test_player_filtered_bodies_pass_through_each_other() {
        let mut world = PhysicsWorld::with_config(PhysicsConfig::new(0.0));
        let a = world.add_body(
            RigidBody::new_capsule(Vec3::ZERO, 1.7, 0.4).with_filter(CollisionFilter::player()),
        );
        let b = world.add_body(
            RigidBody::new_capsule(Vec3::new(0.3, 0.0, 0.0), 1.7, 0.4)
                .with_filter(CollisionFilter::player()),
        );

        world.step(0.016);

        assert_eq!(world.get_body(a).unwrap().position, Vec3::ZERO);
        assert_eq!(world.get_body(b).unwrap().position, Vec3::new(0.3, 0.0, 0.0));
    }

    #[test]
    fn test_default_filtered_bodies_separate() {
        let mut world = PhysicsWorld::with_config(PhysicsConfig::new(0.0));
        let a = world.add_body(RigidBody::new_capsule(Vec3::ZERO, 1.7, 0.4));
        let b = world.add_body(RigidBody::new_capsule(Vec3::new(0.3, 0.0, 0.0), 1.7, 0.4));

        world.step(0.016);

        let pa = world.get_body(a).unwrap().position;
        let pb = world.get_body(b).unwrap().position;
        assert!((pb - pa).length() >= 0.8 - 0.001);
    }
}
