//! Physics for the Labo / Zaranthis player avatars
//!
//! This crate provides:
//! - Collision shapes (capsules, AABBs, planes)
//! - Collision detection and layer filtering
//! - Rigid body integration with gravity against static geometry
//! - [`PlayerBody`], the adapter a player controller drives

pub mod body;
pub mod collision;
pub mod error;
pub mod material;
pub mod player;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyKey, MassProperties, RigidBody, StaticCollider};
pub use collision::{CollisionFilter, CollisionLayer, Contact};
pub use error::PhysicsError;
pub use material::PhysicsMaterial;
pub use player::{PlayerBody, PlayerBodyDesc, DEFAULT_PLAYER_HEIGHT, DEFAULT_PLAYER_RADIUS};
pub use shapes::{Aabb, Capsule, Collider, Plane, Sphere};
pub use world::{PhysicsConfig, PhysicsWorld};
