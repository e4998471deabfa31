//! Player movement and dual-world teleportation
//!
//! This crate provides the per-frame gameplay for Labo / Zaranthis:
//!
//! - [`PlayerController`] - camera-relative movement and animation state
//! - [`AnimationBank`] - idle/walk/run clips resolved once at load
//! - [`CameraRig`] - free and follow cameras, and which one is active
//! - [`TeleportZoneRegistry`] - validated trigger volumes between worlds
//! - [`WorldSwitcher`] - current world, teleport transitions and cooldown
//! - [`WorldLayout`] - RON-serializable description of both worlds
//! - [`SessionBuilder`] / [`GameSession`] - construction and the game-loop tick

mod animation;
mod builder;
mod camera;
mod context;
mod error;
mod layout;
mod player;
mod session;
mod switcher;
mod teleport;
mod world_id;

pub use animation::{AnimationBank, AnimationClip, ClipState, DEFAULT_CLIP_DURATION};
pub use builder::SessionBuilder;
pub use camera::{Camera, CameraBasis, CameraKind, CameraRig, CameraSettings};
pub use context::WorldContext;
pub use error::{LayoutError, SessionError, TeleportError};
pub use layout::{BoxSpec, PadSpec, WorldLayout, WorldRegion, ZARANTHIS_ORIGIN};
pub use player::{MovementSettings, MovementState, PlayerController, PlayerRoster, PlayerState};
pub use session::{GameSession, SessionConfig, SessionStatus};
pub use switcher::{TeleportEvent, WorldSwitcher, DEFAULT_TELEPORT_COOLDOWN};
pub use teleport::{TeleportZone, TeleportZoneRegistry, DEFAULT_TRIGGER_RADIUS};
pub use world_id::WorldId;

// Re-export commonly used types from the lower crates for convenience
pub use zaranthis_input::{InputAction, InputState, LogicalKey};
pub use zaranthis_math::Vec3;
pub use zaranthis_physics::{PhysicsConfig, PhysicsMaterial, PhysicsWorld, PlayerBodyDesc};
