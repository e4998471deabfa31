//! Shared mutable world state handed to the per-frame systems

use crate::camera::CameraRig;
use zaranthis_physics::PhysicsWorld;

/// Physics and cameras, passed by `&mut` to the controller and switcher
pub struct WorldContext {
    pub physics: PhysicsWorld,
    pub cameras: CameraRig,
}

impl WorldContext {
    pub fn new(physics: PhysicsWorld, cameras: CameraRig) -> Self {
        Self { physics, cameras }
    }
}
