//! Cameras and the camera rig
//!
//! Two cameras exist for the whole session: a free camera used in Labo and
//! a follow camera used in Zaranthis. The [`CameraRig`] owns both and knows
//! which one is active. Orientation is stored as yaw/pitch:
//! - yaw 0 looks down +Z, positive yaw turns toward +X
//! - pitch is clamped to avoid looking straight up or down

use zaranthis_math::Vec3;
use zaranthis_physics::{BodyKey, PhysicsWorld};

/// Pitch limit in radians
const PITCH_LIMIT: f32 = 1.5;

/// Directional basis of a camera in world space
pub trait CameraBasis {
    /// Unit vector the camera looks along
    fn forward_axis(&self) -> Vec3;
    /// Unit vector to the camera's right
    fn right_axis(&self) -> Vec3;
}

/// Which of the two cameras
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraKind {
    /// User-steered camera (Labo)
    Free,
    /// Camera chasing a locked target (Zaranthis)
    Follow,
}

/// Placement and tuning for both cameras
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Free camera start position
    pub free_position: Vec3,
    /// Point the free camera initially looks at
    pub free_target: Vec3,
    /// Horizontal distance the follow camera keeps behind its target
    pub follow_distance: f32,
    /// Height of the follow camera above its target
    pub follow_height: f32,
    /// Radians per pixel of mouse motion
    pub mouse_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            free_position: Vec3::new(5.0, 4.0, 5.0),
            free_target: Vec3::ZERO,
            follow_distance: 6.0,
            follow_height: 3.0,
            mouse_sensitivity: 0.002,
        }
    }
}

/// A single camera
#[derive(Debug, Clone)]
pub struct Camera {
    kind: CameraKind,
    /// World-space position
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    locked_target: Option<BodyKey>,
    distance: f32,
    height: f32,
}

impl Camera {
    /// Free camera at `position` looking at `target`
    pub fn free(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self {
            kind: CameraKind::Free,
            position,
            yaw: 0.0,
            pitch: 0.0,
            locked_target: None,
            distance: 0.0,
            height: 0.0,
        };
        camera.look_at(target);
        camera
    }

    /// Follow camera with no target yet
    pub fn follow(distance: f32, height: f32) -> Self {
        Self {
            kind: CameraKind::Follow,
            position: Vec3::new(0.0, height, -distance),
            yaw: 0.0,
            pitch: 0.0,
            locked_target: None,
            distance: distance.max(0.0),
            height,
        }
    }

    pub fn kind(&self) -> CameraKind {
        self.kind
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Body the camera is locked onto, if any
    pub fn locked_target(&self) -> Option<BodyKey> {
        self.locked_target
    }

    /// Lock onto (or release) a body
    pub fn set_locked_target(&mut self, target: Option<BodyKey>) {
        self.locked_target = target;
    }

    /// Turn to face a point
    ///
    /// Leaves the orientation unchanged if the point coincides with the camera.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        if dir.length_squared() < 1e-12 {
            return;
        }
        let flat = (dir.x * dir.x + dir.z * dir.z).sqrt();
        self.yaw = dir.x.atan2(dir.z);
        self.pitch = dir.y.atan2(flat).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Mouse look
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Place a follow camera behind and above `target`, facing it
    ///
    /// "Behind" is taken along the camera's current yaw, so mouse motion
    /// orbits the camera around the target.
    pub fn track(&mut self, target: Vec3) {
        let back = Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos()) * -self.distance;
        self.position = target + back + Vec3::UP * self.height;
        self.look_at(target);
    }
}

impl CameraBasis for Camera {
    fn forward_axis(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(cp * sy, sp, cp * cy)
    }

    fn right_axis(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cy, 0.0, -sy)
    }
}

/// Both cameras plus the active selection
#[derive(Debug, Clone)]
pub struct CameraRig {
    free: Camera,
    follow: Camera,
    active: CameraKind,
    settings: CameraSettings,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl CameraRig {
    /// Create the rig with the free camera active
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            free: Camera::free(settings.free_position, settings.free_target),
            follow: Camera::follow(settings.follow_distance, settings.follow_height),
            active: CameraKind::Free,
            settings,
        }
    }

    pub fn active_kind(&self) -> CameraKind {
        self.active
    }

    /// The camera currently in use
    pub fn active(&self) -> &Camera {
        self.camera(self.active)
    }

    pub fn camera(&self, kind: CameraKind) -> &Camera {
        match kind {
            CameraKind::Free => &self.free,
            CameraKind::Follow => &self.follow,
        }
    }

    pub fn camera_mut(&mut self, kind: CameraKind) -> &mut Camera {
        match kind {
            CameraKind::Free => &mut self.free,
            CameraKind::Follow => &mut self.follow,
        }
    }

    /// Switch to the free camera
    pub fn activate_free(&mut self) {
        self.active = CameraKind::Free;
    }

    /// Switch to the follow camera, locked onto `target`
    pub fn activate_follow(&mut self, target: BodyKey) {
        self.follow.set_locked_target(Some(target));
        self.active = CameraKind::Follow;
    }

    /// Apply mouse motion (in pixels) to the active camera
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        let sensitivity = self.settings.mouse_sensitivity;
        let yaw = delta_x as f32 * sensitivity;
        let pitch = -(delta_y as f32) * sensitivity;
        match self.active {
            CameraKind::Free => self.free.rotate(yaw, pitch),
            // Pitch is recomputed by `track`; only orbit horizontally
            CameraKind::Follow => self.follow.rotate(yaw, 0.0),
        }
    }

    /// Put the free camera back at its configured start pose
    pub fn reset_free(&mut self) {
        self.free = Camera::free(self.settings.free_position, self.settings.free_target);
    }

    /// Move the follow camera to its locked target
    ///
    /// Only runs while the follow camera is active. A target whose body has
    /// been removed leaves the camera where it is.
    pub fn update_follow(&mut self, physics: &PhysicsWorld) {
        if self.active != CameraKind::Follow {
            return;
        }
        let Some(key) = self.follow.locked_target() else {
            return;
        };
        match physics.get_body(key) {
            Some(body) => self.follow.track(body.position),
            None => log::debug!("Follow camera target {:?} has no body", key),
        }
    }
}

impl CameraBasis for CameraRig {
    fn forward_axis(&self) -> Vec3 {
        self.active().forward_axis()
    }

    fn right_axis(&self) -> Vec3 {
        self.active().right_axis()
    }
}
