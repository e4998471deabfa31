//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ZAR_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use zaranthis_core::{CameraSettings, MovementSettings, SessionConfig};
use zaranthis_math::Vec3;
use zaranthis_physics::{PhysicsMaterial, PlayerBodyDesc};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub teleport: TeleportConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ZAR_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // ZAR_TELEPORT__COOLDOWN_SECONDS=3 -> teleport.cooldown_seconds = 3.0
        figment = figment.merge(Env::prefixed("ZAR_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Session tuning for the core crate
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            movement: self.player.to_movement_settings(),
            body: self.player.to_body_desc(),
            physics: self.physics.to_physics_config(),
            cameras: self.camera.to_camera_settings(),
            teleport_cooldown: self.teleport.cooldown_seconds,
            trigger_radius: self.teleport.trigger_radius,
            animation_clips: self.player.animation_clips.clone(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Labo / Zaranthis".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Player avatar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Base speed in Labo (units per second)
    pub walk_speed: f32,
    /// Base speed in Zaranthis (units per second)
    pub run_speed: f32,
    pub capsule_height: f32,
    pub capsule_radius: f32,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
    /// Decay rate of horizontal speed once input stops
    pub deceleration: f32,
    /// Input magnitude treated as no input
    pub dead_zone: f32,
    /// Clip names the avatar asset exposes
    pub animation_clips: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 6.0,
            capsule_height: 1.7,
            capsule_radius: 0.4,
            mass: 1.0,
            friction: 1.0,
            restitution: 0.1,
            deceleration: 12.0,
            dead_zone: 0.1,
            animation_clips: vec!["idle".to_string(), "walk".to_string(), "run".to_string()],
        }
    }
}

impl PlayerConfig {
    pub fn to_movement_settings(&self) -> MovementSettings {
        MovementSettings {
            walk_speed: self.walk_speed,
            run_speed: self.run_speed,
            deceleration: self.deceleration,
            dead_zone: self.dead_zone,
        }
    }

    pub fn to_body_desc(&self) -> PlayerBodyDesc {
        PlayerBodyDesc {
            height: self.capsule_height,
            radius: self.capsule_radius,
            mass: self.mass,
            material: PhysicsMaterial::new(self.friction, self.restitution),
        }
    }
}

/// Teleport pad configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeleportConfig {
    /// Radius for pads that don't set their own
    pub trigger_radius: f32,
    /// Seconds pads stay inactive after a teleport
    pub cooldown_seconds: f32,
}

impl Default for TeleportConfig {
    fn default() -> Self {
        Self {
            trigger_radius: 1.5,
            cooldown_seconds: 2.0,
        }
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravity (negative = downward)
    pub gravity: f32,
    /// Longest frame fed to the simulation, in seconds
    pub max_frame_time: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            max_frame_time: 0.25,
        }
    }
}

impl PhysicsConfig {
    pub fn to_physics_config(&self) -> zaranthis_physics::PhysicsConfig {
        zaranthis_physics::PhysicsConfig::new(self.gravity)
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Free camera start position [x, y, z]
    pub free_position: [f32; 3],
    /// Point the free camera starts looking at [x, y, z]
    pub free_target: [f32; 3],
    /// Follow camera distance behind the player
    pub follow_distance: f32,
    /// Follow camera height above the player
    pub follow_height: f32,
    /// Radians per pixel of mouse motion
    pub mouse_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            free_position: [5.0, 4.0, 5.0],
            free_target: [0.0, 0.0, 0.0],
            follow_distance: 6.0,
            follow_height: 3.0,
            mouse_sensitivity: 0.002,
        }
    }
}

impl CameraConfig {
    pub fn to_camera_settings(&self) -> CameraSettings {
        CameraSettings {
            free_position: Vec3::from_array(self.free_position),
            free_target: Vec3::from_array(self.free_target),
            follow_distance: self.follow_distance,
            follow_height: self.follow_height,
            mouse_sensitivity: self.mouse_sensitivity,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// RON world layout; the built-in layout is used when empty
    #[serde(default)]
    pub layout_path: String,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Show the debug overlay at startup
    pub show_overlay: bool,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_overlay: false,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
