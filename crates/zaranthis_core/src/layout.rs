//! World layout serialization
//!
//! A [`WorldLayout`] describes the static collision geometry, the player
//! spawn and the outgoing teleport pad of each world. Layouts are stored as
//! RON; [`WorldLayout::builtin`] provides the stock Labo / Zaranthis scene.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LayoutError;
use crate::world_id::WorldId;
use zaranthis_math::Vec3;
use zaranthis_physics::PhysicsMaterial;

/// Where the Zaranthis region sits in the shared physics space
pub const ZARANTHIS_ORIGIN: Vec3 = Vec3::new(500.0, 0.0, 500.0);

/// An axis-aligned static box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub center: Vec3,
    pub half_extents: Vec3,
    #[serde(default)]
    pub material: PhysicsMaterial,
}

impl BoxSpec {
    pub fn new(center: Vec3, half_extents: Vec3, material: PhysicsMaterial) -> Self {
        Self {
            center,
            half_extents,
            material,
        }
    }
}

/// A teleport pad leading out of its region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadSpec {
    pub name: String,
    pub center: Vec3,
    pub destination: WorldId,
    /// Falls back to the session's configured radius when absent
    #[serde(default)]
    pub trigger_radius: Option<f32>,
}

/// Everything placed in one world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldRegion {
    pub world: WorldId,
    pub ground: BoxSpec,
    /// Walls, roof and props
    #[serde(default)]
    pub walls: Vec<BoxSpec>,
    /// Capsule center at spawn
    pub spawn: Vec3,
    #[serde(default)]
    pub pad: Option<PadSpec>,
}

/// Declarative description of both worlds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldLayout {
    pub name: String,
    /// Overrides the configured gravity when present
    #[serde(default)]
    pub gravity: Option<f32>,
    pub regions: Vec<WorldRegion>,
}

impl Default for WorldLayout {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WorldLayout {
    /// The stock scene: a closed 10x10 laboratory and a 350x350 alien plain
    pub fn builtin() -> Self {
        const WALL_HALF_HEIGHT: f32 = 4.0;
        const ROOM_HALF: f32 = 5.0;
        const SLAB_HALF: f32 = 0.05;

        let wall = |center: Vec3, half_extents: Vec3| BoxSpec::new(center, half_extents, PhysicsMaterial::CONCRETE);

        let labo = WorldRegion {
            world: WorldId::Labo,
            ground: BoxSpec::new(
                Vec3::ZERO,
                Vec3::new(ROOM_HALF, SLAB_HALF, ROOM_HALF),
                PhysicsMaterial::CONCRETE,
            ),
            walls: vec![
                wall(Vec3::new(ROOM_HALF, WALL_HALF_HEIGHT, 0.0), Vec3::new(SLAB_HALF, WALL_HALF_HEIGHT, ROOM_HALF)),
                wall(Vec3::new(-ROOM_HALF, WALL_HALF_HEIGHT, 0.0), Vec3::new(SLAB_HALF, WALL_HALF_HEIGHT, ROOM_HALF)),
                wall(Vec3::new(0.0, WALL_HALF_HEIGHT, ROOM_HALF), Vec3::new(ROOM_HALF, WALL_HALF_HEIGHT, SLAB_HALF)),
                wall(Vec3::new(0.0, WALL_HALF_HEIGHT, -ROOM_HALF), Vec3::new(ROOM_HALF, WALL_HALF_HEIGHT, SLAB_HALF)),
                // Roof
                wall(Vec3::new(0.0, 2.0 * WALL_HALF_HEIGHT, 0.0), Vec3::new(ROOM_HALF, SLAB_HALF, ROOM_HALF)),
            ],
            spawn: Vec3::new(-3.0, 1.0, -4.0),
            pad: Some(PadSpec {
                name: "labo_gate".to_string(),
                center: Vec3::new(-4.0, 0.9, -2.0),
                destination: WorldId::Zaranthis,
                trigger_radius: None,
            }),
        };

        let zaranthis = WorldRegion {
            world: WorldId::Zaranthis,
            ground: BoxSpec::new(
                ZARANTHIS_ORIGIN + Vec3::new(0.0, -SLAB_HALF, 0.0),
                Vec3::new(175.0, SLAB_HALF, 175.0),
                PhysicsMaterial::GROUND,
            ),
            walls: Vec::new(),
            spawn: ZARANTHIS_ORIGIN + Vec3::new(0.0, 1.0, 0.0),
            pad: Some(PadSpec {
                name: "zaranthis_gate".to_string(),
                center: ZARANTHIS_ORIGIN + Vec3::new(4.0, 0.9, 0.0),
                destination: WorldId::Labo,
                trigger_radius: None,
            }),
        };

        Self {
            name: "labo_zaranthis".to_string(),
            gravity: None,
            regions: vec![labo, zaranthis],
        }
    }

    /// Load a layout from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Parse a layout from RON text
    pub fn from_ron(contents: &str) -> Result<Self, LayoutError> {
        Ok(ron::from_str(contents)?)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, LayoutError> {
        let pretty = ron::ser::PrettyConfig::new().struct_names(true);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    /// Save a layout to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LayoutError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// The region describing `world`, if any
    pub fn region(&self, world: WorldId) -> Option<&WorldRegion> {
        self.regions.iter().find(|r| r.world == world)
    }
}
