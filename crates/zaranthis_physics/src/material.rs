//! Surface materials
//!
//! Each collider carries a [`PhysicsMaterial`]; when the player capsule
//! touches a static surface the two are mixed with [`PhysicsMaterial::combine`].

use serde::{Deserialize, Serialize};

/// Grip and bounce of a surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    /// 0 slides forever, 1 stops tangential motion on contact
    pub friction: f32,
    /// Fraction of normal speed kept when bouncing off
    pub restitution: f32,
}

/// Unnamed surfaces in a layout get a neutral half-grip, no bounce
impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            friction: 0.5,
            restitution: 0.0,
        }
    }
}

impl PhysicsMaterial {
    /// Avatar capsule
    pub const PLAYER: Self = Self { friction: 1.0, restitution: 0.1 };
    /// Zaranthis terrain
    pub const GROUND: Self = Self { friction: 0.8, restitution: 0.1 };
    /// Labo floor, walls and roof
    pub const CONCRETE: Self = Self { friction: 0.7, restitution: 0.1 };
    /// Props such as the ship hull
    pub const METAL: Self = Self { friction: 0.4, restitution: 0.1 };

    /// Both coefficients are clamped into `[0, 1]`
    pub fn new(friction: f32, restitution: f32) -> Self {
        Self {
            friction: friction.clamp(0.0, 1.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Material of a contact between `self` and `other`.
    /// Friction is the geometric mean; the bouncier surface wins.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            friction: (self.friction * other.friction).sqrt(),
            restitution: self.restitution.max(other.restitution),
        }
    }
}
