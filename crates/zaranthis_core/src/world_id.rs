//! The two playable worlds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the two disjoint playable regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldId {
    /// The indoor laboratory (walking pace)
    Labo,
    /// The alien outdoor world (running pace)
    Zaranthis,
}

impl WorldId {
    /// Both worlds, Labo first
    pub const ALL: [WorldId; 2] = [WorldId::Labo, WorldId::Zaranthis];

    /// The world on the other side of a teleport pad
    pub fn other(self) -> WorldId {
        match self {
            WorldId::Labo => WorldId::Zaranthis,
            WorldId::Zaranthis => WorldId::Labo,
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            WorldId::Labo => "Labo",
            WorldId::Zaranthis => "Zaranthis",
        }
    }

    /// Index into per-world arrays
    pub fn index(self) -> usize {
        match self {
            WorldId::Labo => 0,
            WorldId::Zaranthis => 1,
        }
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
