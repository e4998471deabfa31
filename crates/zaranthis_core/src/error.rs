//! Error types for teleport registration, layout loading and session build

use std::fmt;
use std::io;

use crate::world_id::WorldId;
use zaranthis_physics::PhysicsError;

/// A teleport zone was rejected at registration
#[derive(Debug, Clone, PartialEq)]
pub enum TeleportError {
    /// Source and destination are the same world
    SameWorld { zone: String },
    /// Trigger radius is not a positive finite number
    InvalidRadius { zone: String, radius: f32 },
    /// A zone with this name already exists
    DuplicateName(String),
    /// An outgoing zone already exists for this (source, destination) pair
    DuplicateRoute { source: WorldId, destination: WorldId },
    /// Trigger volumes intersect
    Overlap { zone: String, other: String },
}

impl fmt::Display for TeleportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeleportError::SameWorld { zone } => {
                write!(f, "Teleport zone '{}' leads back to its own world", zone)
            }
            TeleportError::InvalidRadius { zone, radius } => {
                write!(f, "Teleport zone '{}' has invalid trigger radius {}", zone, radius)
            }
            TeleportError::DuplicateName(name) => write!(f, "Teleport zone '{}' already registered", name),
            TeleportError::DuplicateRoute { source, destination } => {
                write!(f, "A teleport zone from {} to {} already exists", source, destination)
            }
            TeleportError::Overlap { zone, other } => {
                write!(f, "Teleport zone '{}' overlaps '{}'", zone, other)
            }
        }
    }
}

impl std::error::Error for TeleportError {}

/// Error loading or saving a world layout
#[derive(Debug)]
pub enum LayoutError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for LayoutError {
    fn from(e: io::Error) -> Self {
        LayoutError::Io(e)
    }
}

impl From<ron::error::SpannedError> for LayoutError {
    fn from(e: ron::error::SpannedError) -> Self {
        LayoutError::Parse(e)
    }
}

impl From<ron::Error> for LayoutError {
    fn from(e: ron::Error) -> Self {
        LayoutError::Serialize(e)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Io(e) => write!(f, "IO error: {}", e),
            LayoutError::Parse(e) => write!(f, "Parse error: {}", e),
            LayoutError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Io(e) => Some(e),
            LayoutError::Parse(e) => Some(e),
            LayoutError::Serialize(e) => Some(e),
        }
    }
}

/// Error building a game session
#[derive(Debug)]
pub enum SessionError {
    /// Player body setup failed
    Physics(PhysicsError),
    /// A teleport zone was rejected
    Teleport(TeleportError),
    /// The world layout could not be loaded
    Layout(LayoutError),
    /// No player was added for the starting world
    MissingPlayer(WorldId),
}

impl From<PhysicsError> for SessionError {
    fn from(e: PhysicsError) -> Self {
        SessionError::Physics(e)
    }
}

impl From<TeleportError> for SessionError {
    fn from(e: TeleportError) -> Self {
        SessionError::Teleport(e)
    }
}

impl From<LayoutError> for SessionError {
    fn from(e: LayoutError) -> Self {
        SessionError::Layout(e)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Physics(e) => write!(f, "Physics setup failed: {}", e),
            SessionError::Teleport(e) => write!(f, "Invalid teleport zone: {}", e),
            SessionError::Layout(e) => write!(f, "World layout error: {}", e),
            SessionError::MissingPlayer(world) => write!(f, "No player spawned in starting world {}", world),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Physics(e) => Some(e),
            SessionError::Teleport(e) => Some(e),
            SessionError::Layout(e) => Some(e),
            SessionError::MissingPlayer(_) => None,
        }
    }
}
