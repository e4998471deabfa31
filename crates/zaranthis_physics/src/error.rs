//! Physics error types

use std::fmt;

/// Errors raised by the player body adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// The body key no longer refers to a body in the world
    BodyMissing,
    /// Mass properties were already configured for this body
    AlreadyConfigured,
    /// A velocity write happened before mass properties were configured
    NotConfigured,
    /// Mass properties were configured before any static geometry existed
    NoStaticGeometry,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::BodyMissing => write!(f, "Physics body is not in the world"),
            PhysicsError::AlreadyConfigured => write!(f, "Mass properties already configured"),
            PhysicsError::NotConfigured => {
                write!(f, "Mass properties must be configured before the first velocity write")
            }
            PhysicsError::NoStaticGeometry => {
                write!(f, "Body must be attached after static collision geometry exists")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}
