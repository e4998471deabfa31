//! Teleport zones
//!
//! A zone is a spherical trigger volume sitting in one world and leading to
//! the other. The registry is filled once at session build and then only read.

use serde::{Deserialize, Serialize};

use crate::error::TeleportError;
use crate::world_id::WorldId;
use zaranthis_math::Vec3;

/// Default trigger radius
pub const DEFAULT_TRIGGER_RADIUS: f32 = 1.5;

/// A named trigger volume joining two worlds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeleportZone {
    pub name: String,
    pub center: Vec3,
    pub trigger_radius: f32,
    pub source: WorldId,
    pub destination: WorldId,
}

impl TeleportZone {
    /// Zone with the default trigger radius
    pub fn new(name: impl Into<String>, center: Vec3, source: WorldId, destination: WorldId) -> Self {
        Self {
            name: name.into(),
            center,
            trigger_radius: DEFAULT_TRIGGER_RADIUS,
            source,
            destination,
        }
    }

    /// Builder: override the trigger radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.trigger_radius = radius;
        self
    }

    /// Whether a point lies strictly inside the trigger radius
    pub fn contains(&self, point: Vec3) -> bool {
        point.distance(self.center) < self.trigger_radius
    }

    /// Whether a player standing at `position` in `world` triggers this zone
    pub fn triggers(&self, world: WorldId, position: Vec3) -> bool {
        world == self.source && self.contains(position)
    }

    fn overlaps(&self, other: &TeleportZone) -> bool {
        self.center.distance(other.center) < self.trigger_radius + other.trigger_radius
    }

    fn validate(&self) -> Result<(), TeleportError> {
        if self.source == self.destination {
            return Err(TeleportError::SameWorld {
                zone: self.name.clone(),
            });
        }
        if !(self.trigger_radius > 0.0 && self.trigger_radius.is_finite()) {
            return Err(TeleportError::InvalidRadius {
                zone: self.name.clone(),
                radius: self.trigger_radius,
            });
        }
        Ok(())
    }
}

/// The fixed set of teleport zones, in evaluation order
///
/// Zones are kept ordered by source world (Labo first), so the Labo → Zaranthis
/// pad is always checked before the way back.
#[derive(Debug, Clone, Default)]
pub struct TeleportZoneRegistry {
    zones: Vec<TeleportZone>,
}

impl TeleportZoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a zone
    pub fn register(&mut self, zone: TeleportZone) -> Result<(), TeleportError> {
        zone.validate()?;

        for existing in &self.zones {
            if existing.name == zone.name {
                return Err(TeleportError::DuplicateName(zone.name));
            }
            if existing.source == zone.source && existing.destination == zone.destination {
                return Err(TeleportError::DuplicateRoute {
                    source: zone.source,
                    destination: zone.destination,
                });
            }
            if existing.overlaps(&zone) {
                return Err(TeleportError::Overlap {
                    zone: zone.name,
                    other: existing.name.clone(),
                });
            }
        }

        log::debug!(
            "Registered teleport zone '{}' ({} -> {}, radius {})",
            zone.name,
            zone.source,
            zone.destination,
            zone.trigger_radius
        );

        let index = self
            .zones
            .iter()
            .position(|z| z.source.index() > zone.source.index())
            .unwrap_or(self.zones.len());
        self.zones.insert(index, zone);

        debug_assert!(self.zones.windows(2).all(|w| w[0].source.index() <= w[1].source.index()));
        Ok(())
    }

    /// All zones in evaluation order
    pub fn zones(&self) -> &[TeleportZone] {
        &self.zones
    }

    pub fn get(&self, name: &str) -> Option<&TeleportZone> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// The zone leading out of `source`, if any
    pub fn outgoing(&self, source: WorldId) -> Option<&TeleportZone> {
        self.zones.iter().find(|z| z.source == source)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
