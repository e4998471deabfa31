//! Collision detection for capsules, boxes and planes
//!
//! Also provides collision filtering via layer masks.

use bitflags::bitflags;

use crate::shapes::{Aabb, Capsule, Plane, Sphere};
use zaranthis_math::Vec3;

bitflags! {
    /// Collision layers for filtering which objects can collide
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionLayer: u32 {
        /// Default layer for most objects
        const DEFAULT = 1 << 0;
        /// Player capsules
        const PLAYER = 1 << 1;
        /// Static world geometry (grounds, walls, props)
        const STATIC = 1 << 2;
        /// Trigger volumes (detect but don't push)
        const TRIGGER = 1 << 3;
        /// All layers (collide with everything)
        const ALL = 0xFFFFFFFF;
    }
}

/// Collision filter determining what an object collides with
///
/// Two objects A and B collide if `(A.layer & B.mask) != 0` and
/// `(B.layer & A.mask) != 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionFilter {
    /// Which layer(s) this object belongs to
    pub layer: CollisionLayer,
    /// Which layer(s) this object can collide with
    pub mask: CollisionLayer,
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self {
            layer: CollisionLayer::DEFAULT,
            mask: CollisionLayer::ALL,
        }
    }
}

impl CollisionFilter {
    /// Create a new collision filter with specified layer and mask
    pub fn new(layer: CollisionLayer, mask: CollisionLayer) -> Self {
        Self { layer, mask }
    }

    /// Check if this filter allows collision with another filter
    pub fn collides_with(&self, other: &Self) -> bool {
        self.layer.intersects(other.mask) && other.layer.intersects(self.mask)
    }

    /// Filter for player capsules
    ///
    /// Players collide with the static world but never with each other
    /// (the two avatars live in different worlds) or with triggers.
    pub fn player() -> Self {
        Self {
            layer: CollisionLayer::PLAYER,
            mask: CollisionLayer::ALL & !CollisionLayer::PLAYER & !CollisionLayer::TRIGGER,
        }
    }

    /// Filter for static world geometry
    pub fn static_world() -> Self {
        Self {
            layer: CollisionLayer::STATIC,
            mask: CollisionLayer::ALL,
        }
    }

    /// Filter for a disabled body: nothing collides with it
    pub fn none() -> Self {
        Self {
            layer: CollisionLayer::empty(),
            mask: CollisionLayer::empty(),
        }
    }
}

/// Contact information from a collision
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// Point of contact
    pub point: Vec3,
    /// Normal pointing from the second shape toward the first
    pub normal: Vec3,
    /// Penetration depth (positive means overlapping)
    pub penetration: f32,
}

impl Contact {
    /// Create a new contact
    pub fn new(point: Vec3, normal: Vec3, penetration: f32) -> Self {
        Self {
            point,
            normal,
            penetration,
        }
    }

    /// Check if this represents an actual collision (positive penetration)
    pub fn is_colliding(&self) -> bool {
        self.penetration > 0.0
    }
}

/// Test sphere vs plane collision
///
/// The contact normal is the plane normal.
pub fn sphere_vs_plane(sphere: &Sphere, plane: &Plane) -> Option<Contact> {
    // radius - signed_dist works whether the center is above or below
    let penetration = sphere.radius - plane.signed_distance(sphere.center);

    if penetration > 0.0 {
        let normal = plane.normal;
        let point = sphere.center - normal * sphere.radius;
        Some(Contact::new(point, normal, penetration))
    } else {
        None
    }
}

/// Test sphere vs AABB collision
///
/// The contact normal points from the AABB toward the sphere.
pub fn sphere_vs_aabb(sphere: &Sphere, aabb: &Aabb) -> Option<Contact> {
    let closest = aabb.closest_point(sphere.center);
    let delta = sphere.center - closest;
    let dist_squared = delta.length_squared();

    if dist_squared >= sphere.radius * sphere.radius {
        return None;
    }

    let dist = dist_squared.sqrt();
    let normal = if dist > 0.0001 {
        delta.normalized()
    } else {
        // Center is inside the box: escape along the shallowest face
        let to_min = sphere.center - aabb.min;
        let to_max = aabb.max - sphere.center;
        let candidates = [
            (to_min.x, -Vec3::X),
            (to_max.x, Vec3::X),
            (to_min.y, -Vec3::Y),
            (to_max.y, Vec3::Y),
            (to_min.z, -Vec3::Z),
            (to_max.z, Vec3::Z),
        ];
        let mut best = candidates[0];
        for candidate in candidates.iter().skip(1) {
            if candidate.0 < best.0 {
                best = *candidate;
            }
        }
        // Push fully out of the box, not just by the radius
        return Some(Contact::new(closest, best.1, sphere.radius + best.0));
    };

    Some(Contact::new(closest, normal, sphere.radius - dist))
}

/// Test an upright capsule against a plane
///
/// Uses whichever cap sphere lies deeper along the plane normal.
pub fn capsule_vs_plane(capsule: &Capsule, plane: &Plane) -> Option<Contact> {
    let bottom = capsule.bottom_sphere();
    let top = capsule.top_sphere();
    let deepest = if plane.signed_distance(bottom.center) <= plane.signed_distance(top.center) {
        bottom
    } else {
        top
    };
    sphere_vs_plane(&deepest, plane)
}

/// Test an upright capsule against an AABB
///
/// The contact normal points from the AABB toward the capsule.
pub fn capsule_vs_aabb(capsule: &Capsule, aabb: &Aabb) -> Option<Contact> {
    // Closest segment height: clamp into the box's Y range first, then back
    // onto the segment. Exact for a vertical segment against an axis-aligned box.
    let h = capsule.half_segment();
    let y = capsule
        .center
        .y
        .clamp(aabb.min.y, aabb.max.y)
        .clamp(capsule.center.y - h, capsule.center.y + h);
    let sphere = Sphere::new(Vec3::new(capsule.center.x, y, capsule.center.z), capsule.radius);
    sphere_vs_aabb(&sphere, aabb)
}

/// Test two upright capsules
///
/// The contact normal points from `b` toward `a`.
pub fn capsule_vs_capsule(a: &Capsule, b: &Capsule) -> Option<Contact> {
    let (ha, hb) = (a.half_segment(), b.half_segment());
    let ya = b.center.y.clamp(a.center.y - ha, a.center.y + ha);
    let yb = ya.clamp(b.center.y - hb, b.center.y + hb);
    let ya = yb.clamp(a.center.y - ha, a.center.y + ha);

    let pa = Vec3::new(a.center.x, ya, a.center.z);
    let pb = Vec3::new(b.center.x, yb, b.center.z);
    let delta = pa - pb;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;

    if dist_sq < min_dist * min_dist && dist_sq > 0.0001 {
        let dist = dist_sq.sqrt();
        let normal = delta.normalized();
        Some(Contact::new(pb + normal * b.radius, normal, min_dist - dist))
    } else {
        None
    }
}
