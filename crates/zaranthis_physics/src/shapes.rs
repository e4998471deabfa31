//! Collision shapes
//!
//! Lightweight primitives used for collision detection. Player bodies are
//! upright capsules; the static world is built from boxes and planes.

use zaranthis_math::Vec3;

/// A sphere defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere at the given center with the given radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point is inside or on the sphere
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// An upright capsule (Y-aligned) used for player bodies
///
/// `center` is the midpoint of the capsule; the total height includes both
/// hemispherical caps, so `height >= 2 * radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capsule {
    pub center: Vec3,
    pub height: f32,
    pub radius: f32,
}

impl Capsule {
    /// Create a capsule, clamping the height so it is at least a sphere
    pub fn new(center: Vec3, height: f32, radius: f32) -> Self {
        Self {
            center,
            height: height.max(radius * 2.0),
            radius,
        }
    }

    /// Half the distance between the two cap centers
    pub fn half_segment(&self) -> f32 {
        (self.height * 0.5 - self.radius).max(0.0)
    }

    /// Lowest point of the capsule (the "feet")
    pub fn base(&self) -> Vec3 {
        self.center - Vec3::UP * (self.height * 0.5)
    }

    /// Center of the bottom cap sphere
    pub fn bottom_sphere(&self) -> Sphere {
        Sphere::new(self.center - Vec3::UP * self.half_segment(), self.radius)
    }

    /// Center of the top cap sphere
    pub fn top_sphere(&self) -> Sphere {
        Sphere::new(self.center + Vec3::UP * self.half_segment(), self.radius)
    }

    /// Closest point on the inner segment to a given point
    pub fn closest_segment_point(&self, point: Vec3) -> Vec3 {
        let h = self.half_segment();
        let y = point.y.clamp(self.center.y - h, self.center.y + h);
        Vec3::new(self.center.x, y, self.center.z)
    }

    /// Translate the capsule by a delta
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            center: self.center + delta,
            ..*self
        }
    }
}

/// An axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if a point is inside or on the AABB
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Get the closest point inside or on the AABB to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp_components(self.min, self.max)
    }

    /// Translate the AABB by a delta
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// An infinite plane: `normal · point = distance`
///
/// Points with `normal · point > distance` are above the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// Unit normal vector pointing to the positive side
    pub normal: Vec3,
    /// Signed distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a new plane from a normal and distance (normal gets normalized)
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalized(),
            distance,
        }
    }

    /// Horizontal floor at the given height, normal pointing up
    pub fn floor(y: f32) -> Self {
        Self::new(Vec3::UP, y)
    }

    /// Signed distance from a point to the plane
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// Collider variants stored on bodies and static geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Capsule(Capsule),
    Aabb(Aabb),
    Plane(Plane),
}

impl Collider {
    /// Center of the collider (planes report their closest point to the origin)
    pub fn center(&self) -> Vec3 {
        match self {
            Collider::Capsule(c) => c.center,
            Collider::Aabb(b) => b.center(),
            Collider::Plane(p) => p.normal * p.distance,
        }
    }

    /// Translate the collider (planes are immovable)
    pub fn translated(&self, delta: Vec3) -> Self {
        match self {
            Collider::Capsule(c) => Collider::Capsule(c.translated(delta)),
            Collider::Aabb(b) => Collider::Aabb(b.translated(delta)),
            Collider::Plane(p) => Collider::Plane(*p),
        }
    }
}
