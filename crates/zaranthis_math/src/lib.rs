//! 3D Mathematics for the Labo / Zaranthis controller
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components (Y is up)
//!
//! ## Helpers
//!
//! - [`decay_toward_zero`] - frame-rate independent exponential decay step

mod vec3;

pub use vec3::Vec3;

/// Apply one exponential decay step: `value += -rate * value * dt`
///
/// Steps with `rate * dt > 1` land on zero instead of overshooting, so the
/// result never changes sign and its magnitude never grows.
#[inline]
pub fn decay_toward_zero(value: f32, rate: f32, dt: f32) -> f32 {
    value * (1.0 - rate * dt).max(0.0)
}
