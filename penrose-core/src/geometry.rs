use crate::error::GeometryError;
use glam::Vec2;

/// The golden ratio, `(1 + √5) / 2`.
///
/// Parent and child edge lengths of Robinson triangles are related by this
/// factor, so every edge split in the substitution rule divides at `1/PHI`.
pub const PHI: f32 = 1.618_034;

/// Rotates `p` by `theta` radians counter-clockwise around `about`.
///
/// Closed-form affine transform (translate, rotate, translate back). Any
/// real `theta` is accepted; negative values rotate clockwise.
pub fn rotate_about(p: Vec2, theta: f32, about: Vec2) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    let d = p - about;
    Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos) + about
}

/// Returns the unit vector in the direction of `v`.
///
/// ### Returns
/// - `Ok(unit)` for any vector of nonzero magnitude.
/// - `Err(GeometryError::DegenerateVector)` for a zero-magnitude vector.
pub fn checked_normalize(v: Vec2) -> Result<Vec2, GeometryError> {
    v.try_normalize().ok_or(GeometryError::DegenerateVector)
}
