//! Tiling generation: seed construction and the deflation driver.

use crate::{
    error::GeometryError,
    geometry::rotate_about,
    substitution::{deflate_all, iterate},
    triangle::{TileColor, Triangle},
    types::Tiling,
};
use glam::Vec2;
use std::f32::consts::TAU;

/// Oversizing factor for the seed radius, so the tiling still covers the
/// whole surface after rotation and at the margins.
pub const OVERSIZE: f32 = 1.3;

/// Number of wedges in the seed fan; each spans 36 degrees.
const WHEEL_WEDGES: u32 = 10;

/// Builds the 10-triangle "wheel" seed: a full fan of Red wedges around
/// `centre`, base vertices on the circle of radius `side_len`.
///
/// Every second wedge is mirrored (its base vertices swapped) so adjacent
/// wedges have opposite winding. The substitution rule needs that
/// alternation for children of neighbouring wedges to meet edge-to-edge;
/// it is a required invariant, not a normalization step.
pub fn wheel_seed(centre: Vec2, side_len: f32) -> Tiling {
    let mut seed = Tiling::with_capacity(WHEEL_WEDGES as usize);
    let mut start = centre + Vec2::new(0.0, side_len);
    for i in 0..WHEEL_WEDGES {
        let b = start;
        let c = rotate_about(start, TAU / WHEEL_WEDGES as f32, centre);
        let t = if i % 2 == 0 {
            Triangle::new(centre, c, b, TileColor::Red)
        } else {
            Triangle::new(centre, b, c, TileColor::Red)
        };
        seed.push(t);
        start = c;
    }
    seed
}

/// Generates a P2 tiling covering a `width` x `height` surface.
///
/// The seed wheel is centred at `(width/2, height/2)` with radius
/// `max(width, height) / 2 * OVERSIZE`, then deflated `generations` times.
/// Triangle count grows by a factor approaching Φ² (~2.6) per generation;
/// bounding `generations` (≲ 9 for interactive use) is the caller's job.
///
/// ### Parameters
/// - `width`, `height` - Surface size in pixels.
/// - `generations` - Number of deflation passes; `0` returns the bare seed.
///
/// ### Returns
/// The generated tiling. Deterministic: identical inputs yield identical
/// output. Errors only for degenerate geometry, which a valid seed never
/// produces.
pub fn generate_p2_tiling(
    width: f32,
    height: f32,
    generations: u32,
) -> Result<Tiling, GeometryError> {
    let centre = Vec2::new(width / 2.0, height / 2.0);
    let side_len = width.max(height) / 2.0 * OVERSIZE;
    iterate(deflate_all, wheel_seed(centre, side_len), generations)
}
