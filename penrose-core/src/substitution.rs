//! The P2 deflation rule: rewriting one Robinson triangle into smaller ones.
//!
//! Deflation replaces every triangle of a tiling, independently, by two or
//! three children that tile the parent exactly:
//! - Red (thick) → 1 Red + 1 Blue,
//! - Blue (thin) → 1 Red + 2 Blue.
//!
//! Child vertex order and colour assignment are load-bearing: they are what
//! makes neighbouring parents' children meet edge-to-edge with no gaps or
//! overlaps. A swapped pair of output vertices still looks like a valid
//! triangle in isolation but shows up as seams once assembled.

use crate::{
    error::GeometryError,
    geometry::{PHI, checked_normalize},
    triangle::{TileColor, Triangle},
    types::Tiling,
};
use glam::Vec2;

/// Returns the point on the segment `from → to` at distance `|to - from| / Φ`
/// from `from`.
fn phi_point(from: Vec2, to: Vec2) -> Result<Vec2, GeometryError> {
    let edge = to - from;
    Ok(from + checked_normalize(edge)? * (edge.length() / PHI))
}

/// Deflates a single triangle, appending its children to `out`.
///
/// A Red parent `(a, b, c)` splits edge `a→b` at `p` and emits
/// `(c, p, b, Red)` and `(p, c, a, Blue)`. A Blue parent splits edges `b→a`
/// at `q` and `b→c` at `r` and emits `(q, r, b, Blue)`, `(r, q, a, Red)`,
/// `(r, c, a, Blue)`.
///
/// ### Parameters
/// - `t` - Parent triangle, apex `a`, base `b`,`c`.
/// - `out` - Buffer the children are appended to.
///
/// ### Returns
/// `Err(GeometryError::DegenerateVector)` if a split edge has zero length,
/// which only happens for degenerate input; nothing is appended in that case.
pub fn deflate(t: &Triangle, out: &mut Tiling) -> Result<(), GeometryError> {
    match t.color {
        TileColor::Red => {
            let p = phi_point(t.a, t.b)?;
            out.push(Triangle::new(t.c, p, t.b, TileColor::Red));
            out.push(Triangle::new(p, t.c, t.a, TileColor::Blue));
        }
        TileColor::Blue => {
            let q = phi_point(t.b, t.a)?;
            let r = phi_point(t.b, t.c)?;
            out.push(Triangle::new(q, r, t.b, TileColor::Blue));
            out.push(Triangle::new(r, q, t.a, TileColor::Red));
            out.push(Triangle::new(r, t.c, t.a, TileColor::Blue));
        }
    }
    Ok(())
}

/// Deflates every triangle of a tiling once.
///
/// Children of input triangle `i` precede children of triangle `i + 1`, so
/// the output order is the stable flattening of per-input results.
///
/// ### Parameters
/// - `tiling` - The current generation.
///
/// ### Returns
/// The next generation, or the first error encountered.
pub fn deflate_all(tiling: &Tiling) -> Result<Tiling, GeometryError> {
    // Red doubles and Blue triples; 3x is a safe upper bound.
    let mut next = Tiling::with_capacity(tiling.len() * 3);
    for t in tiling {
        deflate(t, &mut next)?;
    }
    Ok(next)
}

/// Applies a fallible step function `n` times, starting from `seed`.
///
/// `n == 0` returns the seed unchanged. The first error aborts the chain.
pub fn iterate<T, E>(
    mut f: impl FnMut(&T) -> Result<T, E>,
    seed: T,
    n: u32,
) -> Result<T, E> {
    let mut value = seed;
    for _ in 0..n {
        value = f(&value)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPS
    }

    // A golden gnomon-like stand-in; deflate does not validate proportions,
    // so any non-degenerate triangle exercises the rule.
    fn red_parent() -> Triangle {
        Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 3.0),
            TileColor::Red,
        )
    }

    fn blue_parent() -> Triangle {
        Triangle::new(
            Vec2::new(1.0, 2.0),
            Vec2::new(-3.0, 0.5),
            Vec2::new(2.0, -1.0),
            TileColor::Blue,
        )
    }

    #[test]
    fn red_deflates_into_two_children() {
        let mut out = Tiling::new();
        deflate(&red_parent(), &mut out).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].color, TileColor::Red);
        assert_eq!(out[1].color, TileColor::Blue);
    }

    #[test]
    fn blue_deflates_into_three_children() {
        let mut out = Tiling::new();
        deflate(&blue_parent(), &mut out).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].color, TileColor::Blue);
        assert_eq!(out[1].color, TileColor::Red);
        assert_eq!(out[2].color, TileColor::Blue);
    }

    #[test]
    fn red_deflation_concrete_coordinates() {
        let mut out = Tiling::new();
        deflate(&red_parent(), &mut out).unwrap();

        // The split point on a -> b lies at |ab| / phi from a.
        let p = Vec2::new(4.0 / PHI, 0.0);

        assert!(approx(out[0].a, Vec2::new(4.0, 3.0)));
        assert!(approx(out[0].b, p));
        assert!(approx(out[0].c, Vec2::new(4.0, 0.0)));

        assert!(approx(out[1].a, p));
        assert!(approx(out[1].b, Vec2::new(4.0, 3.0)));
        assert!(approx(out[1].c, Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn deflation_conserves_area() {
        for parent in [red_parent(), blue_parent()] {
            let mut out = Tiling::new();
            deflate(&parent, &mut out).unwrap();
            let sum: f32 = out.iter().map(Triangle::area).sum();
            assert!(
                (sum - parent.area()).abs() < EPS,
                "children cover {sum}, parent is {}",
                parent.area()
            );
        }
    }

    #[test]
    fn deflate_rejects_degenerate_triangle() {
        let degenerate = Triangle::new(Vec2::ZERO, Vec2::ZERO, Vec2::ONE, TileColor::Red);
        let mut out = Tiling::new();
        assert_eq!(
            deflate(&degenerate, &mut out),
            Err(GeometryError::DegenerateVector)
        );
    }

    #[test]
    fn deflate_all_preserves_input_order() {
        let input = vec![red_parent(), blue_parent(), red_parent()];
        let out = deflate_all(&input).unwrap();
        assert_eq!(out.len(), 2 + 3 + 2);

        // Children of triangle i precede children of triangle i + 1.
        let mut expected = Tiling::new();
        for t in &input {
            deflate(t, &mut expected).unwrap();
        }
        assert_eq!(out, expected);
    }

    #[test]
    fn iterate_zero_times_returns_seed() {
        let seed = vec![red_parent()];
        let out = iterate(deflate_all, seed.clone(), 0).unwrap();
        assert_eq!(out, seed);
    }

    #[test]
    fn iterate_composes_deflations() {
        let seed = vec![red_parent()];
        let twice = iterate(deflate_all, seed.clone(), 2).unwrap();
        let by_hand = deflate_all(&deflate_all(&seed).unwrap()).unwrap();
        assert_eq!(twice, by_hand);
    }
}
