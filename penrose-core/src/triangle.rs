use crate::geometry::rotate_about;
use glam::Vec2;

/// Colour tag of a Robinson triangle.
///
/// The tag selects both the substitution rule applied by deflation and the
/// fill colour a renderer uses. The display colour itself is owned by the
/// rendering side, not by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileColor {
    /// Thick (obtuse) half-kite triangle.
    Red,
    /// Thin (acute) half-dart triangle.
    Blue,
}

/// One Robinson triangle: apex `a`, base vertices `b` and `c`.
///
/// A plain value type; transformations return new triangles. Callers are
/// responsible for the golden-ratio leg/base proportions — no validation
/// happens here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub color: TileColor,
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2, color: TileColor) -> Self {
        Self { a, b, c, color }
    }

    /// Rotates all three vertices by `theta` radians around `about`,
    /// preserving the colour tag.
    pub fn rotated(&self, theta: f32, about: Vec2) -> Self {
        Self {
            a: rotate_about(self.a, theta, about),
            b: rotate_about(self.b, theta, about),
            c: rotate_about(self.c, theta, about),
            color: self.color,
        }
    }

    /// Translates all three vertices by `v`, preserving the colour tag.
    pub fn translated(&self, v: Vec2) -> Self {
        Self {
            a: self.a + v,
            b: self.b + v,
            c: self.c + v,
            color: self.color,
        }
    }

    /// Absolute area, half the cross product of two edge vectors.
    pub fn area(&self) -> f32 {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        (ab.perp_dot(ac) * 0.5).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-4;

    fn right_triangle(color: TileColor) -> Triangle {
        Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 3.0),
            color,
        )
    }

    #[test]
    fn area_of_right_triangle() {
        assert!((right_triangle(TileColor::Red).area() - 6.0).abs() < EPS);
    }

    #[test]
    fn rotated_preserves_color_and_area() {
        let t = right_triangle(TileColor::Blue);
        let r = t.rotated(PI / 3.0, Vec2::new(1.0, 1.0));
        assert_eq!(r.color, TileColor::Blue);
        assert!((r.area() - t.area()).abs() < EPS);
        // Original is untouched.
        assert_eq!(t.a, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn translated_moves_all_vertices() {
        let t = right_triangle(TileColor::Red);
        let moved = t.translated(Vec2::new(-1.0, 2.0));
        assert_eq!(moved.a, Vec2::new(-1.0, 2.0));
        assert_eq!(moved.b, Vec2::new(3.0, 2.0));
        assert_eq!(moved.c, Vec2::new(3.0, 5.0));
        assert_eq!(moved.color, TileColor::Red);
    }
}
