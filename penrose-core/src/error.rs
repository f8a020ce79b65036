use thiserror::Error;

/// Errors produced by the geometry kernel.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A zero-length vector was normalized. For valid Robinson triangles
    /// this never happens; it indicates a degenerate input triangle.
    #[error("cannot normalize a zero-magnitude vector")]
    DegenerateVector,
}
