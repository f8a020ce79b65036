use crate::triangle::Triangle;

/// An ordered sequence of Robinson triangles.
///
/// The order is draw order; deflation keeps it stable so that callers can
/// index into successive generations consistently (e.g. for highlighting).
pub type Tiling = Vec<Triangle>;
