//! Core Penrose P2 (kite-and-dart) substitution tiling library.
//!
//! Main components:
//! - [`geometry`] — 2-D vector helpers on top of `glam` (rotation about a
//!   pivot, checked normalization, the golden ratio).
//! - [`triangle`] — Robinson triangles and their colour tags.
//! - [`substitution`] — the deflation (subdivision) rewrite rule.
//! - [`tiling`] — seed construction and the full tiling generator.
//! - [`error`] — the single core error type.
//! - [`types`] — shared type aliases.

pub mod error;
pub mod geometry;
pub mod substitution;
pub mod tiling;
pub mod triangle;
pub mod types;
