//! Exact 2D geometry on integer points.
//!
//! Purpose
//! - Orientation, crossing and containment predicates over `Point`s.
//! - Andrew's monotone-chain hull over point indices.
//! - Shoelace area and the validity oracle (permutation + simplicity).
//!
//! Conventions
//! - Polygons are index sequences into a point slice, implicitly closed.
//! - Orientation is reported in a y-up frame: `CounterClockwise` is a left turn.
//! - Cross products and area sums use `i128`, so any `i32` input is exact.

mod hull;
mod polygon;
mod predicates;
mod types;

pub use hull::convex_hull;
pub use polygon::{
    area, check_validity, is_simple, is_valid_permutation, signed_area2, triangle_area2,
};
pub use predicates::{lies_on, orientation, point_in_triangle, segments_intersect};
pub use types::{Orientation, Point};
