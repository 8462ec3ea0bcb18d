//! Greedy hull augmentation for minimal- and maximal-area simple polygons.
//!
//! Purpose
//! - Start from the convex hull and insert the remaining points one at a time
//!   into a boundary edge, picking the (point, edge) pair whose triangle is
//!   largest (min-area variant) or smallest (max-area variant).
//!
//! Feasibility gate
//! - The two new edges must not cross the current boundary (O(m) local check).
//! - No other remaining point may lie strictly inside the cut triangle, since
//!   it could never be reached afterwards without a crossing.
//!
//! Determinism
//! - Remaining points are scanned in ascending index order (outer loop), edges
//!   in boundary order with the wraparound edge last (inner loop); the first
//!   strictly better feasible candidate wins. Runs are bit-for-bit repeatable.
//!
//! Complexity
//! - O(n²) candidates per insertion, each gated in O(n): O(n⁴) worst case.
//!   This is a heuristic; it does not reach the true optimum in general.
//!
//! Code cross-refs: `geom::{convex_hull, triangle_area2, segments_intersect,
//! point_in_triangle}`.

mod gate;
mod greedy;
mod types;

pub use gate::{does_self_intersect_adding_one_point, ok_to_add};
pub use greedy::augment_hull;
pub use types::{Augmentation, Candidate, Objective, OptimizeCfg, Stop};
