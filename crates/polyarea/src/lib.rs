//! Simple polygons of extremal area on integer point sets.
//!
//! Given `n >= 3` distinct integer points, the crate builds the convex hull and
//! grows it greedily into a simple polygon through every point, aiming for
//! minimal or maximal enclosed area. It also checks polygons for validity
//! (permutation + simplicity) and measures areas exactly.
//!
//! Layout
//! - `geom`: integer predicates, monotone-chain hull, shoelace area, validity.
//! - `optimize`: greedy hull augmentation (min/max area variants).
//! - `engine`: `PolygonEngine`, the facade holding the read-only point set.
//! - `io`: point-file loader, polygon reader/writer, bounding box.
//! - `sample`: reproducible random instances for tests and benches.
//!
//! All arithmetic is integer (`i128` accumulators); nothing here depends on
//! floating-point tolerances.

pub mod engine;
pub mod geom;
pub mod io;
pub mod optimize;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::PolygonEngine;
pub use geom::{Orientation, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::PolygonEngine;
    pub use crate::geom::{
        area, check_validity, convex_hull, is_simple, is_valid_permutation, lies_on,
        orientation, point_in_triangle, segments_intersect, Orientation, Point,
    };
    pub use crate::io::{bounding_box, read_points, read_polygon, write_polygon, LoadError};
    pub use crate::optimize::{augment_hull, Augmentation, Objective, OptimizeCfg, Stop};
    pub use crate::sample::{draw_points, GridCfg, ReplayToken};
}
