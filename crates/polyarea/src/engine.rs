//! Facade over the read-only point set.
//!
//! `PolygonEngine` owns the input points for the lifetime of a computation and
//! answers hull, area, validity and optimization queries against them. It holds
//! no other state, so a shared `&PolygonEngine` can serve several threads (for
//! example the min and max runs side by side).

use crate::geom::{self, Point};
use crate::optimize::{augment_hull, Augmentation, Objective, OptimizeCfg};

#[derive(Clone, Debug)]
pub struct PolygonEngine {
    points: Vec<Point>,
}

impl PolygonEngine {
    /// Take ownership of the input points. Indices into `points` are the
    /// point identities used by every polygon this engine produces or checks.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Convex hull indices, counter-clockwise.
    pub fn convex_hull(&self) -> Vec<usize> {
        geom::convex_hull(&self.points)
    }

    /// Area of the convex hull.
    pub fn hull_area(&self) -> i64 {
        self.area(&self.convex_hull())
    }

    /// Area of `polygon`; `-1` when it is empty (not defined).
    pub fn area(&self, polygon: &[usize]) -> i64 {
        geom::area(&self.points, polygon)
    }

    /// `polygon` is a permutation of all points and simple.
    pub fn check_validity(&self, polygon: &[usize]) -> bool {
        geom::check_validity(&self.points, polygon)
    }

    /// Greedy augmentation with explicit configuration.
    pub fn optimize(&self, cfg: OptimizeCfg) -> Augmentation {
        augment_hull(&self.points, cfg)
    }

    /// Simple polygon of (heuristically) minimal area. May be partial; check
    /// it with `check_validity`.
    pub fn minimal_area_polygon(&self) -> Vec<usize> {
        self.optimize(OptimizeCfg::new(Objective::MinArea)).polygon
    }

    /// Simple polygon of (heuristically) maximal area. May be partial; check
    /// it with `check_validity`.
    pub fn maximal_area_polygon(&self) -> Vec<usize> {
        self.optimize(OptimizeCfg::new(Objective::MaxArea)).polygon
    }
}

impl From<Vec<Point>> for PolygonEngine {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
