//! Main augmentation loop.

use std::time::Instant;

use crate::geom::{convex_hull, triangle_area2, Point};

use super::gate::ok_to_add;
use super::types::{Augmentation, Candidate, Objective, OptimizeCfg, Stop};

/// Grow the convex hull of `points` into a simple polygon through every point.
///
/// Each step inserts the remaining point whose cut triangle is extremal for
/// `cfg.objective` among gate-passing candidates. When no candidate passes,
/// the boundary stops growing and the partial polygon is returned with
/// `Stop::NoFeasibleCandidate`.
pub fn augment_hull(points: &[Point], cfg: OptimizeCfg) -> Augmentation {
    let started = Instant::now();
    let n = points.len();
    let mut boundary = convex_hull(points);
    let mut on_boundary = vec![false; n];
    for &v in &boundary {
        on_boundary[v] = true;
    }
    let mut remaining: Vec<usize> = (0..n).filter(|&i| !on_boundary[i]).collect();
    boundary.reserve(remaining.len());
    tracing::debug!(
        objective = ?cfg.objective,
        hull = boundary.len(),
        remaining = remaining.len(),
        "augment_hull start"
    );

    let mut inserted = 0usize;
    let stop = loop {
        if remaining.is_empty() {
            break Stop::Complete;
        }
        if cfg.max_insertions.is_some_and(|cap| inserted >= cap) {
            break Stop::InsertionCap;
        }
        let Some(best) = best_candidate(points, &boundary, &remaining, cfg.objective) else {
            tracing::warn!(
                objective = ?cfg.objective,
                boundary = boundary.len(),
                remaining = remaining.len(),
                "no feasible candidate; boundary stops growing"
            );
            break Stop::NoFeasibleCandidate;
        };
        let p = remaining.remove(best.slot);
        boundary.insert(best.edge + 1, p);
        inserted += 1;
    };

    tracing::info!(
        objective = ?cfg.objective,
        inserted,
        polygon = boundary.len(),
        stop = ?stop,
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        "augment_hull done"
    );
    Augmentation {
        polygon: boundary,
        inserted,
        stop,
    }
}

/// Best gate-passing (point, edge) pair, first-encountered on ties.
///
/// The gate only runs for candidates that would beat the incumbent.
fn best_candidate(
    points: &[Point],
    boundary: &[usize],
    remaining: &[usize],
    objective: Objective,
) -> Option<Candidate> {
    let m = boundary.len();
    if m < 2 {
        return None;
    }
    let mut best: Option<Candidate> = None;
    for (slot, &p) in remaining.iter().enumerate() {
        for edge in 0..m {
            let a = points[boundary[edge]];
            let b = points[boundary[(edge + 1) % m]];
            let area2 = triangle_area2(points[p], a, b);
            if best.is_some_and(|c| !objective.prefers(area2, c.area2)) {
                continue;
            }
            if ok_to_add(points, p, edge, boundary, remaining) {
                best = Some(Candidate { slot, edge, area2 });
            }
        }
    }
    best
}
