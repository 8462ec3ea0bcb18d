//! Andrew's monotone-chain convex hull over point indices.

use super::predicates::{lies_on, orientation};
use super::types::{Orientation, Point};

/// Convex hull of `points` as indices in counter-clockwise order.
///
/// Points are swept by `x` ascending, `y` descending on ties. The upper chain
/// drops collinear points, the lower chain keeps them (except where a chain
/// doubles back on itself), so the two chains close without duplicate
/// endpoints. The first index is the leftmost (topmost among ties) point; the
/// polygon closes implicitly back to it.
///
/// Complexity: O(n log n) for the sort, amortized O(n) for both chains.
pub fn convex_hull(points: &[Point]) -> Vec<usize> {
    let mut sorted: Vec<usize> = (0..points.len()).collect();
    sorted.sort_by(|&a, &b| {
        points[a]
            .x
            .cmp(&points[b].x)
            .then_with(|| points[b].y.cmp(&points[a].y))
    });

    let upper = upper_chain(points, &sorted);
    let lower = lower_chain(points, &sorted);

    // Upper chain left to right, then the lower chain back right to left.
    let mut hull = upper;
    if lower.len() > 2 {
        hull.extend(lower[1..lower.len() - 1].iter().rev());
    }
    // That walk is clockwise; reverse it around the anchor.
    if hull.len() > 2 {
        hull[1..].reverse();
    }
    tracing::debug!(points = points.len(), hull = hull.len(), "convex_hull");
    hull
}

fn upper_chain(points: &[Point], sorted: &[usize]) -> Vec<usize> {
    let mut chain: Vec<usize> = Vec::with_capacity(sorted.len());
    for &p in sorted {
        while let &[.., second, top] = chain.as_slice() {
            if orientation(points[top], points[second], points[p]) == Orientation::CounterClockwise
            {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

fn lower_chain(points: &[Point], sorted: &[usize]) -> Vec<usize> {
    let mut chain: Vec<usize> = Vec::with_capacity(sorted.len());
    for &p in sorted {
        while let &[.., second, top] = chain.as_slice() {
            let doubles_back = match orientation(points[top], points[second], points[p]) {
                Orientation::CounterClockwise => true,
                Orientation::Collinear => lies_on(points[top], points[second], points[p]),
                Orientation::Clockwise => false,
            };
            if !doubles_back {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
