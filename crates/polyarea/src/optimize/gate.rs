//! Feasibility gate for inserting one point into a boundary edge.

use crate::geom::{point_in_triangle, segments_intersect, Point};

/// Inserting `p` between `boundary[at]` and `boundary[at + 1]` would make the
/// boundary cross itself.
///
/// Only the two new edges are tested, each against every boundary edge that
/// does not share its fixed endpoint (O(m) instead of a full O(m²) recheck).
/// `p` must not be on the boundary.
pub fn does_self_intersect_adding_one_point(
    points: &[Point],
    p: usize,
    at: usize,
    boundary: &[usize],
) -> bool {
    let m = boundary.len();
    let a = boundary[at];
    let b = boundary[(at + 1) % m];
    for k in 0..m {
        let c = boundary[k];
        let d = boundary[(k + 1) % m];
        if a != c && a != d && segments_intersect(points[a], points[p], points[c], points[d]) {
            return true;
        }
        if b != c && b != d && segments_intersect(points[b], points[p], points[c], points[d]) {
            return true;
        }
    }
    false
}

/// Full gate: no crossing and no remaining point strictly inside the
/// triangle `(p, boundary[at], boundary[at + 1])`.
pub fn ok_to_add(
    points: &[Point],
    p: usize,
    at: usize,
    boundary: &[usize],
    remaining: &[usize],
) -> bool {
    if does_self_intersect_adding_one_point(points, p, at, boundary) {
        return false;
    }
    let a = points[boundary[at]];
    let b = points[boundary[(at + 1) % boundary.len()]];
    let tip = points[p];
    !remaining
        .iter()
        .any(|&q| point_in_triangle(points[q], tip, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn crossing_insertion_is_rejected() {
        // Square with a notch vertex 4 pulled in from the top edge.
        let p = pts(&[(0, 0), (8, 0), (8, 8), (0, 8), (4, 1), (1, 6)]);
        let boundary = [0, 1, 2, 4, 3];
        // Point 5 sits left of the notch; reaching it from the bottom edge
        // crosses the notch edge (4, 3).
        assert!(does_self_intersect_adding_one_point(&p, 5, 0, &boundary));
        // From the left edge (wraparound 3 -> 0) it does not.
        assert!(!does_self_intersect_adding_one_point(&p, 5, 4, &boundary));
    }

    #[test]
    fn triangle_containing_a_remaining_point_is_rejected() {
        let p = pts(&[(0, 0), (8, 0), (8, 8), (0, 8), (4, 2), (4, 1)]);
        let boundary = [0, 1, 2, 3];
        let remaining = [4, 5];
        // Triangle (4, v0, v1) contains (4,1).
        assert!(!ok_to_add(&p, 4, 0, &boundary, &remaining));
        // Inserting (4,1) first is fine.
        assert!(ok_to_add(&p, 5, 0, &boundary, &remaining));
    }
}
