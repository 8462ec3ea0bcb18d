//! Polygon measures and the validity oracle.

use super::predicates::segments_intersect;
use super::types::Point;

/// Twice the signed area (shoelace), positive for counter-clockwise polygons.
///
/// Accumulates in `i128`; an empty polygon has area zero.
pub fn signed_area2(points: &[Point], polygon: &[usize]) -> i128 {
    let m = polygon.len();
    (0..m)
        .map(|i| {
            let a = points[polygon[i]];
            let b = points[polygon[(i + 1) % m]];
            i128::from(a.x) * i128::from(b.y) - i128::from(b.x) * i128::from(a.y)
        })
        .sum()
}

/// Enclosed area, rounded down to an integer; `-1` for an empty polygon.
///
/// Areas of lattice polygons are multiples of one half, so the result is exact
/// whenever the doubled area is even (always true for even coordinates).
/// Saturates at `i64::MAX`, which only negative coordinates spanning most of
/// the `i32` range can reach.
pub fn area(points: &[Point], polygon: &[usize]) -> i64 {
    if polygon.is_empty() {
        return -1;
    }
    let half = signed_area2(points, polygon).abs() / 2;
    i64::try_from(half).unwrap_or(i64::MAX)
}

/// Twice the unsigned area of triangle `abc`.
#[inline]
pub fn triangle_area2(a: Point, b: Point, c: Point) -> i128 {
    let abx = i128::from(b.x) - i128::from(a.x);
    let aby = i128::from(b.y) - i128::from(a.y);
    let acx = i128::from(c.x) - i128::from(a.x);
    let acy = i128::from(c.y) - i128::from(a.y);
    (abx * acy - aby * acx).abs()
}

/// `polygon` lists every index of `0..n` exactly once.
pub fn is_valid_permutation(polygon: &[usize], n: usize) -> bool {
    if polygon.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in polygon {
        match seen.get_mut(v) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// No two non-adjacent edges intersect (naive O(m²) edge-pair scan).
///
/// Edge `i` runs from `polygon[i]` to `polygon[i + 1]`; the last edge wraps
/// around to `polygon[0]` and is adjacent to both the first and the
/// second-to-last edge. Every index must be in range for `points`.
///
/// Adjacent edges are never compared, so a collinear fold-back between
/// consecutive edges goes unreported: three collinear points in any order
/// pass, with zero area.
pub fn is_simple(points: &[Point], polygon: &[usize]) -> bool {
    let m = polygon.len();
    let edge = |i: usize| (points[polygon[i]], points[polygon[(i + 1) % m]]);
    for i in 0..m {
        let (a, b) = edge(i);
        for j in (i + 2)..m {
            if i == 0 && j == m - 1 {
                continue;
            }
            let (c, d) = edge(j);
            if segments_intersect(a, b, c, d) {
                return false;
            }
        }
    }
    true
}

/// Validity oracle: `polygon` is a permutation of all of `points` and simple.
///
/// An empty polygon is never valid.
pub fn check_validity(points: &[Point], polygon: &[usize]) -> bool {
    !polygon.is_empty()
        && is_valid_permutation(polygon, points.len())
        && is_simple(points, polygon)
}
