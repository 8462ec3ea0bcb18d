//! Integer predicates: orientation, segment crossing, bounding-box containment,
//! strict point-in-triangle.

use super::types::{Orientation, Point};

/// Cross product of `(q - p)` and `(r - q)`, negated so that a clockwise turn
/// is positive. `i128` holds the product of two `i32` differences.
#[inline]
fn turn(p: Point, q: Point, r: Point) -> i128 {
    let (px, py) = (i128::from(p.x), i128::from(p.y));
    let (qx, qy) = (i128::from(q.x), i128::from(q.y));
    let (rx, ry) = (i128::from(r.x), i128::from(r.y));
    (qy - py) * (rx - qx) - (qx - px) * (ry - qy)
}

/// Orientation of the triple `(p, q, r)`.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    match turn(p, q, r).signum() {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// Four-orientation crossing test for segments `p1q1` and `p2q2`.
///
/// Touching (one zero orientation on each side test) counts as intersecting;
/// two collinear segments never do. Edges that share an endpoint always touch,
/// so callers must skip adjacent edges themselves.
#[inline]
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);
    o1 != o2 && o3 != o4
}

/// `q` lies in the closed bounding rectangle of `p` and `r`.
///
/// Only meaningful as segment containment when `(p, q, r)` is collinear.
#[inline]
pub fn lies_on(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// `p` is strictly inside triangle `abc` (either winding). Points on an edge
/// or at a corner are outside.
#[inline]
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let o = orientation(p, a, b);
    !o.is_collinear() && orientation(p, b, c) == o && orientation(p, c, a) == o
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn orientation_left_right_straight() {
        assert_eq!(
            orientation(pt(0, 0), pt(1, 0), pt(1, 1)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(pt(0, 0), pt(1, 1), pt(1, 0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(pt(0, 0), pt(1, 1), pt(2, 2)),
            Orientation::Collinear
        );
    }

    #[test]
    fn orientation_extreme_coordinates_do_not_overflow() {
        let lo = pt(i32::MIN, i32::MIN);
        let hi = pt(i32::MAX, i32::MAX);
        assert_eq!(orientation(lo, hi, pt(0, 0)), Orientation::Collinear);
        assert_eq!(
            orientation(lo, pt(i32::MAX, i32::MIN), hi),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn collinear_middle_point_lies_on() {
        let (a, m, b) = (pt(0, 0), pt(2, 1), pt(4, 2));
        assert!(orientation(a, m, b).is_collinear());
        assert!(lies_on(a, m, b));
        assert!(!lies_on(a, b, m));
    }

    #[test]
    fn crossing_touching_and_disjoint_segments() {
        // proper crossing
        assert!(segments_intersect(pt(0, 0), pt(2, 2), pt(0, 2), pt(2, 0)));
        // T-junction: endpoint on the other segment
        assert!(segments_intersect(pt(0, 0), pt(2, 0), pt(1, 0), pt(1, 3)));
        // disjoint
        assert!(!segments_intersect(pt(0, 0), pt(1, 0), pt(0, 1), pt(1, 1)));
        // collinear overlap is not reported
        assert!(!segments_intersect(pt(0, 0), pt(2, 0), pt(1, 0), pt(3, 0)));
    }

    #[test]
    fn triangle_interior_is_strict() {
        let (a, b, c) = (pt(0, 0), pt(4, 0), pt(0, 4));
        assert!(point_in_triangle(pt(1, 1), a, b, c));
        assert!(point_in_triangle(pt(1, 1), a, c, b));
        assert!(!point_in_triangle(pt(2, 0), a, b, c));
        assert!(!point_in_triangle(pt(0, 0), a, b, c));
        assert!(!point_in_triangle(pt(3, 3), a, b, c));
    }
}
