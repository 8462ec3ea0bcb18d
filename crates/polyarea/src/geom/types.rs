//! Point and orientation types.

use nalgebra::Vector2;

/// Integer grid point `(x, y)`.
///
/// Points carry no identity of their own; callers refer to them by index into
/// the owning slice, and that index is what polygons store.
pub type Point = Vector2<i32>;

/// Rotational sense of an ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}
