//! Function to check if a point is inside a triangle and related functions.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils::segments_intersect2d;
use na::Point2;

/// The indices of the two coordinates kept when projecting on the coordinate plane
/// most orthogonal to `normal`.
///
/// The dropped coordinate is the one with the largest absolute value in `normal`, so
/// that the projection of a planar figure orthogonal to `normal` is as large as possible.
#[inline]
pub fn dominant_plane_axes(normal: &Vector<Real>) -> [usize; 2] {
    match normal.iamax() {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

/// Projects `pt` on a coordinate plane, keeping the coordinates at `axes`.
#[inline]
pub fn project2d(pt: &Point<Real>, axes: [usize; 2]) -> Point2<Real> {
    Point2::new(pt[axes[0]], pt[axes[1]])
}

/// Twice the signed area of the triangle `abc`.
///
/// It is positive if `abc` is counter-clockwise, negative if it is clockwise and zero if
/// the three points are aligned.
#[inline]
pub fn orient2d(a: &Point2<Real>, b: &Point2<Real>, c: &Point2<Real>) -> Real {
    (b - a).perp(&(c - a))
}

/// Returns `true` if point `p` is in the triangle with corners `v1`, `v2` and `v3`, boundary included.
///
/// Either winding is accepted. Points at a distance to an edge smaller than
/// [`DEFAULT_EPSILON`] relative to the triangle size count as inside. A degenerate
/// triangle contains the points of its edges.
pub fn is_point_in_triangle2d(
    p: &Point2<Real>,
    v1: &Point2<Real>,
    v2: &Point2<Real>,
    v3: &Point2<Real>,
) -> bool {
    let area = orient2d(v1, v2, v3).abs();

    if area == 0.0 {
        return segments_intersect2d(p, p, v1, v2)
            || segments_intersect2d(p, p, v2, v3)
            || segments_intersect2d(p, p, v3, v1);
    }

    let tol = DEFAULT_EPSILON * area;
    let d1 = orient2d(v1, v2, p);
    let d2 = orient2d(v2, v3, p);
    let d3 = orient2d(v3, v1, p);

    (d1 >= -tol && d2 >= -tol && d3 >= -tol) || (d1 <= tol && d2 <= tol && d3 <= tol)
}
