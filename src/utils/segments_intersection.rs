use crate::math::{Real, DEFAULT_EPSILON};
use crate::utils::orient2d;
use na::Point2;

/// Do the segments `ab` and `cd` intersect, endpoints included?
///
/// Collinear overlapping segments intersect. Orientations smaller than
/// [`DEFAULT_EPSILON`] relative to the segment lengths are treated as collinear.
pub fn segments_intersect2d(
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
    d: &Point2<Real>,
) -> bool {
    let tol = DEFAULT_EPSILON * (b - a).norm() * (d - c).norm();
    let snap = |x: Real| if x.abs() <= tol { 0.0 } else { x };

    let d1 = snap(orient2d(c, d, a));
    let d2 = snap(orient2d(c, d, b));
    let d3 = snap(orient2d(a, b, c));
    let d4 = snap(orient2d(a, b, d));

    if opposite_signs(d1, d2) && opposite_signs(d3, d4) {
        return true;
    }

    (d1 == 0.0 && in_bounds(c, d, a))
        || (d2 == 0.0 && in_bounds(c, d, b))
        || (d3 == 0.0 && in_bounds(a, b, c))
        || (d4 == 0.0 && in_bounds(a, b, d))
}

#[inline]
fn opposite_signs(x: Real, y: Real) -> bool {
    (x > 0.0 && y < 0.0) || (x < 0.0 && y > 0.0)
}

/// Is `pt`, collinear with `p` and `q`, within the bounding box of `pq`?
#[inline]
fn in_bounds(p: &Point2<Real>, q: &Point2<Real>, pt: &Point2<Real>) -> bool {
    pt.x >= p.x.min(q.x) && pt.x <= p.x.max(q.x) && pt.y >= p.y.min(q.y) && pt.y <= p.y.max(q.y)
}
