use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Point, Real, Vector};
use crate::shape::{Obb, Segment, Triangle};

/// Is `local`, expressed in the frame of `obb`, within `margin` of the box faces?
#[inline]
fn contains_local(obb: &Obb, local: &Vector<Real>, margin: Real) -> bool {
    local
        .iter()
        .zip(obb.half_extents.iter())
        .all(|(x, e)| x.abs() + margin <= *e)
}

/// Does the oriented box contain the point, boundary included?
#[inline]
pub fn containment_test_obb_point(obb1: &Obb, pt2: &Point<Real>) -> bool {
    contains_local(obb1, &obb1.local_point(pt2), 0.0)
}

/// Does the oriented box contain the bounding sphere?
#[inline]
pub fn containment_test_obb_bounding_sphere(obb1: &Obb, sphere2: &BoundingSphere) -> bool {
    contains_local(obb1, &obb1.local_point(&sphere2.center), sphere2.radius)
}

/// Does the oriented box contain the AABB?
#[inline]
pub fn containment_test_obb_aabb(obb1: &Obb, aabb2: &Aabb) -> bool {
    aabb2
        .vertices()
        .iter()
        .all(|pt| containment_test_obb_point(obb1, pt))
}

/// Does the first oriented box contain the second one?
#[inline]
pub fn containment_test_obb_obb(obb1: &Obb, obb2: &Obb) -> bool {
    obb2.vertices()
        .iter()
        .all(|pt| containment_test_obb_point(obb1, pt))
}

/// Does the oriented box contain the segment?
#[inline]
pub fn containment_test_obb_segment(obb1: &Obb, segment2: &Segment) -> bool {
    containment_test_obb_point(obb1, &segment2.a) && containment_test_obb_point(obb1, &segment2.b)
}

/// Does the oriented box contain the triangle?
#[inline]
pub fn containment_test_obb_triangle(obb1: &Obb, triangle2: &Triangle) -> bool {
    triangle2
        .vertices()
        .iter()
        .all(|pt| containment_test_obb_point(obb1, pt))
}
