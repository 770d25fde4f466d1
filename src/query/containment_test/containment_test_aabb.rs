use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume};
use crate::math::{Point, Real};
use crate::query::intersection_test::intersection_test_aabb_bounding_sphere;
use crate::shape::{Obb, Segment, Triangle};

/// Does the AABB contain the point, boundary included?
#[inline]
pub fn containment_test_aabb_point(aabb1: &Aabb, pt2: &Point<Real>) -> bool {
    aabb1.contains_local_point(pt2)
}

/// Does the first AABB contain the second one?
#[inline]
pub fn containment_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    aabb1.contains(aabb2)
}

/// Does the AABB contain the bounding sphere?
///
/// The sphere must touch the box and fit within it on each axis.
#[inline]
pub fn containment_test_aabb_bounding_sphere(aabb1: &Aabb, sphere2: &BoundingSphere) -> bool {
    intersection_test_aabb_bounding_sphere(aabb1, sphere2)
        && aabb1.contains(&Aabb::from_sphere(sphere2))
}

/// Does the AABB contain the oriented box?
///
/// Because both are convex, this holds iff the AABB contains the 8 corners of the oriented box.
#[inline]
pub fn containment_test_aabb_obb(aabb1: &Aabb, obb2: &Obb) -> bool {
    obb2.vertices().iter().all(|pt| aabb1.contains_local_point(pt))
}

/// Does the AABB contain the segment?
#[inline]
pub fn containment_test_aabb_segment(aabb1: &Aabb, segment2: &Segment) -> bool {
    aabb1.contains_local_point(&segment2.a) && aabb1.contains_local_point(&segment2.b)
}

/// Does the AABB contain the triangle?
#[inline]
pub fn containment_test_aabb_triangle(aabb1: &Aabb, triangle2: &Triangle) -> bool {
    triangle2
        .vertices()
        .iter()
        .all(|pt| aabb1.contains_local_point(pt))
}
