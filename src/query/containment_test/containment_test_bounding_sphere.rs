use crate::bounding_volume::{Aabb, BoundingSphere, BoundingVolume};
use crate::math::{Point, Real};
use crate::shape::{Obb, Segment, Triangle};

/// Does the bounding sphere contain the point, boundary included?
#[inline]
pub fn containment_test_bounding_sphere_point(sphere1: &BoundingSphere, pt2: &Point<Real>) -> bool {
    sphere1.contains_local_point(pt2)
}

/// Does the first bounding sphere contain the second one?
#[inline]
pub fn containment_test_bounding_sphere_bounding_sphere(
    sphere1: &BoundingSphere,
    sphere2: &BoundingSphere,
) -> bool {
    sphere1.contains(sphere2)
}

/// Does the bounding sphere contain the AABB?
///
/// Only the corner of the box furthest from the sphere center needs to be tested.
#[inline]
pub fn containment_test_bounding_sphere_aabb(sphere1: &BoundingSphere, aabb2: &Aabb) -> bool {
    let furthest = (sphere1.center - aabb2.center).abs() + aabb2.half_extents;
    furthest.norm_squared() <= sphere1.radius * sphere1.radius
}

/// Does the bounding sphere contain the oriented box?
#[inline]
pub fn containment_test_bounding_sphere_obb(sphere1: &BoundingSphere, obb2: &Obb) -> bool {
    obb2.vertices()
        .iter()
        .all(|pt| sphere1.contains_local_point(pt))
}

/// Does the bounding sphere contain the segment?
#[inline]
pub fn containment_test_bounding_sphere_segment(
    sphere1: &BoundingSphere,
    segment2: &Segment,
) -> bool {
    sphere1.contains_local_point(&segment2.a) && sphere1.contains_local_point(&segment2.b)
}

/// Does the bounding sphere contain the triangle?
#[inline]
pub fn containment_test_bounding_sphere_triangle(
    sphere1: &BoundingSphere,
    triangle2: &Triangle,
) -> bool {
    triangle2
        .vertices()
        .iter()
        .all(|pt| sphere1.contains_local_point(pt))
}
