use crate::bounding_volume::Aabb;
use crate::shape::Plane;

/// Intersection test between an AABB and a plane.
///
/// The box intersects the plane iff the distance from its center to the plane is at most
/// the projection radius of the box on the plane normal. Both sides of the comparison
/// scale with the normal, which thus needs not be normalized.
#[inline]
pub fn intersection_test_aabb_plane(aabb1: &Aabb, plane2: &Plane) -> bool {
    let radius = aabb1.half_extents.dot(&plane2.normal.abs());
    plane2.signed_distance(&aabb1.center).abs() <= radius
}

/// Intersection test between a plane and an AABB.
#[inline]
pub fn intersection_test_plane_aabb(plane1: &Plane, aabb2: &Aabb) -> bool {
    intersection_test_aabb_plane(aabb2, plane1)
}
