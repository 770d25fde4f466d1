use crate::bounding_volume::BoundingSphere;
use crate::shape::Plane;

/// Intersection test between a bounding sphere and a plane.
///
/// The normal of the plane needs not be normalized: the radius is scaled by its length instead.
#[inline]
pub fn intersection_test_bounding_sphere_plane(sphere1: &BoundingSphere, plane2: &Plane) -> bool {
    plane2.signed_distance(&sphere1.center).abs() <= sphere1.radius * plane2.normal.norm()
}

/// Intersection test between a plane and a bounding sphere.
#[inline]
pub fn intersection_test_plane_bounding_sphere(plane1: &Plane, sphere2: &BoundingSphere) -> bool {
    intersection_test_bounding_sphere_plane(sphere2, plane1)
}
