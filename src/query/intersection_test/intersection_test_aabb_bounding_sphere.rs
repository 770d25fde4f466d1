use crate::bounding_volume::{Aabb, BoundingSphere};

/// Intersection test between an AABB and a bounding sphere.
///
/// Compares the squared distance between the sphere center and the box to the squared
/// radius. A sphere tangent to a box face intersects it.
#[inline]
pub fn intersection_test_aabb_bounding_sphere(aabb1: &Aabb, sphere2: &BoundingSphere) -> bool {
    aabb1.distance_squared_to_local_point(&sphere2.center) <= sphere2.radius * sphere2.radius
}

/// Intersection test between a bounding sphere and an AABB.
#[inline]
pub fn intersection_test_bounding_sphere_aabb(sphere1: &BoundingSphere, aabb2: &Aabb) -> bool {
    intersection_test_aabb_bounding_sphere(aabb2, sphere1)
}
