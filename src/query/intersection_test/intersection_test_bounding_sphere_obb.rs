use crate::bounding_volume::BoundingSphere;
use crate::shape::Obb;

/// Intersection test between a bounding sphere and an oriented box.
///
/// The sphere center is clamped to the box in the local frame of the box.
#[inline]
pub fn intersection_test_bounding_sphere_obb(sphere1: &BoundingSphere, obb2: &Obb) -> bool {
    let closest = obb2.closest_point(&sphere1.center);
    na::distance_squared(&closest, &sphere1.center) <= sphere1.radius * sphere1.radius
}

/// Intersection test between an oriented box and a bounding sphere.
#[inline]
pub fn intersection_test_obb_bounding_sphere(obb1: &Obb, sphere2: &BoundingSphere) -> bool {
    intersection_test_bounding_sphere_obb(sphere2, obb1)
}
