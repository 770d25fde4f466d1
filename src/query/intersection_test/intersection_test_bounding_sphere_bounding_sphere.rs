use crate::bounding_volume::{BoundingSphere, BoundingVolume};

/// Intersection test between bounding spheres.
#[inline]
pub fn intersection_test_bounding_sphere_bounding_sphere(
    sphere1: &BoundingSphere,
    sphere2: &BoundingSphere,
) -> bool {
    sphere1.intersects(sphere2)
}
