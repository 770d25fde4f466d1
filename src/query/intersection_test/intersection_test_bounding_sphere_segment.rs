use crate::bounding_volume::BoundingSphere;
use crate::shape::Segment;

/// Intersection test between a bounding sphere and a segment.
#[inline]
pub fn intersection_test_bounding_sphere_segment(
    sphere1: &BoundingSphere,
    segment2: &Segment,
) -> bool {
    let closest = segment2.closest_point(&sphere1.center);
    na::distance_squared(&closest, &sphere1.center) <= sphere1.radius * sphere1.radius
}

/// Intersection test between a segment and a bounding sphere.
#[inline]
pub fn intersection_test_segment_bounding_sphere(
    segment1: &Segment,
    sphere2: &BoundingSphere,
) -> bool {
    intersection_test_bounding_sphere_segment(sphere2, segment1)
}
