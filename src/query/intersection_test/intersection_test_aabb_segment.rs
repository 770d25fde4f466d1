use crate::bounding_volume::Aabb;
use crate::shape::Segment;

/// Intersection test between an AABB and a segment.
///
/// This is a separating axis test in the frame centered on the box: the three box axes
/// are tested first, then the cross products of the box axes with the segment direction.
#[inline]
pub fn intersection_test_aabb_segment(aabb1: &Aabb, segment2: &Segment) -> bool {
    let e = aabb1.half_extents;
    let half = (segment2.b - segment2.a) * 0.5;
    let mid = segment2.a + half - aabb1.center;
    let abs_half = half.abs();

    if mid.x.abs() > e.x + abs_half.x
        || mid.y.abs() > e.y + abs_half.y
        || mid.z.abs() > e.z + abs_half.z
    {
        return false;
    }

    // Vector::{x, y, z}().cross(half)
    !((half.y * mid.z - half.z * mid.y).abs() > e.y * abs_half.z + e.z * abs_half.y
        || (half.z * mid.x - half.x * mid.z).abs() > e.z * abs_half.x + e.x * abs_half.z
        || (half.x * mid.y - half.y * mid.x).abs() > e.x * abs_half.y + e.y * abs_half.x)
}

/// Intersection test between a segment and an AABB.
#[inline]
pub fn intersection_test_segment_aabb(segment1: &Segment, aabb2: &Aabb) -> bool {
    intersection_test_aabb_segment(aabb2, segment1)
}
