use crate::math::DEFAULT_EPSILON;
use crate::query::closest_points::distance_squared_segment_segment;
use crate::shape::Segment;

/// Intersection test between two segments.
///
/// Segments closer than [`DEFAULT_EPSILON`] to each other intersect.
#[inline]
pub fn intersection_test_segment_segment(segment1: &Segment, segment2: &Segment) -> bool {
    distance_squared_segment_segment(segment1, segment2) <= DEFAULT_EPSILON * DEFAULT_EPSILON
}
