use crate::query::sat;
use crate::shape::{Obb, Segment};

/// Intersection test between an oriented box and a segment.
#[inline]
pub fn intersection_test_obb_segment(obb1: &Obb, segment2: &Segment) -> bool {
    sat::obb_segment_find_separating_axis(obb1, segment2).is_none()
}

/// Intersection test between a segment and an oriented box.
#[inline]
pub fn intersection_test_segment_obb(segment1: &Segment, obb2: &Obb) -> bool {
    intersection_test_obb_segment(obb2, segment1)
}
