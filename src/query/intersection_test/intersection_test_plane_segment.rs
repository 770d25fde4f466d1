use crate::shape::{Plane, Segment};

/// Intersection test between a plane and a segment.
///
/// The segment intersects the plane iff its endpoints are not strictly on the same side of
/// the plane. An endpoint lying on the plane counts as an intersection.
#[inline]
pub fn intersection_test_plane_segment(plane1: &Plane, segment2: &Segment) -> bool {
    let da = plane1.signed_distance(&segment2.a);
    let db = plane1.signed_distance(&segment2.b);

    !((da > 0.0 && db > 0.0) || (da < 0.0 && db < 0.0))
}

/// Intersection test between a segment and a plane.
#[inline]
pub fn intersection_test_segment_plane(segment1: &Segment, plane2: &Plane) -> bool {
    intersection_test_plane_segment(plane2, segment1)
}
