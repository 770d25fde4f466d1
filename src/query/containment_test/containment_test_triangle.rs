use crate::math::Real;
use crate::shape::{Segment, Triangle};

/// Does the triangle contain the segment, up to `epsilon`?
///
/// Both endpoints must lie on the triangle, at a distance smaller than `epsilon`.
#[inline]
pub fn containment_test_triangle_segment(
    triangle1: &Triangle,
    segment2: &Segment,
    epsilon: Real,
) -> bool {
    triangle1.contains_segment(segment2, epsilon)
}
