use crate::bounding_volume::{Aabb, BoundingVolume};

/// Intersection test between two AABBs.
///
/// The boxes intersect iff their centers are, on each axis, closer than the sum of
/// their half-extents. Touching boxes intersect.
#[inline]
pub fn intersection_test_aabb_aabb(aabb1: &Aabb, aabb2: &Aabb) -> bool {
    aabb1.intersects(aabb2)
}
