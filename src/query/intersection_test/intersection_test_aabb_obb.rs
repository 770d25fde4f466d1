use crate::bounding_volume::Aabb;
use crate::query::sat;
use crate::shape::Obb;

/// Intersection test between an AABB and an oriented box.
#[inline]
pub fn intersection_test_aabb_obb(aabb1: &Aabb, obb2: &Obb) -> bool {
    sat::aabb_obb_find_separating_axis(aabb1, obb2).is_none()
}

/// Intersection test between an oriented box and an AABB.
#[inline]
pub fn intersection_test_obb_aabb(obb1: &Obb, aabb2: &Aabb) -> bool {
    intersection_test_aabb_obb(aabb2, obb1)
}
