use crate::bounding_volume::Aabb;
use crate::query::sat;
use crate::shape::Triangle;

/// Intersection test between an AABB and a triangle.
///
/// This is the complete separating axis test, see
/// [`aabb_triangle_find_separating_axis`](sat::aabb_triangle_find_separating_axis).
#[inline]
pub fn intersection_test_aabb_triangle(aabb1: &Aabb, triangle2: &Triangle) -> bool {
    sat::aabb_triangle_find_separating_axis(aabb1, triangle2).is_none()
}

/// Intersection test between a triangle and an AABB.
#[inline]
pub fn intersection_test_triangle_aabb(triangle1: &Triangle, aabb2: &Aabb) -> bool {
    intersection_test_aabb_triangle(aabb2, triangle1)
}
