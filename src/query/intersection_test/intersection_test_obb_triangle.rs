use crate::query::sat;
use crate::shape::{Obb, Triangle};

/// Intersection test between an oriented box and a triangle.
#[inline]
pub fn intersection_test_obb_triangle(obb1: &Obb, triangle2: &Triangle) -> bool {
    sat::obb_triangle_find_separating_axis(obb1, triangle2).is_none()
}

/// Intersection test between a triangle and an oriented box.
#[inline]
pub fn intersection_test_triangle_obb(triangle1: &Triangle, obb2: &Obb) -> bool {
    intersection_test_obb_triangle(obb2, triangle1)
}
