use crate::query::sat::SatTester;
use crate::shape::{Plane, Triangle};

/// Intersection test between a plane and a triangle.
///
/// The triangle intersects the plane iff the projections of its vertices on the plane
/// normal surround the plane.
#[inline]
pub fn intersection_test_plane_triangle(plane1: &Plane, triangle2: &Triangle) -> bool {
    SatTester::new(&plane1.normal, &triangle2.vertices()).contains_value(-plane1.d)
}

/// Intersection test between a triangle and a plane.
#[inline]
pub fn intersection_test_triangle_plane(triangle1: &Triangle, plane2: &Plane) -> bool {
    intersection_test_plane_triangle(plane2, triangle1)
}
