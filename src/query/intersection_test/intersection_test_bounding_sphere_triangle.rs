use crate::bounding_volume::BoundingSphere;
use crate::query::PointQuery;
use crate::shape::Triangle;

/// Intersection test between a bounding sphere and a triangle.
///
/// Projects the sphere center on the triangle, so the test is exact on the triangle faces,
/// edges, and vertices.
#[inline]
pub fn intersection_test_bounding_sphere_triangle(
    sphere1: &BoundingSphere,
    triangle2: &Triangle,
) -> bool {
    triangle2.distance_squared_to_point(&sphere1.center) <= sphere1.radius * sphere1.radius
}

/// Intersection test between a triangle and a bounding sphere.
#[inline]
pub fn intersection_test_triangle_bounding_sphere(
    triangle1: &Triangle,
    sphere2: &BoundingSphere,
) -> bool {
    intersection_test_bounding_sphere_triangle(sphere2, triangle1)
}
