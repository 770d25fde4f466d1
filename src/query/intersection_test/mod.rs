//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_aabb_aabb::intersection_test_aabb_aabb;
pub use self::intersection_test_aabb_bounding_sphere::{
    intersection_test_aabb_bounding_sphere, intersection_test_bounding_sphere_aabb,
};
pub use self::intersection_test_aabb_obb::{intersection_test_aabb_obb, intersection_test_obb_aabb};
pub use self::intersection_test_aabb_plane::{
    intersection_test_aabb_plane, intersection_test_plane_aabb,
};
pub use self::intersection_test_aabb_segment::{
    intersection_test_aabb_segment, intersection_test_segment_aabb,
};
pub use self::intersection_test_aabb_triangle::{
    intersection_test_aabb_triangle, intersection_test_triangle_aabb,
};
pub use self::intersection_test_bounding_sphere_bounding_sphere::intersection_test_bounding_sphere_bounding_sphere;
pub use self::intersection_test_bounding_sphere_obb::{
    intersection_test_bounding_sphere_obb, intersection_test_obb_bounding_sphere,
};
pub use self::intersection_test_bounding_sphere_plane::{
    intersection_test_bounding_sphere_plane, intersection_test_plane_bounding_sphere,
};
pub use self::intersection_test_bounding_sphere_segment::{
    intersection_test_bounding_sphere_segment, intersection_test_segment_bounding_sphere,
};
pub use self::intersection_test_bounding_sphere_triangle::{
    intersection_test_bounding_sphere_triangle, intersection_test_triangle_bounding_sphere,
};
pub use self::intersection_test_obb_obb::intersection_test_obb_obb;
pub use self::intersection_test_obb_plane::{
    intersection_test_obb_plane, intersection_test_plane_obb,
};
pub use self::intersection_test_obb_segment::{
    intersection_test_obb_segment, intersection_test_segment_obb,
};
pub use self::intersection_test_obb_triangle::{
    intersection_test_obb_triangle, intersection_test_triangle_obb,
};
pub use self::intersection_test_plane_plane::intersection_test_plane_plane;
pub use self::intersection_test_plane_segment::{
    intersection_test_plane_segment, intersection_test_segment_plane,
};
pub use self::intersection_test_plane_triangle::{
    intersection_test_plane_triangle, intersection_test_triangle_plane,
};
pub use self::intersection_test_segment_segment::intersection_test_segment_segment;
pub use self::intersection_test_segment_triangle::{
    intersection_test_segment_triangle, intersection_test_triangle_segment,
};
pub use self::intersection_test_triangle_triangle::{
    intersection_test_triangle_triangle, intersection_triangle_triangle, TriangleIntersection,
};

mod intersection_test_aabb_aabb;
mod intersection_test_aabb_bounding_sphere;
mod intersection_test_aabb_obb;
mod intersection_test_aabb_plane;
mod intersection_test_aabb_segment;
mod intersection_test_aabb_triangle;
mod intersection_test_bounding_sphere_bounding_sphere;
mod intersection_test_bounding_sphere_obb;
mod intersection_test_bounding_sphere_plane;
mod intersection_test_bounding_sphere_segment;
mod intersection_test_bounding_sphere_triangle;
mod intersection_test_obb_obb;
mod intersection_test_obb_plane;
mod intersection_test_obb_segment;
mod intersection_test_obb_triangle;
mod intersection_test_plane_plane;
mod intersection_test_plane_segment;
mod intersection_test_plane_triangle;
mod intersection_test_segment_segment;
mod intersection_test_segment_triangle;
mod intersection_test_triangle_triangle;
