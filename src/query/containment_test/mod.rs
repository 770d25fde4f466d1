//! Containment tests between primitives.
//!
//! Each function has the form `containment_test_[outer]_[inner]` and tells whether the first
//! primitive entirely encloses the second one, boundaries included. A primitive containing
//! another one also intersects it.

pub use self::containment_test_aabb::{
    containment_test_aabb_aabb, containment_test_aabb_bounding_sphere, containment_test_aabb_obb,
    containment_test_aabb_point, containment_test_aabb_segment, containment_test_aabb_triangle,
};
pub use self::containment_test_bounding_sphere::{
    containment_test_bounding_sphere_aabb, containment_test_bounding_sphere_bounding_sphere,
    containment_test_bounding_sphere_obb, containment_test_bounding_sphere_point,
    containment_test_bounding_sphere_segment, containment_test_bounding_sphere_triangle,
};
pub use self::containment_test_obb::{
    containment_test_obb_aabb, containment_test_obb_bounding_sphere, containment_test_obb_obb,
    containment_test_obb_point, containment_test_obb_segment, containment_test_obb_triangle,
};
pub use self::containment_test_triangle::containment_test_triangle_segment;

mod containment_test_aabb;
mod containment_test_bounding_sphere;
mod containment_test_obb;
mod containment_test_triangle;
