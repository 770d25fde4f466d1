//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersection_test()`] to determine if two primitives are intersecting or not.
//! * [`Ray::hits`] to cast a ray on a plane or a triangle.
//!
//! Ray-casting and point-projection can be achieved by importing traits:
//!
//! * [`query::RayCast`] for ray-casting.
//! * [`query::PointQuery`] for point projection.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones described above.
//! For example `intersection_test_aabb_triangle` tests the intersection between two primitives known at
//! compile-time to be an AABB and a triangle. They are less convenient to use than the most generic version
//! but will be slightly faster due to the lack of dynamic dispatch.
//! The specific functions have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `intersection_test`, `containment_test` or `closest_points`.
//! * `[shape1]` is the type of the first primitive passed to the function, e.g., `aabb`, or `bounding_sphere`.
//! * `[shape2]` is the type of the second primitive passed to the function, e.g., `aabb`, or `bounding_sphere`.
//!
//! Every pair of intersection test exists in both orders, e.g., `intersection_test_triangle_aabb` simply
//! calls `intersection_test_aabb_triangle`. Containment tests take the enclosing primitive first.
//!
//! [`query::intersection_test()`]: crate::query::intersection_test()
//! [`query::RayCast`]: crate::query::RayCast
//! [`query::PointQuery`]: crate::query::PointQuery

pub use self::error::Unsupported;
pub use self::intersection_test::{intersection_test, TriangleIntersection};
pub use self::point::{PointProjection, PointQuery, PointQueryWithLocation};
pub use self::ray::{Ray, RayCast, RayIntersection};

pub mod closest_points;
pub mod containment_test;
mod error;
mod intersection_test;
pub mod point;
mod ray;
pub mod sat;

/// Queries dedicated to specific pairs of primitives.
pub mod details {
    pub use super::closest_points::*;
    pub use super::containment_test::*;
    pub use super::intersection_test::*;
    pub use super::ray::{line_toi_with_plane, local_ray_intersection_with_triangle};
}
