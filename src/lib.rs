/*!
overlap3d
========

**overlap3d** is a 3-dimensional library of geometric primitives and of the
intersection, containment and ray-casting tests between them, written with
the rust programming language.

The primitives are [`Plane`](shape::Plane), [`Triangle`](shape::Triangle),
[`Segment`](shape::Segment), [`Ray`](query::Ray),
[`BoundingSphere`](bounding_volume::BoundingSphere),
[`Aabb`](bounding_volume::Aabb) and [`Obb`](shape::Obb). Every test is a pure
function over these small `Copy` values.

```
# #[cfg(all(feature = "dim3", feature = "f32"))] {
use overlap3d::bounding_volume::{Aabb, BoundingSphere};
use overlap3d::na::{Point3, Vector3};
use overlap3d::query::details::intersection_test_aabb_bounding_sphere;

let aabb = Aabb::new(Point3::origin(), Vector3::repeat(1.0));
let touching = BoundingSphere::new(Point3::new(2.0, 0.0, 0.0), 1.0);
let apart = BoundingSphere::new(Point3::new(3.0, 0.0, 0.0), 1.0);

assert!(intersection_test_aabb_bounding_sphere(&aabb, &touching));
assert!(!intersection_test_aabb_bounding_sphere(&aabb, &apart));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(unused_qualifications)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![doc(html_root_url = "http://docs.rs/overlap3d/0.1.0")]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    ///
    /// This is ten times the smallest power of ten the scalar type can
    /// represent with full decimal precision, i.e. `1.0e-5` for `f32` and
    /// `1.0e-14` for `f64`.
    #[cfg(feature = "f32")]
    pub const DEFAULT_EPSILON: Real = 1.0e-5;

    /// The default tolerance used for geometric operations.
    ///
    /// This is ten times the smallest power of ten the scalar type can
    /// represent with full decimal precision, i.e. `1.0e-5` for `f32` and
    /// `1.0e-14` for `f64`.
    #[cfg(feature = "f64")]
    pub const DEFAULT_EPSILON: Real = 1.0e-14;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;
}
