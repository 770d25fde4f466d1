/// Error indicating that a geometric query is not supported between certain primitive combinations.
///
/// Every pair of solid or flat primitives has an intersection test. Rays are only cast against
/// planes and triangles, so [`intersection_test`](crate::query::intersection_test) returns this
/// error when a [`Ray`](crate::query::Ray) is paired with anything else.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use overlap3d::bounding_volume::BoundingSphere;
/// use overlap3d::na::{Point3, Vector3};
/// use overlap3d::query::{intersection_test, Ray, Unsupported};
/// use overlap3d::shape::Primitive;
///
/// let ray = Primitive::from(Ray::new(Point3::origin(), Vector3::x()));
/// let ball = Primitive::from(BoundingSphere::new(Point3::new(5.0, 0.0, 0.0), 1.0));
///
/// assert_eq!(intersection_test(&ray, &ball), Err(Unsupported));
/// # }
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("query not supported between these shapes")]
pub struct Unsupported;
