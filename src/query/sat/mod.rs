//! Application of the Separating Axis Theorem (SAT) for intersection tests.
//!
//! # What is the Separating Axis Theorem?
//!
//! The **Separating Axis Theorem (SAT)** states that two convex shapes do **not**
//! intersect if and only if there exists an axis onto which the projections of
//! the two shapes do not overlap.
//!
//! In simpler terms: if you can find a direction where, when you "shine a light"
//! from that direction and look at the shadows cast by both shapes, those shadows
//! don't overlap, then the shapes are not colliding.
//!
//! # How Does SAT Work?
//!
//! SAT works by testing a finite set of candidate axes:
//!
//! 1. **Select candidate axes**: for boxes and triangles these are the face normals
//!    of both shapes and the cross products of their edge directions.
//!
//! 2. **Project both shapes onto each axis**: a [`SatTester`] accumulates the
//!    `[min, max]` range of the projections of a point set (box corners, triangle
//!    vertices, segment endpoints).
//!
//! 3. **Check for overlap**: if the ranges don't overlap on one axis, the shapes
//!    don't intersect and that axis is returned. If all axes show overlap, the
//!    shapes are intersecting.
//!
//! Ranges that merely touch are considered overlapping, so shapes in contact
//! intersect. Cross products of nearly parallel edges are too short to be
//! meaningful and are skipped.
//!
//! # Example: AABB-Triangle
//!
//! ```rust
//! # #[cfg(all(feature = "dim3", feature = "f32"))] {
//! use overlap3d::bounding_volume::Aabb;
//! use overlap3d::na::{Point3, Vector3};
//! use overlap3d::query::sat::aabb_triangle_find_separating_axis;
//! use overlap3d::shape::Triangle;
//!
//! let aabb = Aabb::new(Point3::origin(), Vector3::repeat(0.5));
//! let floor = Triangle::new(
//!     Point3::new(-2.0, 0.0, 2.0),
//!     Point3::new(2.0, 0.0, 2.0),
//!     Point3::new(-2.0, 0.0, -2.0),
//! );
//! let ceiling = Triangle::new(
//!     Point3::new(-2.0, 2.0, 2.0),
//!     Point3::new(2.0, 2.0, 2.0),
//!     Point3::new(-2.0, 2.0, -2.0),
//! );
//!
//! assert!(aabb_triangle_find_separating_axis(&aabb, &floor).is_none());
//! assert_eq!(aabb_triangle_find_separating_axis(&aabb, &ceiling), Some(Vector3::y()));
//! # }
//! ```
//!
//! # Module Organization
//!
//! - **Box-Box**: AABB vs oriented box, oriented box vs oriented box.
//! - **Box-Triangle**: AABB vs triangle, oriented box vs triangle.
//! - **Box-Segment**: oriented box vs segment.
//!
//! Each function returns the first separating axis found, not normalized, or
//! `None` if the shapes intersect.

use crate::math::{Real, Vector, DEFAULT_EPSILON};

pub use self::sat_box_box::*;
pub use self::sat_box_segment::*;
pub use self::sat_box_triangle::*;
pub use self::sat_tester::{CoordAxis, SatTester};

mod sat_box_box;
mod sat_box_segment;
mod sat_box_triangle;
mod sat_tester;

/// Is `axis`, the cross product of two vectors whose squared norms multiply to
/// `scale`, too short to be tested?
#[inline]
pub(crate) fn is_degenerate_axis(axis: &Vector<Real>, scale: Real) -> bool {
    axis.norm_squared() <= DEFAULT_EPSILON * scale
}
