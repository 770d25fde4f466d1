//! Geometric primitives supported by overlap3d.
//!
//! The bounding volumes ([`Aabb`](crate::bounding_volume::Aabb) and
//! [`BoundingSphere`](crate::bounding_volume::BoundingSphere)) live in the
//! [`bounding_volume`](crate::bounding_volume) module and the ray in the
//! [`query`](crate::query) module.

pub use self::box_corner::{corner, oriented_corner, BoxCorner};
pub use self::error::InvalidPrimitive;
pub use self::obb::Obb;
pub use self::plane::Plane;
pub use self::primitive::{Primitive, PrimitiveType};
pub use self::segment::{Segment, SegmentPointLocation};
pub use self::triangle::{Triangle, TrianglePointLocation};

mod box_corner;
pub(crate) mod error;
mod obb;
mod plane;
mod primitive;
mod segment;
mod triangle;
