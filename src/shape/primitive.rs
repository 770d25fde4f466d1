//! The closed set of primitives, for dynamic dispatch.

use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::query::Ray;
use crate::shape::{InvalidPrimitive, Obb, Plane, Segment, Triangle};

static_assertions::assert_impl_all!(Plane: Copy, Send, Sync);
static_assertions::assert_impl_all!(Triangle: Copy, Send, Sync);
static_assertions::assert_impl_all!(Segment: Copy, Send, Sync);
static_assertions::assert_impl_all!(Ray: Copy, Send, Sync);
static_assertions::assert_impl_all!(BoundingSphere: Copy, Send, Sync);
static_assertions::assert_impl_all!(Aabb: Copy, Send, Sync);
static_assertions::assert_impl_all!(Obb: Copy, Send, Sync);
static_assertions::assert_impl_all!(Primitive: Copy, Send, Sync);

/// Enum representing the type of a primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PrimitiveType {
    /// A plane.
    Plane = 0,
    /// A triangle.
    Triangle,
    /// A line segment.
    Segment,
    /// A ray.
    Ray,
    /// A bounding sphere.
    BoundingSphere,
    /// An axis-aligned bounding box.
    Aabb,
    /// An oriented bounding box.
    Obb,
}

/// Any of the primitives supported by this crate.
///
/// This is the closed set of types accepted by [`crate::query::intersection_test()`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Primitive {
    /// A plane.
    Plane(Plane),
    /// A triangle.
    Triangle(Triangle),
    /// A line segment.
    Segment(Segment),
    /// A ray.
    Ray(Ray),
    /// A bounding sphere.
    BoundingSphere(BoundingSphere),
    /// An axis-aligned bounding box.
    Aabb(Aabb),
    /// An oriented bounding box.
    Obb(Obb),
}

macro_rules! impl_primitive_conversions(
    ($($Variant: ident, $as_fn: ident);* $(;)*) => {$(
        impl From<$Variant> for Primitive {
            #[inline]
            fn from(value: $Variant) -> Self {
                Primitive::$Variant(value)
            }
        }

        impl Primitive {
            #[doc = concat!("Returns `Some` if this primitive is a `", stringify!($Variant), "`.")]
            #[inline]
            pub fn $as_fn(&self) -> Option<&$Variant> {
                match self {
                    Primitive::$Variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    )*}
);

impl_primitive_conversions!(
    Plane, as_plane;
    Triangle, as_triangle;
    Segment, as_segment;
    Ray, as_ray;
    BoundingSphere, as_bounding_sphere;
    Aabb, as_aabb;
    Obb, as_obb;
);

impl Primitive {
    /// The type of this primitive.
    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            Primitive::Plane(_) => PrimitiveType::Plane,
            Primitive::Triangle(_) => PrimitiveType::Triangle,
            Primitive::Segment(_) => PrimitiveType::Segment,
            Primitive::Ray(_) => PrimitiveType::Ray,
            Primitive::BoundingSphere(_) => PrimitiveType::BoundingSphere,
            Primitive::Aabb(_) => PrimitiveType::Aabb,
            Primitive::Obb(_) => PrimitiveType::Obb,
        }
    }

    /// Checks that this primitive is finite and has non-negative sizes.
    pub fn validate(&self) -> Result<(), InvalidPrimitive> {
        match self {
            Primitive::Plane(p) => p.validate(),
            Primitive::Triangle(t) => t.validate(),
            Primitive::Segment(s) => s.validate(),
            Primitive::Ray(r) => r.validate(),
            Primitive::BoundingSphere(b) => b.validate(),
            Primitive::Aabb(b) => b.validate(),
            Primitive::Obb(b) => b.validate(),
        }
    }
}
