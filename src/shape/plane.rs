//! Support for the plane primitive.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{InvalidPrimitive, Triangle};

/// A plane, i.e., the set of points `p` such that `normal · p + d = 0`.
///
/// Distance and side queries are only meaningful when `normal` has a unit
/// length. This is not enforced: use [`Plane::normalized`] when in doubt.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane normal.
    pub normal: Vector<Real>,
    /// The signed offset of the plane from the origin, along `-normal`.
    pub d: Real,
}

impl Plane {
    /// Builds a new plane from its normal and its offset.
    #[inline]
    pub fn new(normal: Vector<Real>, d: Real) -> Plane {
        Plane { normal, d }
    }

    /// Builds the plane passing through `point` and orthogonal to `normal`.
    #[inline]
    pub fn from_point_normal(point: &Point<Real>, normal: &Vector<Real>) -> Plane {
        Plane::new(*normal, -normal.dot(&point.coords))
    }

    /// Builds the plane passing through three points, with a unit normal oriented
    /// like `(p1 - p0) × (p2 - p0)`.
    ///
    /// Returns `None` if the three points are collinear.
    pub fn from_points(p0: &Point<Real>, p1: &Point<Real>, p2: &Point<Real>) -> Option<Plane> {
        Triangle::new(*p0, *p1, *p2).plane()
    }

    /// Builds the plane supporting the given triangle.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn from_triangle(triangle: &Triangle) -> Option<Plane> {
        triangle.plane()
    }

    /// The plane `z = 0`.
    #[inline]
    pub fn xy() -> Plane {
        Plane::new(Vector::z(), 0.0)
    }

    /// The plane `y = 0`.
    #[inline]
    pub fn xz() -> Plane {
        Plane::new(Vector::y(), 0.0)
    }

    /// The plane `x = 0`.
    #[inline]
    pub fn yz() -> Plane {
        Plane::new(Vector::x(), 0.0)
    }

    /// The signed distance from `pt` to this plane, positive on the side the normal points to.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.d
    }

    /// The unsigned distance from `pt` to this plane.
    #[inline]
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        self.signed_distance(pt).abs()
    }

    /// The point of this plane closest to the origin.
    #[inline]
    pub fn origin(&self) -> Point<Real> {
        Point::from(self.normal * -self.d)
    }

    /// Is the length of the normal `1`, up to [`DEFAULT_EPSILON`]?
    #[inline]
    pub fn is_normalized(&self) -> bool {
        relative_eq!(self.normal.norm_squared(), 1.0, epsilon = DEFAULT_EPSILON)
    }

    /// Scales the normal and the offset so that the normal has a unit length.
    ///
    /// Returns the original length of the normal. Planes with a zero normal are left unchanged.
    pub fn normalize(&mut self) -> Real {
        let len = self.normal.norm();

        if len > DEFAULT_EPSILON {
            self.normal /= len;
            self.d /= len;
        }

        len
    }

    /// This plane with a unit normal.
    #[inline]
    pub fn normalized(mut self) -> Self {
        let _ = self.normalize();
        self
    }

    /// This plane with its normal flipped. It contains the same points.
    #[inline]
    pub fn flipped(&self) -> Self {
        Plane::new(-self.normal, -self.d)
    }

    /// This plane translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Plane::new(self.normal, self.d - self.normal.dot(shift))
    }

    /// Checks that the plane is finite and has a non-zero normal.
    pub fn validate(&self) -> Result<(), InvalidPrimitive> {
        crate::shape::error::check_finite([&self.normal], &[self.d])?;

        if self.normal.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON {
            Err(InvalidPrimitive::ZeroNormal)
        } else {
            Ok(())
        }
    }
}
