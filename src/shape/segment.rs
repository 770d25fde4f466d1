//! Definition of the line segment primitive.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{PointQuery, PointQueryWithLocation};
use crate::shape::InvalidPrimitive;

use na::Unit;
use core::mem;

/// A line segment.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

/// Logical description of the location of a point on a segment.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SegmentPointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on the segment interior.
    OnEdge([Real; 2]),
}

impl SegmentPointLocation {
    /// The barycentric coordinates corresponding to this point location.
    pub fn barycentric_coordinates(&self) -> [Real; 2] {
        let mut bcoords = [0.0; 2];

        match self {
            SegmentPointLocation::OnVertex(i) => bcoords[*i as usize] = 1.0,
            SegmentPointLocation::OnEdge(uv) => bcoords = *uv,
        }

        bcoords
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The two endpoints of this segment.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 2] {
        [self.a, self.b]
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_direction(), DEFAULT_EPSILON)
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The squared length of this segment.
    #[inline]
    pub fn length_squared(&self) -> Real {
        self.scaled_direction().norm_squared()
    }

    /// The point halfway between both endpoints.
    #[inline]
    pub fn midpoint(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    /// The point at the parameter `t`, where `t = 0` is `self.a` and `t = 1` is `self.b`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }

    /// Is this segment shorter than [`DEFAULT_EPSILON`]?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON
    }

    /// Swaps the two vertices of this segment.
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// This segment with its endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Segment::new(self.b, self.a)
    }

    /// This segment translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Segment::new(self.a + shift, self.b + shift)
    }

    /// The point of this segment closest to `pt`.
    #[inline]
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.project_point(pt).point
    }

    /// The parameter `t` of the point of this segment closest to `pt`.
    ///
    /// The result is always in `[0, 1]`; it is `0` if this segment has a zero length.
    pub fn closest_parameter(&self, pt: &Point<Real>) -> Real {
        let (_, location) = self.project_point_and_get_location(pt);
        location.barycentric_coordinates()[1]
    }

    /// Does `pt` lie on this segment, up to `epsilon`?
    #[inline]
    pub fn contains_point_eps(&self, pt: &Point<Real>, epsilon: Real) -> bool {
        na::distance_squared(pt, &self.closest_point(pt)) <= epsilon * epsilon
    }

    /// Does `pt` lie on the infinite line supporting this segment, up to `epsilon`?
    ///
    /// Every point is collinear with a degenerate segment.
    pub fn is_collinear_with_point(&self, pt: &Point<Real>, epsilon: Real) -> bool {
        let dir = self.scaled_direction();
        let sq_len = dir.norm_squared();

        if sq_len <= DEFAULT_EPSILON * DEFAULT_EPSILON {
            return true;
        }

        // |dir × ap| / |dir| is the distance from the line.
        let cross = dir.cross(&(pt - self.a));
        cross.norm_squared() <= epsilon * epsilon * sq_len
    }

    /// Do both segments lie on the same infinite line, up to `epsilon`?
    pub fn is_collinear_with(&self, other: &Segment, epsilon: Real) -> bool {
        self.is_collinear_with_point(&other.a, epsilon)
            && self.is_collinear_with_point(&other.b, epsilon)
    }

    /// Checks that both endpoints are finite.
    pub fn validate(&self) -> Result<(), InvalidPrimitive> {
        crate::shape::error::check_finite([&self.a.coords, &self.b.coords], &[])
    }
}
