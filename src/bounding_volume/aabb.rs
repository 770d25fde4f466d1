//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingSphere, BoundingVolume};
use crate::math::{Point, Real, Vector};
use crate::shape::{self, BoxCorner, InvalidPrimitive, Obb};
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume. It is called "axis-aligned" because its
/// faces are always orthogonal to the coordinate axes, making it very fast to test.
///
/// # Structure
///
/// - **center**: The center of the box.
/// - **half_extents**: Half the size of the box along each axis. Each component is
///   expected to be non-negative. Zero is allowed and yields a flat (or point-like) box.
///
/// The smallest and largest corners are available through [`Aabb::mins`] and
/// [`Aabb::maxs`].
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use overlap3d::bounding_volume::{Aabb, BoundingVolume};
/// use overlap3d::na::{Point3, Vector3};
///
/// let a = Aabb::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
/// let b = Aabb::from_min_max(Point3::new(0.5, 0.5, 0.5), Point3::new(3.0, 3.0, 3.0));
///
/// assert!(a.intersects(&b));
/// assert_eq!(b.center, Point3::new(1.75, 1.75, 1.75));
///
/// let merged = a.merged(&b);
/// assert!(merged.contains(&a) && merged.contains(&b));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The center of the box.
    pub center: Point<Real>,
    /// Half the size of the box along each axis.
    pub half_extents: Vector<Real>,
}

impl Aabb {
    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb {
            center,
            half_extents,
        }
    }

    /// Creates a new AABB from its smallest and largest corners.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use overlap3d::bounding_volume::Aabb;
    /// use overlap3d::na::{Point3, Vector3};
    ///
    /// let aabb = Aabb::from_min_max(Point3::new(0.0, -3.0, -4.0), Point3::new(10.0, 3.0, 4.0));
    ///
    /// assert_eq!(aabb.center, Point3::new(5.0, 0.0, 0.0));
    /// assert_eq!(aabb.half_extents, Vector3::new(5.0, 3.0, 4.0));
    /// # }
    /// ```
    #[inline]
    pub fn from_min_max(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb::new(na::center(&mins, &maxs), (maxs - mins) / 2.0)
    }

    /// Creates the smallest AABB enclosing the given points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<'a, I>(pts: I) -> Option<Aabb>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut it = pts.into_iter();
        let first = it.next()?;
        let (mins, maxs) = it.fold((*first, *first), |(mins, maxs), pt| {
            (mins.inf(pt), maxs.sup(pt))
        });

        Some(Aabb::from_min_max(mins, maxs))
    }

    /// The smallest AABB enclosing the given sphere.
    #[inline]
    pub fn from_sphere(sphere: &BoundingSphere) -> Aabb {
        Aabb::new(sphere.center, Vector::repeat(sphere.radius))
    }

    /// The smallest AABB enclosing the eight corners of the given oriented box.
    pub fn from_obb(obb: &Obb) -> Aabb {
        // The extent along world axis `i` is the sum of the projections of each scaled
        // local axis on `i`, which is exactly what enclosing the eight corners gives.
        let half_extents = obb.axes.abs() * obb.half_extents;
        Aabb::new(obb.center, half_extents)
    }

    /// The corner of this AABB with the smallest coordinates.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.center - self.half_extents
    }

    /// The corner of this AABB with the largest coordinates.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.center + self.half_extents
    }

    /// The size of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.half_extents * 2.0
    }

    /// The size of this AABB along the X axis.
    #[inline]
    pub fn width(&self) -> Real {
        self.half_extents.x * 2.0
    }

    /// The size of this AABB along the Y axis.
    #[inline]
    pub fn height(&self) -> Real {
        self.half_extents.y * 2.0
    }

    /// The size of this AABB along the Z axis.
    #[inline]
    pub fn depth(&self) -> Real {
        self.half_extents.z * 2.0
    }

    /// The length of the diagonal joining [`Aabb::mins`] and [`Aabb::maxs`].
    #[inline]
    pub fn diagonal(&self) -> Real {
        self.half_extents.norm() * 2.0
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        self.half_extents.x * self.half_extents.y * self.half_extents.z * 8.0
    }

    /// Is any extent of this AABB zero or negative?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.half_extents.iter().any(|e| *e <= 0.0)
    }

    /// The position of the given corner.
    #[inline]
    pub fn corner(&self, which: BoxCorner) -> Point<Real> {
        shape::corner(&self.center, &self.half_extents, which)
    }

    /// The eight corners of this AABB, ordered like [`BoxCorner::ALL`].
    pub fn vertices(&self) -> [Point<Real>; 8] {
        BoxCorner::ALL.map(|which| self.corner(which))
    }

    /// The point of this AABB closest to `pt`. This is `pt` itself if it is inside.
    #[inline]
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt.sup(&self.mins()).inf(&self.maxs())
    }

    /// The squared distance between `pt` and this AABB. This is zero if `pt` is inside.
    #[inline]
    pub fn distance_squared_to_local_point(&self, pt: &Point<Real>) -> Real {
        na::distance_squared(pt, &self.closest_point(pt))
    }

    /// Does this AABB contain `pt`, including its boundary?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        (pt - self.center)
            .abs()
            .iter()
            .zip(self.half_extents.iter())
            .all(|(d, e)| d <= e)
    }

    /// The smallest bounding sphere enclosing this AABB.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.half_extents.norm())
    }

    /// This AABB translated by `shift`.
    #[inline]
    pub fn translated(mut self, shift: &Vector<Real>) -> Self {
        self.center += shift;
        self
    }

    /// This AABB scaled by `scale` with respect to the world origin.
    ///
    /// Negative scales mirror the box; the half-extents stay non-negative.
    #[inline]
    pub fn scaled(self, scale: &Vector<Real>) -> Self {
        Aabb::new(
            self.center.coords.component_mul(scale).into(),
            self.half_extents.component_mul(&scale.abs()),
        )
    }

    /// This AABB scaled by `scale` with respect to its own center.
    #[inline]
    pub fn scaled_wrt_center(self, scale: &Vector<Real>) -> Self {
        Aabb::new(self.center, self.half_extents.component_mul(&scale.abs()))
    }

    /// Are both the center and half-extents of this AABB zero, up to `epsilon`?
    #[inline]
    pub fn is_approx_zero(&self, epsilon: Real) -> bool {
        self.center.coords.amax() <= epsilon && self.half_extents.amax() <= epsilon
    }

    /// Does this AABB contain a NaN or infinite value?
    #[inline]
    pub fn has_infinity_or_nan(&self) -> bool {
        self.validate() == Err(InvalidPrimitive::NonFinite)
    }

    /// Checks that this AABB is finite and has non-negative half-extents.
    pub fn validate(&self) -> Result<(), InvalidPrimitive> {
        shape::error::check_finite([&self.center.coords, &self.half_extents], &[])?;

        if self.half_extents.iter().any(|e| *e < 0.0) {
            Err(InvalidPrimitive::NegativeExtents)
        } else {
            Ok(())
        }
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        let delta = (other.center - self.center).abs();
        let sum = self.half_extents + other.half_extents;
        delta.iter().zip(sum.iter()).all(|(d, s)| d <= s)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins(), &other.mins()) && na::partial_ge(&self.maxs(), &other.maxs())
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        *self = self.merged(other);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::from_min_max(self.mins().inf(&other.mins()), self.maxs().sup(&other.maxs()))
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        debug_assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.half_extents += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        debug_assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb::new(self.center, self.half_extents + Vector::repeat(amount))
    }

    #[inline]
    fn tighten(&mut self, amount: Real) {
        *self = self.tightened(amount);
    }

    #[inline]
    fn tightened(&self, amount: Real) -> Aabb {
        debug_assert!(amount >= 0.0, "The tightening margin must be positive.");
        // A margin larger than an extent collapses the box on that axis.
        let half_extents = (self.half_extents - Vector::repeat(amount)).sup(&Vector::zeros());
        Aabb::new(self.center, half_extents)
    }
}
