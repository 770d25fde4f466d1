//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::InvalidPrimitive;

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction.
///
/// # Structure
///
/// - **origin**: The starting point of the ray
/// - **dir**: The direction vector (does NOT need to be normalized)
///
/// # Direction Vector
///
/// The direction can be any non-zero vector:
/// - **Normalized**: `dir` with length 1.0 gives time-of-impact in world units
/// - **Not normalized**: Time-of-impact is scaled by `dir.norm()`
///
/// A zero direction never hits anything.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use overlap3d::query::Ray;
/// use overlap3d::shape::Plane;
/// use overlap3d::na::{Point3, Vector3};
///
/// // A ray 5 units below the XY plane, pointing up.
/// let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::z());
///
/// let hit = ray.hits(&Plane::xy()).unwrap();
/// assert_eq!(hit.time_of_impact, 5.0);
/// assert_eq!(ray.point_at(hit.time_of_impact), Point3::origin());
///
/// // The ray points away from this plane.
/// assert!(ray.hits(&Plane::new(Vector3::z(), 10.0)).is_none());
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    ///
    /// Points along the ray are computed as `origin + dir * t` for `t ≥ 0`.
    pub origin: Point<Real>,

    /// Direction vector of the ray.
    ///
    /// This vector points in the direction the ray travels. It does NOT need
    /// to be normalized, but using a normalized direction makes time-of-impact
    /// values represent actual distances.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Translates this ray by the given vector.
    ///
    /// Only the origin is moved; the direction remains unchanged.
    #[inline]
    pub fn translated(&self, v: &Vector<Real>) -> Self {
        Self::new(self.origin + v, self.dir)
    }

    /// Computes a point along the ray at parameter `t`.
    ///
    /// Returns `origin + dir * t`. For `t ≥ 0`, this gives points along the ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// Casts this ray, without length limit, on `shape`.
    ///
    /// Returns `None` if the ray misses. Hits behind the origin are misses,
    /// a hit exactly at the origin is reported with a zero time of impact.
    #[inline]
    pub fn hits(&self, shape: &impl RayCast) -> Option<RayIntersection> {
        shape.cast_ray(self, Real::MAX)
    }

    /// Is the direction of this ray zero, up to [`DEFAULT_EPSILON`]?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.dir.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON
    }

    /// Checks that this ray is finite and has a non-zero direction.
    pub fn validate(&self) -> Result<(), InvalidPrimitive> {
        crate::shape::error::check_finite([&self.origin.coords, &self.dir], &[])?;

        if self.is_degenerate() {
            Err(InvalidPrimitive::ZeroDirection)
        } else {
            Ok(())
        }
    }
}

/// Result of a successful ray cast against a shape.
///
/// # Time of Impact
///
/// The time of impact is the parameter `t` in the ray equation `origin + dir * t`:
/// - If `dir` is normalized: `t` represents the distance traveled
/// - If `dir` is not normalized: `t` represents time (distance / speed)
///
/// # Normal Direction
///
/// The normal is a unit vector oriented against the ray direction, i.e., facing
/// the side the ray comes from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The time of impact of the ray with the shape.
    pub time_of_impact: Real,

    /// The unit normal of the shape at the hit point, facing the ray origin.
    pub normal: Vector<Real>,

    /// The barycentric coordinates of the hit point, for triangles.
    pub barycentric_coordinates: Option<[Real; 3]>,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(time_of_impact: Real, normal: Vector<Real>) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            normal,
            barycentric_coordinates: None,
        }
    }

    /// Creates a new `RayIntersection` on a triangle.
    #[inline]
    pub fn with_barycentric_coordinates(
        time_of_impact: Real,
        normal: Vector<Real>,
        barycentric_coordinates: [Real; 3],
    ) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            normal,
            barycentric_coordinates: Some(barycentric_coordinates),
        }
    }
}

/// Traits of objects which can be tested for intersection with a ray.
pub trait RayCast {
    /// Computes the time of impact, and normal between this shape and a ray.
    ///
    /// Hits with a time of impact greater than `max_time_of_impact` are ignored.
    fn cast_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<RayIntersection>;

    /// Computes the time of impact between this shape and a ray.
    #[inline]
    fn cast_ray_toi(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        self.cast_ray(ray, max_time_of_impact)
            .map(|inter| inter.time_of_impact)
    }

    /// Tests whether a ray intersects this shape.
    #[inline]
    fn intersects_ray(&self, ray: &Ray, max_time_of_impact: Real) -> bool {
        self.cast_ray(ray, max_time_of_impact).is_some()
    }
}
