//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};
use crate::shape::InvalidPrimitive;
use na;
use num::Zero;

/// A Bounding Sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere, expected to be non-negative.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The bounding sphere diameter.
    #[inline]
    pub fn diameter(&self) -> Real {
        self.radius * 2.0
    }

    /// The volume enclosed by this sphere.
    #[inline]
    pub fn volume(&self) -> Real {
        let pi = core::f64::consts::PI as Real;
        pi * self.radius * self.radius * self.radius * (4.0 / 3.0)
    }

    /// Does this sphere contain `pt`, including its boundary?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// The point of this sphere closest to `pt`. This is `pt` itself if it is inside.
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let dpt = pt - self.center;
        let dist = dpt.norm();

        if dist <= self.radius {
            *pt
        } else {
            self.center + dpt * (self.radius / dist)
        }
    }

    /// This sphere translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> BoundingSphere {
        BoundingSphere::new(self.center + shift, self.radius)
    }

    /// This sphere with its radius multiplied by `scale`, keeping its center.
    #[inline]
    pub fn scaled_wrt_center(&self, scale: Real) -> BoundingSphere {
        BoundingSphere::new(self.center, self.radius * scale.abs())
    }

    /// Checks that this sphere is finite and has a non-negative radius.
    pub fn validate(&self) -> Result<(), InvalidPrimitive> {
        crate::shape::error::check_finite([&self.center.coords], &[self.radius])?;

        if self.radius < 0.0 {
            Err(InvalidPrimitive::NegativeRadius)
        } else {
            Ok(())
        }
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        let mut dir = *other.center() - *self.center();
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;

        res.merge(other);

        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        debug_assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        debug_assert!(amount >= 0.0, "The loosening margin must be positive.");
        BoundingSphere::new(self.center, self.radius + amount)
    }

    #[inline]
    fn tighten(&mut self, amount: Real) {
        *self = self.tightened(amount);
    }

    #[inline]
    fn tightened(&self, amount: Real) -> BoundingSphere {
        debug_assert!(amount >= 0.0, "The tightening margin must be positive.");
        BoundingSphere::new(self.center, (self.radius - amount).max(0.0))
    }
}
