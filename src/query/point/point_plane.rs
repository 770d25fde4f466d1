use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Plane;

impl PointQuery for Plane {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let dist = self.signed_distance(pt);
        PointProjection::new(dist.abs() <= DEFAULT_EPSILON, pt - self.normal * dist)
    }

    #[inline]
    fn distance_squared_to_point(&self, pt: &Point<Real>) -> Real {
        let dist = self.signed_distance(pt);
        dist * dist
    }
}
