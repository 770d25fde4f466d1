use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};

impl PointQuery for BoundingSphere {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        PointProjection::new(self.contains_local_point(pt), self.closest_point(pt))
    }

    #[inline]
    fn distance_squared_to_point(&self, pt: &Point<Real>) -> Real {
        let dist = (na::distance(&self.center, pt) - self.radius).max(0.0);
        dist * dist
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.contains_local_point(pt)
    }
}
