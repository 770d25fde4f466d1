use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use num::Zero;

impl PointQuery for Aabb {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let mins_pt = self.mins() - pt;
        let pt_maxs = pt - self.maxs();
        let shift = mins_pt.sup(&na::zero()) - pt_maxs.sup(&na::zero());

        PointProjection::new(shift.is_zero(), pt + shift)
    }

    #[inline]
    fn distance_squared_to_point(&self, pt: &Point<Real>) -> Real {
        self.distance_squared_to_local_point(pt)
    }

    #[inline]
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.contains_local_point(pt)
    }
}
