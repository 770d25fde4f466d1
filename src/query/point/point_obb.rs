use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery};
use crate::shape::Obb;

impl PointQuery for Obb {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        let local = self.local_point(pt);
        let inside = local
            .iter()
            .zip(self.half_extents.iter())
            .all(|(x, e)| x.abs() <= *e);

        if inside {
            PointProjection::new(true, *pt)
        } else {
            PointProjection::new(false, self.closest_point(pt))
        }
    }
}
