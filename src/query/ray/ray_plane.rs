use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::Plane;

/// Computes the time of impact of an unbounded line with a plane.
///
/// Returns `None` if the line is parallel to the plane, i.e., if `|normal · dir|` is
/// smaller than [`DEFAULT_EPSILON`]. The result may be negative.
#[inline]
pub fn line_toi_with_plane(plane: &Plane, ray: &Ray) -> Option<Real> {
    let denom = plane.normal.dot(&ray.dir);

    if denom.abs() < DEFAULT_EPSILON {
        None
    } else {
        Some(-plane.signed_distance(&ray.origin) / denom)
    }
}

impl RayCast for Plane {
    #[inline]
    fn cast_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<RayIntersection> {
        let t = line_toi_with_plane(self, ray)?;

        if t >= 0.0 && t <= max_time_of_impact {
            let normal = if self.normal.dot(&ray.dir) > 0.0 {
                -self.normal
            } else {
                self.normal
            };

            Some(RayIntersection::new(t, normal.normalize()))
        } else {
            None
        }
    }
}
