use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::Triangle;

impl RayCast for Triangle {
    #[inline]
    fn cast_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<RayIntersection> {
        let inter = local_ray_intersection_with_triangle(self, ray)?;

        if inter.time_of_impact <= max_time_of_impact {
            Some(inter)
        } else {
            None
        }
    }
}

/// Computes the intersection between a triangle and a ray.
///
/// If an intersection is found, the time of impact, the normal and the barycentric coordinates of
/// the intersection point are returned. Rays parallel to the triangle plane, zero directions and
/// degenerate triangles never hit.
pub fn local_ray_intersection_with_triangle(triangle: &Triangle, ray: &Ray) -> Option<RayIntersection> {
    let a = triangle.a;
    let ab = triangle.b - a;
    let ac = triangle.c - a;

    // normal
    let n = ab.cross(&ac);
    let d = n.dot(&ray.dir);

    // the normal and the ray direction are (nearly) orthogonal
    if d.abs() <= DEFAULT_EPSILON * n.norm() * ray.dir.norm() {
        return None;
    }

    let ap = ray.origin - a;
    let t = ap.dot(&n);

    // the ray does not intersect the halfspace defined by the triangle
    if (t < 0.0 && d < 0.0) || (t > 0.0 && d > 0.0) {
        return None;
    }

    let d = d.abs();

    //
    // intersection: compute barycentric coordinates
    //
    let e = -ray.dir.cross(&ap);

    let mut v;
    let mut w;
    let toi;
    let normal;

    if t < 0.0 {
        v = -ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        let invd = 1.0 / d;
        toi = -t * invd;
        normal = -n.normalize();
        v *= invd;
        w *= invd;
    } else {
        v = ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = -ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        let invd = 1.0 / d;
        toi = t * invd;
        normal = n.normalize();
        v *= invd;
        w *= invd;
    }

    Some(RayIntersection::with_barycentric_coordinates(
        toi,
        normal,
        [-v - w + 1.0, v, w],
    ))
}
