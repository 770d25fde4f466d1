use crate::math::DEFAULT_EPSILON;
use crate::shape::Plane;

/// Intersection test between two planes.
///
/// Two planes intersect unless they are parallel and distinct. Parallel planes are compared
/// after normalization, so planes given with normals of different lengths or opposite
/// orientations are still recognized as identical.
pub fn intersection_test_plane_plane(plane1: &Plane, plane2: &Plane) -> bool {
    let cross = plane1.normal.cross(&plane2.normal);
    let scale = plane1.normal.norm_squared() * plane2.normal.norm_squared();

    if cross.norm_squared() > DEFAULT_EPSILON * DEFAULT_EPSILON * scale {
        return true;
    }

    let p1 = plane1.normalized();
    let mut p2 = plane2.normalized();

    if p1.normal.dot(&p2.normal) < 0.0 {
        p2 = p2.flipped();
    }

    (p1.d - p2.d).abs() <= DEFAULT_EPSILON
}
