use crate::shape::{Obb, Plane};

/// Intersection test between an oriented box and a plane.
///
/// Projects the box on the plane normal and checks the result contains the plane.
#[inline]
pub fn intersection_test_obb_plane(obb1: &Obb, plane2: &Plane) -> bool {
    let radius = obb1.axes.tr_mul(&plane2.normal).abs().dot(&obb1.half_extents);
    plane2.signed_distance(&obb1.center).abs() <= radius
}

/// Intersection test between a plane and an oriented box.
#[inline]
pub fn intersection_test_plane_obb(plane1: &Plane, obb2: &Obb) -> bool {
    intersection_test_obb_plane(obb2, plane1)
}
