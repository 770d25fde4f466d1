use crate::query::sat;
use crate::shape::Obb;

/// Intersection test between two oriented boxes.
///
/// Tests the 15 candidate separating axes: the 3 face normals of each box and the 9 cross
/// products of their axes.
#[inline]
pub fn intersection_test_obb_obb(obb1: &Obb, obb2: &Obb) -> bool {
    sat::obb_obb_find_separating_axis(obb1, obb2).is_none()
}
