use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::query::sat::{self, CoordAxis, SatTester};
use crate::shape::Obb;

/// Finds an axis separating an AABB and an oriented box, if any.
///
/// The AABB face normals are tested first, against the raw AABB bounds and without
/// building the AABB corners. Only if none of them separates are the OBB face normals
/// tested, followed by the nine edge cross products. Near-zero cross products
/// (parallel edges) are skipped.
///
/// Returns `None` if the boxes intersect (touching counts as intersecting).
pub fn aabb_obb_find_separating_axis(aabb: &Aabb, obb: &Obb) -> Option<Vector<Real>> {
    let obb_corners = obb.vertices();
    let mins = aabb.mins();
    let maxs = aabb.maxs();

    for axis in CoordAxis::ALL {
        let i = axis.index();
        if !SatTester::on_axis(axis, &obb_corners).overlaps_range(mins[i], maxs[i]) {
            return Some(axis.to_vector());
        }
    }

    let aabb_corners = aabb.vertices();
    let separates = |axis: &Vector<Real>| {
        !SatTester::new(axis, &aabb_corners).overlaps(&SatTester::new(axis, &obb_corners))
    };

    for i in 0..3 {
        let axis = obb.axis(i);
        if separates(&axis) {
            return Some(axis);
        }
    }

    for i in 0..3 {
        let obb_axis = obb.axis(i);

        for basis in CoordAxis::ALL {
            let axis = obb_axis.cross(&basis.to_vector());
            if !sat::is_degenerate_axis(&axis, obb_axis.norm_squared()) && separates(&axis) {
                return Some(axis);
            }
        }
    }

    None
}

/// Finds an axis separating two oriented boxes, if any.
///
/// Tests the three face normals of each box, then the nine cross products of their
/// axes. Near-zero cross products (parallel edges) are skipped.
///
/// Returns `None` if the boxes intersect (touching counts as intersecting).
pub fn obb_obb_find_separating_axis(obb1: &Obb, obb2: &Obb) -> Option<Vector<Real>> {
    let separates = |axis: &Vector<Real>| {
        let (min1, max1) = obb_projection_range(obb1, axis);
        let (min2, max2) = obb_projection_range(obb2, axis);
        max1 < min2 || max2 < min1
    };

    for i in 0..3 {
        let axis1 = obb1.axis(i);
        if separates(&axis1) {
            return Some(axis1);
        }

        let axis2 = obb2.axis(i);
        if separates(&axis2) {
            return Some(axis2);
        }
    }

    for i in 0..3 {
        let axis1 = obb1.axis(i);

        for j in 0..3 {
            let axis2 = obb2.axis(j);
            let axis = axis1.cross(&axis2);
            let scale = axis1.norm_squared() * axis2.norm_squared();

            if !sat::is_degenerate_axis(&axis, scale) && separates(&axis) {
                return Some(axis);
            }
        }
    }

    None
}

/// The range of the projections of an oriented box on `axis`.
///
/// This is `axis · center ± Σ e_i |axis · u_i|` where the `u_i` are the box axes.
#[inline]
pub fn obb_projection_range(obb: &Obb, axis: &Vector<Real>) -> (Real, Real) {
    let c = axis.dot(&obb.center.coords);
    let r = obb.axes.tr_mul(axis).abs().dot(&obb.half_extents);
    (c - r, c + r)
}
