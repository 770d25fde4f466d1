use crate::math::{Real, Vector};
use crate::query::sat::{self, SatTester};
use crate::shape::{Obb, Segment};

/// Finds an axis separating an oriented box and a segment, if any.
///
/// Tests the three box axes, then the cross products of the box axes with the
/// segment direction. A segment has no face so nothing else needs to be tested.
///
/// Returns `None` if the shapes intersect (touching counts as intersecting).
pub fn obb_segment_find_separating_axis(obb: &Obb, segment: &Segment) -> Option<Vector<Real>> {
    let pts = segment.vertices();
    let separates = |axis: &Vector<Real>| {
        let (min, max) = sat::obb_projection_range(obb, axis);
        !SatTester::new(axis, &pts).overlaps_range(min, max)
    };

    for i in 0..3 {
        let axis = obb.axis(i);
        if separates(&axis) {
            return Some(axis);
        }
    }

    let dir = segment.scaled_direction();

    for i in 0..3 {
        let obb_axis = obb.axis(i);
        let axis = obb_axis.cross(&dir);
        let scale = obb_axis.norm_squared() * dir.norm_squared();

        if !sat::is_degenerate_axis(&axis, scale) && separates(&axis) {
            return Some(axis);
        }
    }

    None
}
