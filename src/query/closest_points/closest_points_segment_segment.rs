use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::{Segment, SegmentPointLocation};

/// Closest points between two segments.
///
/// The first point lies on `seg1`, the second on `seg2`.
#[inline]
pub fn closest_points_segment_segment(seg1: &Segment, seg2: &Segment) -> (Point<Real>, Point<Real>) {
    let (loc1, loc2) = closest_points_segment_segment_with_locations(seg1, seg2);
    (point_at_location(seg1, &loc1), point_at_location(seg2, &loc2))
}

/// Locations of the closest points between two segments.
#[inline]
pub fn closest_points_segment_segment_with_locations(
    seg1: &Segment,
    seg2: &Segment,
) -> (SegmentPointLocation, SegmentPointLocation) {
    // Inspired by Real-time collision detection by Christer Ericson.
    let d1 = seg1.b - seg1.a;
    let d2 = seg2.b - seg2.a;
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let _eps = DEFAULT_EPSILON;
    if a <= _eps && e <= _eps {
        s = 0.0;
        t = 0.0;
    } else if a <= _eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= _eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > _eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (location(s), location(t))
}

/// The squared distance between two segments.
#[inline]
pub fn distance_squared_segment_segment(seg1: &Segment, seg2: &Segment) -> Real {
    let (p1, p2) = closest_points_segment_segment(seg1, seg2);
    na::distance_squared(&p1, &p2)
}

#[inline]
fn location(s: Real) -> SegmentPointLocation {
    if s == 0.0 {
        SegmentPointLocation::OnVertex(0)
    } else if s == 1.0 {
        SegmentPointLocation::OnVertex(1)
    } else {
        SegmentPointLocation::OnEdge([1.0 - s, s])
    }
}

#[inline]
fn point_at_location(seg: &Segment, loc: &SegmentPointLocation) -> Point<Real> {
    match *loc {
        SegmentPointLocation::OnVertex(0) => seg.a,
        SegmentPointLocation::OnVertex(_) => seg.b,
        SegmentPointLocation::OnEdge([_, s]) => seg.point_at(s),
    }
}
