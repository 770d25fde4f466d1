use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::intersection_test::intersection_test_segment_segment;
use crate::shape::{Plane, Segment, Triangle};
use crate::utils;

/// Intersection test between a segment and a triangle.
///
/// If the segment crosses the plane of the triangle, the crossing point is tested against the
/// triangle. If the segment lies on that plane, both are projected on the coordinate plane
/// most parallel to the triangle and tested in 2D. A degenerate triangle is tested as the
/// union of its edges.
pub fn intersection_test_segment_triangle(segment1: &Segment, triangle2: &Triangle) -> bool {
    let plane = match supporting_plane(triangle2) {
        Some(plane) => plane,
        None => {
            return triangle2
                .edges()
                .iter()
                .any(|edge| intersection_test_segment_segment(segment1, edge))
        }
    };

    let da = snapped_distance(&plane, &segment1.a);
    let db = snapped_distance(&plane, &segment1.b);

    if da * db > 0.0 {
        return false;
    }

    if da == 0.0 && db == 0.0 {
        return coplanar_segment_triangle(segment1, triangle2, &plane);
    }

    let crossing = segment1.point_at(da / (da - db));

    match triangle2.barycentric(&crossing) {
        Some(bcoords) => bcoords.iter().all(|c| *c >= -DEFAULT_EPSILON),
        None => false,
    }
}

/// Intersection test between a triangle and a segment.
#[inline]
pub fn intersection_test_triangle_segment(triangle1: &Triangle, segment2: &Segment) -> bool {
    intersection_test_segment_triangle(segment2, triangle1)
}

/// The plane of `triangle`, or `None` if the triangle is degenerate.
pub(crate) fn supporting_plane(triangle: &Triangle) -> Option<Plane> {
    if triangle.is_degenerate() {
        None
    } else {
        triangle.plane()
    }
}

/// The signed distance from `pt` to `plane`, set to zero if smaller than [`DEFAULT_EPSILON`].
#[inline]
pub(crate) fn snapped_distance(plane: &Plane, pt: &Point<Real>) -> Real {
    let dist = plane.signed_distance(pt);

    if dist.abs() <= DEFAULT_EPSILON {
        0.0
    } else {
        dist
    }
}

fn coplanar_segment_triangle(segment: &Segment, triangle: &Triangle, plane: &Plane) -> bool {
    let axes = utils::dominant_plane_axes(&plane.normal);
    let a = utils::project2d(&segment.a, axes);
    let b = utils::project2d(&segment.b, axes);
    let [v1, v2, v3] = triangle.vertices().map(|v| utils::project2d(&v, axes));

    utils::is_point_in_triangle2d(&a, &v1, &v2, &v3)
        || utils::is_point_in_triangle2d(&b, &v1, &v2, &v3)
        || utils::segments_intersect2d(&a, &b, &v1, &v2)
        || utils::segments_intersect2d(&a, &b, &v2, &v3)
        || utils::segments_intersect2d(&a, &b, &v3, &v1)
}
