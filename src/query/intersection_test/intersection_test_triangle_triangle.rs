use super::intersection_test_segment_triangle::{snapped_distance, supporting_plane};
use crate::math::{Point, Real, Vector};
use crate::query::intersection_test::intersection_test_segment_triangle;
use crate::shape::{Plane, Segment, Triangle};
use crate::utils;

/// The intersection of two triangles, as computed by [`intersection_triangle_triangle`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum TriangleIntersection {
    /// The triangles cross each other along this segment.
    ///
    /// Both endpoints are equal if the triangles only touch at one point.
    Segment(Segment),
    /// The triangles lie on the same plane and overlap.
    ///
    /// This is also reported when one of the triangles is degenerate.
    Coplanar,
}

/// A pair of crossing points, sorted by their projection on the intersection line of two
/// triangle planes.
type Interval = [(Real, Point<Real>); 2];

enum PlaneCrossing {
    Disjoint,
    Coplanar,
    Intervals(Interval, Interval),
}

/// Intersection test between two triangles.
///
/// Non-coplanar triangles are tested with the interval overlap method of Tomas Möller: each
/// triangle crosses the plane of the other along a segment, and both segments lie on the
/// intersection line of the planes. The triangles intersect iff these segments overlap.
///
/// Coplanar triangles are projected on the coordinate plane most parallel to them and intersect
/// iff one of their edges cross, or one contains a vertex of the other. Degenerate triangles are
/// tested as the union of their edges.
pub fn intersection_test_triangle_triangle(triangle1: &Triangle, triangle2: &Triangle) -> bool {
    let (plane1, plane2) = match (supporting_plane(triangle1), supporting_plane(triangle2)) {
        (Some(plane1), Some(plane2)) => (plane1, plane2),
        _ => return degenerate_triangle_triangle(triangle1, triangle2),
    };

    match plane_crossing(triangle1, triangle2, &plane1, &plane2) {
        PlaneCrossing::Disjoint => false,
        PlaneCrossing::Coplanar => coplanar_triangle_triangle(triangle1, triangle2, &plane1),
        PlaneCrossing::Intervals(i1, i2) => i1[0].0 <= i2[1].0 && i2[0].0 <= i1[1].0,
    }
}

/// Computes the intersection between two triangles.
///
/// Returns `None` if the triangles do not intersect, a segment if they cross each other, and
/// [`TriangleIntersection::Coplanar`] if they overlap on the same plane. This agrees with
/// [`intersection_test_triangle_triangle`].
pub fn intersection_triangle_triangle(
    triangle1: &Triangle,
    triangle2: &Triangle,
) -> Option<TriangleIntersection> {
    let (plane1, plane2) = match (supporting_plane(triangle1), supporting_plane(triangle2)) {
        (Some(plane1), Some(plane2)) => (plane1, plane2),
        _ => {
            return degenerate_triangle_triangle(triangle1, triangle2)
                .then_some(TriangleIntersection::Coplanar)
        }
    };

    match plane_crossing(triangle1, triangle2, &plane1, &plane2) {
        PlaneCrossing::Disjoint => None,
        PlaneCrossing::Coplanar => coplanar_triangle_triangle(triangle1, triangle2, &plane1)
            .then_some(TriangleIntersection::Coplanar),
        PlaneCrossing::Intervals(i1, i2) => {
            if i1[0].0 > i2[1].0 || i2[0].0 > i1[1].0 {
                return None;
            }

            let start = if i1[0].0 >= i2[0].0 { i1[0].1 } else { i2[0].1 };
            let end = if i1[1].0 <= i2[1].0 { i1[1].1 } else { i2[1].1 };
            Some(TriangleIntersection::Segment(Segment::new(start, end)))
        }
    }
}

fn plane_crossing(
    triangle1: &Triangle,
    triangle2: &Triangle,
    plane1: &Plane,
    plane2: &Plane,
) -> PlaneCrossing {
    let dists1 = triangle1.vertices().map(|v| snapped_distance(plane2, &v));
    if on_one_side(dists1) {
        return PlaneCrossing::Disjoint;
    }

    let dists2 = triangle2.vertices().map(|v| snapped_distance(plane1, &v));
    if on_one_side(dists2) {
        return PlaneCrossing::Disjoint;
    }

    let dir = plane1.normal.cross(&plane2.normal);

    match (
        crossing_interval(triangle1, dists1, &dir),
        crossing_interval(triangle2, dists2, &dir),
    ) {
        (Some(i1), Some(i2)) => PlaneCrossing::Intervals(i1, i2),
        _ => PlaneCrossing::Coplanar,
    }
}

#[inline]
fn on_one_side(dists: [Real; 3]) -> bool {
    dists.iter().all(|d| *d > 0.0) || dists.iter().all(|d| *d < 0.0)
}

/// The segment along which `triangle` crosses a plane, given the signed distances of its
/// vertices to that plane.
///
/// Returns `None` if all the vertices lie on the plane.
fn crossing_interval(triangle: &Triangle, dists: [Real; 3], dir: &Vector<Real>) -> Option<Interval> {
    let [d0, d1, d2] = dists;

    // `lone` is a vertex alone on its side of the plane, or on the plane.
    let (lone, j, k) = if d0 * d1 > 0.0 {
        (2, 0, 1)
    } else if d0 * d2 > 0.0 {
        (1, 0, 2)
    } else if d1 * d2 > 0.0 || d0 != 0.0 {
        (0, 1, 2)
    } else if d1 != 0.0 {
        (1, 0, 2)
    } else if d2 != 0.0 {
        (2, 0, 1)
    } else {
        return None;
    };

    let vtx = triangle.vertices();
    let along = |other: usize| {
        let t = dists[lone] / (dists[lone] - dists[other]);
        let pt = vtx[lone] + (vtx[other] - vtx[lone]) * t;
        (dir.dot(&pt.coords), pt)
    };

    let (p, q) = (along(j), along(k));
    Some(if p.0 <= q.0 { [p, q] } else { [q, p] })
}

fn coplanar_triangle_triangle(triangle1: &Triangle, triangle2: &Triangle, plane: &Plane) -> bool {
    log::trace!("Testing coplanar triangles {:?} and {:?}.", triangle1, triangle2);

    let axes = utils::dominant_plane_axes(&plane.normal);
    let p = triangle1.vertices().map(|v| utils::project2d(&v, axes));
    let q = triangle2.vertices().map(|v| utils::project2d(&v, axes));

    for i in 0..3 {
        for j in 0..3 {
            if utils::segments_intersect2d(&p[i], &p[(i + 1) % 3], &q[j], &q[(j + 1) % 3]) {
                return true;
            }
        }
    }

    utils::is_point_in_triangle2d(&p[0], &q[0], &q[1], &q[2])
        || utils::is_point_in_triangle2d(&q[0], &p[0], &p[1], &p[2])
}

fn degenerate_triangle_triangle(triangle1: &Triangle, triangle2: &Triangle) -> bool {
    if triangle1.is_degenerate() {
        triangle1
            .edges()
            .iter()
            .any(|edge| intersection_test_segment_triangle(edge, triangle2))
    } else {
        triangle2
            .edges()
            .iter()
            .any(|edge| intersection_test_segment_triangle(edge, triangle1))
    }
}
