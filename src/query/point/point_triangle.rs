use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::{PointProjection, PointQuery, PointQueryWithLocation};
use crate::shape::{SegmentPointLocation, Triangle, TrianglePointLocation};

#[inline]
fn compute_result(pt: &Point<Real>, proj: Point<Real>) -> PointProjection {
    let inside = na::distance_squared(pt, &proj) <= DEFAULT_EPSILON * DEFAULT_EPSILON;
    PointProjection::new(inside, proj)
}

impl PointQuery for Triangle {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        self.project_point_and_get_location(pt).0
    }
}

impl PointQueryWithLocation for Triangle {
    type Location = TrianglePointLocation;

    fn project_point_and_get_location(&self, pt: &Point<Real>) -> (PointProjection, Self::Location) {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let ab_ap = ab.dot(&ap);
        let ac_ap = ac.dot(&ap);

        if ab_ap <= 0.0 && ac_ap <= 0.0 {
            // Voronoï region of `a`.
            return (compute_result(pt, a), TrianglePointLocation::OnVertex(0));
        }

        let bp = pt - b;
        let ab_bp = ab.dot(&bp);
        let ac_bp = ac.dot(&bp);

        if ab_bp >= 0.0 && ac_bp <= ab_bp {
            // Voronoï region of `b`.
            return (compute_result(pt, b), TrianglePointLocation::OnVertex(1));
        }

        let cp = pt - c;
        let ab_cp = ab.dot(&cp);
        let ac_cp = ac.dot(&cp);

        if ac_cp >= 0.0 && ab_cp <= ac_cp {
            // Voronoï region of `c`.
            return (compute_result(pt, c), TrianglePointLocation::OnVertex(2));
        }

        // Explicit cross products are more numerically stable than the
        // usual dot-product formulation of the edge Voronoï tests.
        let bc = c - b;
        let n = ab.cross(&ac);

        let vc = n.dot(&ab.cross(&ap));
        if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
            // Voronoï region of `ab`.
            let v = ab_ap / ab.norm_squared();
            return (
                compute_result(pt, a + ab * v),
                TrianglePointLocation::OnEdge(0, [1.0 - v, v]),
            );
        }

        let vb = -n.dot(&ac.cross(&cp));
        if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
            // Voronoï region of `ac`.
            let w = ac_ap / ac.norm_squared();
            return (
                compute_result(pt, a + ac * w),
                TrianglePointLocation::OnEdge(2, [1.0 - w, w]),
            );
        }

        let va = n.dot(&bc.cross(&bp));
        if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
            // Voronoï region of `bc`.
            let w = bc.dot(&bp) / bc.norm_squared();
            return (
                compute_result(pt, b + bc * w),
                TrianglePointLocation::OnEdge(1, [1.0 - w, w]),
            );
        }

        // Voronoï region of the face.
        // The denominator vanishes when the triangle is degenerate.
        let sum = va + vb + vc;
        if sum != 0.0 {
            let v = vb / sum;
            let w = vc / sum;
            return (
                compute_result(pt, a + ab * v + ac * w),
                TrianglePointLocation::OnFace([1.0 - v - w, v, w]),
            );
        }

        project_on_closest_edge(self, pt)
    }
}

/// Projects `pt` on each edge and keeps the closest projection.
///
/// This is the projection on degenerate triangles, which are treated as their
/// three edges.
fn project_on_closest_edge(
    triangle: &Triangle,
    pt: &Point<Real>,
) -> (PointProjection, TrianglePointLocation) {
    let mut best: Option<(Real, PointProjection, TrianglePointLocation)> = None;

    for (i, edge) in triangle.edges().iter().enumerate() {
        let (proj, loc) = edge.project_point_and_get_location(pt);
        let dist = na::distance_squared(pt, &proj.point);

        if best.map(|(best_dist, ..)| dist < best_dist).unwrap_or(true) {
            best = Some((dist, proj, edge_location(i, loc)));
        }
    }

    match best {
        Some((_, proj, loc)) => (proj, loc),
        None => (compute_result(pt, triangle.a), TrianglePointLocation::OnVertex(0)),
    }
}

/// Converts a location on the `i`-th edge, as returned by [`Triangle::edges`], to a
/// location on the triangle.
fn edge_location(i: usize, loc: SegmentPointLocation) -> TrianglePointLocation {
    // The edges are AB, BC and CA: the last one is reversed wrt. the AC
    // convention of `TrianglePointLocation::OnEdge`.
    const EDGE_VERTICES: [[u32; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

    match (i, loc) {
        (_, SegmentPointLocation::OnVertex(v)) => {
            TrianglePointLocation::OnVertex(EDGE_VERTICES[i][v as usize])
        }
        (2, SegmentPointLocation::OnEdge([u, v])) => TrianglePointLocation::OnEdge(2, [v, u]),
        (_, SegmentPointLocation::OnEdge(uv)) => TrianglePointLocation::OnEdge(i as u32, uv),
    }
}
