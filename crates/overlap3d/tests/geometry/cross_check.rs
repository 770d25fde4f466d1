use super::random::RandomPrimitives;
use overlap3d::math::{Point, Real};
use overlap3d::query::details::{
    intersection_test_segment_triangle, intersection_test_triangle_triangle,
};
use overlap3d::query::{Ray, RayCast};
use overlap3d::shape::{Segment, Triangle};

const SCALES: [Real; 4] = [0.01, 0.1, 1.0, 100.0];

/// The triangle scaled by `factor` about its center.
fn scaled(triangle: &Triangle, factor: Real) -> Triangle {
    let c = triangle.center();
    Triangle::new(
        c + (triangle.a - c) * factor,
        c + (triangle.b - c) * factor,
        c + (triangle.c - c) * factor,
    )
}

/// Rejects slivers, for which barycentric coordinates are ill-conditioned.
fn is_well_shaped(triangle: &Triangle) -> bool {
    let ab = triangle.b - triangle.a;
    let ac = triangle.c - triangle.a;
    ab.cross(&ac).norm_squared() > 1.0e-3 * ab.norm_squared() * ac.norm_squared()
}

/// Are all the `pts` farther than `margin` from the plane of `triangle`?
fn clearly_off_plane(triangle: &Triangle, pts: &[Point<Real>], margin: Real) -> bool {
    match triangle.plane() {
        Some(plane) => pts.iter().all(|pt| plane.distance(pt) > margin),
        None => false,
    }
}

fn segment_cast_hits(segment: &Segment, triangle: &Triangle) -> bool {
    let ray = Ray::new(segment.a, segment.b - segment.a);
    triangle.cast_ray(&ray, 1.0).is_some()
}

fn edges_cross(triangle1: &Triangle, triangle2: &Triangle) -> bool {
    triangle1
        .edges()
        .iter()
        .any(|edge| intersection_test_segment_triangle(edge, triangle2))
        || triangle2
            .edges()
            .iter()
            .any(|edge| intersection_test_segment_triangle(edge, triangle1))
}

#[test]
fn segment_triangle_agrees_with_ray_cast() {
    for (i, scale) in SCALES.iter().enumerate() {
        let mut gen = RandomPrimitives::with_scale(100 + i as u64, *scale);
        let (mut hits, mut misses) = (0, 0);

        for _ in 0..2000 {
            let segment = gen.segment();
            let triangle = gen.triangle();

            if !is_well_shaped(&triangle)
                || !clearly_off_plane(&triangle, &[segment.a, segment.b], 2.0e-2 * scale)
            {
                continue;
            }

            let result = intersection_test_segment_triangle(&segment, &triangle);

            if segment_cast_hits(&segment, &scaled(&triangle, 0.999)) {
                assert!(result, "scale {}: {:?} vs {:?}", scale, segment, triangle);
            }

            if result {
                assert!(
                    segment_cast_hits(&segment, &scaled(&triangle, 1.001)),
                    "scale {}: {:?} vs {:?}",
                    scale,
                    segment,
                    triangle
                );
                hits += 1;
            } else {
                misses += 1;
            }
        }

        assert!(hits > 0, "scale {}", scale);
        assert!(misses > 0, "scale {}", scale);
    }
}

#[test]
fn triangle_triangle_agrees_with_edge_crossings() {
    for (i, scale) in SCALES.iter().enumerate() {
        let mut gen = RandomPrimitives::with_scale(200 + i as u64, *scale);
        let (mut hits, mut misses) = (0, 0);

        for _ in 0..2000 {
            let triangle1 = gen.triangle();
            let triangle2 = gen.triangle();
            let margin = 2.0e-2 * scale;

            if !is_well_shaped(&triangle1)
                || !is_well_shaped(&triangle2)
                || !clearly_off_plane(&triangle1, &triangle2.vertices(), margin)
                || !clearly_off_plane(&triangle2, &triangle1.vertices(), margin)
            {
                continue;
            }

            let result = intersection_test_triangle_triangle(&triangle1, &triangle2);

            if edges_cross(&scaled(&triangle1, 0.999), &scaled(&triangle2, 0.999)) {
                assert!(result, "scale {}: {:?} vs {:?}", scale, triangle1, triangle2);
            }

            if result {
                assert!(
                    edges_cross(&scaled(&triangle1, 1.001), &scaled(&triangle2, 1.001)),
                    "scale {}: {:?} vs {:?}",
                    scale,
                    triangle1,
                    triangle2
                );
                hits += 1;
            } else {
                misses += 1;
            }
        }

        assert!(hits > 0, "scale {}", scale);
        assert!(misses > 0, "scale {}", scale);
    }
}

#[test]
fn small_triangles_are_not_degenerate() {
    let mut gen = RandomPrimitives::with_scale(300, 0.01);

    for _ in 0..200 {
        let triangle = gen.triangle();

        if is_well_shaped(&triangle) {
            assert!(!triangle.is_degenerate(), "{:?}", triangle);
            assert!(triangle.plane().is_some());
        }
    }
}
