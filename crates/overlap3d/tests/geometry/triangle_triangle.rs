use super::random::RandomPrimitives;
use overlap3d::query::details::{intersection_test_triangle_triangle, intersection_triangle_triangle};
use overlap3d::query::{PointQuery, TriangleIntersection};
use overlap3d::shape::Triangle;

fn permutations(t: &Triangle) -> [Triangle; 6] {
    [
        Triangle::new(t.a, t.b, t.c),
        Triangle::new(t.b, t.c, t.a),
        Triangle::new(t.c, t.a, t.b),
        Triangle::new(t.a, t.c, t.b),
        Triangle::new(t.c, t.b, t.a),
        Triangle::new(t.b, t.a, t.c),
    ]
}

#[test]
fn triangle_triangle_is_invariant_under_vertex_permutation() {
    let mut gen = RandomPrimitives::new(2024);
    gen.spread = 1.0;
    let mut hits = 0;

    for _ in 0..300 {
        let t1 = gen.triangle();
        let t2 = gen.triangle();
        let expected = intersection_test_triangle_triangle(&t1, &t2);
        hits += expected as usize;

        for p1 in &permutations(&t1) {
            for p2 in &permutations(&t2) {
                assert_eq!(
                    intersection_test_triangle_triangle(p1, p2),
                    expected,
                    "{:?} vs {:?}",
                    p1,
                    p2
                );
            }
        }
    }

    assert!(hits > 0);
}

#[test]
fn intersection_segment_lies_on_both_triangles() {
    let mut gen = RandomPrimitives::new(5);
    gen.spread = 1.0;
    let mut segments = 0;

    for _ in 0..300 {
        let t1 = gen.triangle();
        let t2 = gen.triangle();
        let result = intersection_triangle_triangle(&t1, &t2);

        assert_eq!(result.is_some(), intersection_test_triangle_triangle(&t1, &t2));

        if let Some(TriangleIntersection::Segment(seg)) = result {
            segments += 1;

            for pt in &[seg.a, seg.b, seg.midpoint()] {
                assert!(t1.distance_to_point(pt) <= 1.0e-3, "{:?} not on {:?}", pt, t1);
                assert!(t2.distance_to_point(pt) <= 1.0e-3, "{:?} not on {:?}", pt, t2);
            }
        }
    }

    assert!(segments > 0);
}
