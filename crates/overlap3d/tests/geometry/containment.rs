use super::random::RandomPrimitives;
use overlap3d::bounding_volume::{Aabb, BoundingSphere};
use overlap3d::math::DEFAULT_EPSILON;
use overlap3d::query::details::*;
use overlap3d::shape::{Obb, Segment, Triangle};

struct Inner {
    aabb: Aabb,
    sphere: BoundingSphere,
    obb: Obb,
    segment: Segment,
    triangle: Triangle,
}

fn small_primitives(gen: &mut RandomPrimitives) -> Inner {
    gen.spread = 0.6;
    gen.max_size = 0.4;

    Inner {
        aabb: gen.aabb(),
        sphere: gen.bounding_sphere(),
        obb: gen.obb(),
        segment: gen.segment(),
        triangle: gen.triangle(),
    }
}

fn large_primitives(gen: &mut RandomPrimitives) -> (Aabb, BoundingSphere, Obb) {
    gen.spread = 0.3;
    gen.max_size = 2.0;
    (gen.aabb(), gen.bounding_sphere(), gen.obb())
}

/// Asserts that a containment implies an intersection, and returns the containment.
fn check(contains: bool, intersects: bool, what: &str) -> usize {
    assert!(!contains || intersects, "{} is contained but does not intersect", what);
    contains as usize
}

#[test]
fn containment_implies_intersection() {
    let mut gen = RandomPrimitives::new(1234);
    let mut contained = 0;

    for _ in 0..500 {
        let (aabb, sphere, obb) = large_primitives(&mut gen);
        let inner = small_primitives(&mut gen);

        contained += check(
            containment_test_aabb_aabb(&aabb, &inner.aabb),
            intersection_test_aabb_aabb(&aabb, &inner.aabb),
            "aabb in aabb",
        );
        contained += check(
            containment_test_aabb_bounding_sphere(&aabb, &inner.sphere),
            intersection_test_aabb_bounding_sphere(&aabb, &inner.sphere),
            "sphere in aabb",
        );
        contained += check(
            containment_test_aabb_obb(&aabb, &inner.obb),
            intersection_test_aabb_obb(&aabb, &inner.obb),
            "obb in aabb",
        );
        contained += check(
            containment_test_aabb_segment(&aabb, &inner.segment),
            intersection_test_aabb_segment(&aabb, &inner.segment),
            "segment in aabb",
        );
        contained += check(
            containment_test_aabb_triangle(&aabb, &inner.triangle),
            intersection_test_aabb_triangle(&aabb, &inner.triangle),
            "triangle in aabb",
        );

        contained += check(
            containment_test_bounding_sphere_aabb(&sphere, &inner.aabb),
            intersection_test_bounding_sphere_aabb(&sphere, &inner.aabb),
            "aabb in sphere",
        );
        contained += check(
            containment_test_bounding_sphere_bounding_sphere(&sphere, &inner.sphere),
            intersection_test_bounding_sphere_bounding_sphere(&sphere, &inner.sphere),
            "sphere in sphere",
        );
        contained += check(
            containment_test_bounding_sphere_obb(&sphere, &inner.obb),
            intersection_test_bounding_sphere_obb(&sphere, &inner.obb),
            "obb in sphere",
        );
        contained += check(
            containment_test_bounding_sphere_segment(&sphere, &inner.segment),
            intersection_test_bounding_sphere_segment(&sphere, &inner.segment),
            "segment in sphere",
        );
        contained += check(
            containment_test_bounding_sphere_triangle(&sphere, &inner.triangle),
            intersection_test_bounding_sphere_triangle(&sphere, &inner.triangle),
            "triangle in sphere",
        );

        contained += check(
            containment_test_obb_aabb(&obb, &inner.aabb),
            intersection_test_obb_aabb(&obb, &inner.aabb),
            "aabb in obb",
        );
        contained += check(
            containment_test_obb_bounding_sphere(&obb, &inner.sphere),
            intersection_test_obb_bounding_sphere(&obb, &inner.sphere),
            "sphere in obb",
        );
        contained += check(
            containment_test_obb_obb(&obb, &inner.obb),
            intersection_test_obb_obb(&obb, &inner.obb),
            "obb in obb",
        );
        contained += check(
            containment_test_obb_segment(&obb, &inner.segment),
            intersection_test_obb_segment(&obb, &inner.segment),
            "segment in obb",
        );
        contained += check(
            containment_test_obb_triangle(&obb, &inner.triangle),
            intersection_test_obb_triangle(&obb, &inner.triangle),
            "triangle in obb",
        );
    }

    assert!(contained > 100);
}

#[test]
fn triangle_containing_segment_intersects_it() {
    let mut gen = RandomPrimitives::new(99);

    for _ in 0..200 {
        let tri = gen.triangle();
        if tri.area() < 0.1 {
            continue;
        }

        let [u, v] = [gen.scalar(0.0, 1.0), gen.scalar(0.0, 1.0)];
        let (u, v) = if u + v > 1.0 { (1.0 - u, 1.0 - v) } else { (u, v) };
        let start = tri.a + (tri.b - tri.a) * u + (tri.c - tri.a) * v;
        let segment = Segment::new(start, tri.center());

        if containment_test_triangle_segment(&tri, &segment, DEFAULT_EPSILON * 10.0) {
            assert!(intersection_test_segment_triangle(&segment, &tri));
        }
    }
}
