use na::{Point3, Vector3};
use overlap3d::bounding_volume::Aabb;
use overlap3d::math::Real;
use overlap3d::query::details::{intersection_test_aabb_triangle, intersection_test_obb_triangle};
use overlap3d::shape::{Obb, Triangle};

fn triangle(coords: [Real; 9]) -> Triangle {
    Triangle::new(
        Point3::new(coords[0], coords[1], coords[2]),
        Point3::new(coords[3], coords[4], coords[5]),
        Point3::new(coords[6], coords[7], coords[8]),
    )
}

fn check(aabb: &Aabb, expected: bool, coords: [Real; 9]) {
    let tri = triangle(coords);

    assert_eq!(
        intersection_test_aabb_triangle(aabb, &tri),
        expected,
        "{:?} vs {:?}",
        aabb,
        tri
    );
    // An axis-aligned oriented box must give the same answer.
    assert_eq!(
        intersection_test_obb_triangle(&Obb::from_aabb(aabb), &tri),
        expected,
        "{:?} vs {:?}",
        aabb,
        tri
    );
}

#[test]
fn aabb_triangle_against_unit_box() {
    let unit_box = Aabb::new(Point3::origin(), Vector3::repeat(0.5));

    check(&unit_box, true, [-2.0, 0.0, 2.0, 2.0, 0.0, 2.0, -2.0, 0.0, -2.0]);
    check(&unit_box, true, [-3.0, -1.0, 1.0, 0.0, -1.0, 3.0, 0.0, 1.0, 0.0]);
    check(&unit_box, true, [0.3, 0.4, 0.8, 0.8, 0.4, 0.3, 0.3, 0.6, 0.3]);
    check(&unit_box, true, [0.0, 0.0, 0.4, 0.4, 0.0, 0.0, 0.0, 0.0, 0.0]);
    check(&unit_box, true, [0.0, 7.0, -0.403, 3.0, -2.5, -0.538, -3.0, -2.5, -0.538]);

    check(&unit_box, false, [0.0, 7.0, -0.403, 3.0, -2.5, -0.547, -3.0, -2.5, -0.547]);
    check(&unit_box, false, [-3.0, -1.0, 1.0, 0.0, -1.0, 3.0, 0.0, 1.162, 0.0]);
    check(&unit_box, false, [-1.0, 0.0, 1.0, 1.0, 0.0, 1.0, -1.0, 2.5, -1.0]);
    check(&unit_box, false, [-2.0, 2.0, 2.0, 2.0, 2.0, 2.0, -2.0, 2.0, -2.0]);
}

#[test]
fn aabb_triangle_near_misses() {
    let unit_box = Aabb::new(Point3::origin(), Vector3::repeat(0.5));

    check(
        &unit_box,
        true,
        [0.24255, 6.58204, 3.75181, -0.50413, 0.43569, -0.54796, -3.0, -2.5, -0.3754],
    );
    check(
        &unit_box,
        true,
        [0.24255, 6.58204, 3.75181, -0.50482, 0.43583, -0.54797, -3.0, -2.5, -0.3754],
    );
    check(
        &unit_box,
        false,
        [0.24255, 6.58204, 3.75181, -0.50633, 0.43583, -0.54797, -3.0, -2.5, -0.3754],
    );
}

#[test]
fn aabb_triangle_against_tall_box() {
    let tall_box = Aabb::new(Point3::origin(), Vector3::new(0.1, 50.0, 0.5));
    check(&tall_box, true, [0.0, 7.0, 70.0, 2.0, -2.0, -60.0, -2.0, -2.0, -60.0]);
}
