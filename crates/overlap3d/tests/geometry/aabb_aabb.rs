use na::{Point3, Vector3};
use overlap3d::bounding_volume::Aabb;
use overlap3d::math::Real;
use overlap3d::query::details::intersection_test_aabb_aabb;

#[test]
fn aabb_aabb_against_unit_box() {
    let unit_box = Aabb::new(Point3::origin(), Vector3::repeat(0.5));

    // (expected, center, size)
    let cases: [(bool, [Real; 3], [Real; 3]); 6] = [
        (true, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
        (true, [0.0, 0.0, 0.0], [0.5, 0.5, 0.5]),
        (true, [0.34, 0.236, 0.224], [0.5, 0.5, 0.5]),
        (false, [1.0, 0.0, 0.0], [0.5, 0.5, 0.5]),
        (false, [1.0, 0.6, 0.7], [0.5, 0.5, 0.5]),
        (false, [0.0, 1.0, 0.0], [10.0, 0.5, 10.0]),
    ];

    for (expected, center, size) in cases {
        let other = Aabb::new(Point3::from(center), Vector3::from(size) / 2.0);
        assert_eq!(
            intersection_test_aabb_aabb(&unit_box, &other),
            expected,
            "{:?}",
            other
        );
        assert_eq!(intersection_test_aabb_aabb(&other, &unit_box), expected);
    }
}
