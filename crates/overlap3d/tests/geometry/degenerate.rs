use na::{Matrix3, Point3, Rotation3, Vector3};
use overlap3d::bounding_volume::{Aabb, BoundingSphere};
use overlap3d::math::Real;
use overlap3d::query::{intersection_test, Ray};
use overlap3d::shape::{Obb, Plane, Primitive, Segment, Triangle};

fn points_at(p: Point3<Real>) -> Vec<Primitive> {
    let rot = Rotation3::from_axis_angle(&Vector3::y_axis(), 0.7).into_inner();

    vec![
        Aabb::new(p, Vector3::zeros()).into(),
        BoundingSphere::new(p, 0.0).into(),
        Obb::new(p, Vector3::zeros(), Matrix3::identity()).into(),
        Obb::new(p, Vector3::zeros(), rot).into(),
        Segment::new(p, p).into(),
        Triangle::new(p, p, p).into(),
    ]
}

#[test]
fn zero_sized_primitives_at_the_same_point_intersect() {
    for p in [
        Point3::origin(),
        Point3::new(1.5, -2.0, 0.25),
        Point3::new(-100.0, 30.0, 7.0),
    ] {
        let prims = points_at(p);

        for p1 in &prims {
            for p2 in &prims {
                assert_eq!(intersection_test(p1, p2), Ok(true), "{:?} vs {:?}", p1, p2);
            }
        }

        let plane: Primitive = Plane::from_point_normal(&p, &Vector3::new(1.0, 2.0, -1.0)).into();
        for prim in &prims {
            assert_eq!(intersection_test(prim, &plane), Ok(true), "{:?}", prim);
        }

        let ray: Primitive = Ray::new(p, Vector3::new(0.3, 0.0, 1.0)).into();
        assert_eq!(intersection_test(&ray, &plane), Ok(true));
    }
}

#[test]
fn zero_sized_primitives_at_distinct_points_do_not_intersect() {
    let a = points_at(Point3::origin());
    let b = points_at(Point3::new(0.0, 0.1, 0.0));

    for p1 in &a {
        for p2 in &b {
            assert_eq!(intersection_test(p1, p2), Ok(false), "{:?} vs {:?}", p1, p2);
        }
    }
}

#[test]
fn degenerate_triangle_is_never_hit_by_rays() {
    let p = Point3::new(1.0, 1.0, 1.0);
    let needle = Triangle::new(p, Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0));
    let ray = Ray::new(Point3::new(2.0, 2.0, -5.0), Vector3::z());

    assert!(ray.hits(&needle).is_none());
    assert!(ray.hits(&Triangle::new(p, p, p)).is_none());
}

#[test]
fn zero_direction_ray_is_invalid() {
    let ray: Primitive = Ray::new(Point3::origin(), Vector3::zeros()).into();
    assert!(ray.validate().is_err());
    assert_eq!(intersection_test(&ray, &Plane::xy().into()), Ok(false));
}
