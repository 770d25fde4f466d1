use na::{Point3, Vector3};
use overlap3d::bounding_volume::{Aabb, BoundingSphere};
use overlap3d::query::{intersection_test, Ray};
use overlap3d::shape::{Plane, Primitive, Segment, Triangle};

fn unit_aabb() -> Primitive {
    Aabb::new(Point3::origin(), Vector3::repeat(1.0)).into()
}

#[test]
fn aabb_and_distant_sphere() {
    let sphere = BoundingSphere::new(Point3::new(3.0, 0.0, 0.0), 1.0).into();
    assert_eq!(intersection_test(&unit_aabb(), &sphere), Ok(false));
}

#[test]
fn aabb_and_tangent_sphere() {
    let sphere = BoundingSphere::new(Point3::new(2.0, 0.0, 0.0), 1.0).into();
    assert_eq!(intersection_test(&unit_aabb(), &sphere), Ok(true));
}

#[test]
fn plane_and_crossing_segment() {
    let plane = Plane::new(Vector3::y(), 0.0).into();
    let segment = Segment::new(Point3::new(0.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0)).into();
    assert_eq!(intersection_test(&plane, &segment), Ok(true));
}

#[test]
fn triangle_against_itself() {
    let tri: Primitive = Triangle::new(
        Point3::origin(),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    )
    .into();
    assert_eq!(intersection_test(&tri, &tri), Ok(true));
}

#[test]
fn coplanar_nested_triangles() {
    let outer: Primitive = Triangle::new(
        Point3::origin(),
        Point3::new(4.0, 0.0, 0.0),
        Point3::new(0.0, 4.0, 0.0),
    )
    .into();
    let inner: Primitive = Triangle::new(
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
    )
    .into();

    assert_eq!(intersection_test(&outer, &inner), Ok(true));
    assert_eq!(intersection_test(&inner, &outer), Ok(true));
}

#[test]
fn ray_hitting_plane() {
    let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::z());
    let plane = Plane::new(Vector3::z(), 0.0);
    let hit = ray.hits(&plane).expect("The ray should hit the plane.");

    assert_relative_eq!(hit.time_of_impact, 5.0);
    assert_relative_eq!(ray.point_at(hit.time_of_impact), Point3::origin());
    assert_eq!(intersection_test(&ray.into(), &plane.into()), Ok(true));
}
