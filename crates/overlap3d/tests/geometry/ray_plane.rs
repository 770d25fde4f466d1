use na::{Point3, Vector3};
use overlap3d::math::Real;
use overlap3d::query::{Ray, RayCast};
use overlap3d::shape::Plane;

#[test]
fn ray_plane_sweep() {
    let plane = Plane::from_point_normal(&Point3::new(0.0, 0.0, 1.0), &Vector3::z());
    let origin = Point3::new(0.5, -0.5, -2.0);

    // Sweep the ray direction from pointing at the plane to pointing away from it.
    for i in 0..=36 {
        let angle = (i as Real) * std::f64::consts::PI as Real / 36.0;
        let dir = Vector3::new(angle.sin(), 0.0, angle.cos());
        let ray = Ray::new(origin, dir);

        match ray.hits(&plane) {
            Some(hit) => {
                assert!(dir.z > 0.0, "Unexpected hit for {:?}", ray);
                assert_relative_eq!(hit.time_of_impact, 3.0 / dir.z, max_relative = 1.0e-4);
                assert_relative_eq!(
                    plane.signed_distance(&ray.point_at(hit.time_of_impact)),
                    0.0,
                    epsilon = 1.0e-3
                );
                // The normal faces the ray.
                assert!(hit.normal.dot(&dir) <= 0.0);
            }
            None => assert!(dir.z <= 1.0e-5, "Missed hit for {:?}", ray),
        }
    }
}

#[test]
fn ray_plane_boundaries() {
    let plane = Plane::xy();

    let on_plane = Ray::new(Point3::new(3.0, 2.0, 0.0), Vector3::new(0.0, 1.0, 1.0));
    let hit = on_plane.hits(&plane).expect("A ray starting on the plane hits it.");
    assert_eq!(hit.time_of_impact, 0.0);

    let parallel = Ray::new(Point3::new(3.0, 2.0, 1.0), Vector3::x());
    assert!(parallel.hits(&plane).is_none());

    let far = Ray::new(Point3::new(0.0, 0.0, 10.0), -Vector3::z());
    assert!(far.hits(&plane).is_some());
    assert!(plane.cast_ray(&far, 9.0).is_none());
    assert_eq!(plane.cast_ray_toi(&far, 10.0), Some(10.0));
}
