use crate::*;

#[test]
fn ray_sphere_through_center() {
    let sphere = Sphere::new(Point3::new(0f32, 0.075, 0.4), 0.075);

    // straight through the center, from above
    let ray = Ray::from_points(Point3::new(0f32, 2f32, 0.4), Point3::new(0f32, -2f32, 0.4));
    assert!(intersects(sphere, ray));

    // the direction length does not matter for the boolean test
    let ray = Ray::new(ray.orig, ray.dir * 1000f32);
    assert!(intersects(sphere, ray));

    // a zero radius sphere is still hit by a ray through its center
    let point = Sphere::new(Point3::new(1f32, 1f32, 1f32), 0f32);
    assert!(intersects(point, Ray::from_points(f32p3::origin(), Point3::new(2f32, 2f32, 2f32))));
}

#[test]
fn ray_sphere_miss() {
    let sphere = Sphere::new(f32p3::origin(), 1f32);
    let eps = 0.0001f32;

    for offset in [1f32 + eps * 2f32, 1.5, 10.0] {
        let ray = Ray::new(Point3::new(offset, -5f32, 0f32), Vec3::unit_y());
        assert!(!intersects(sphere, ray), "closest approach {offset} should miss");
    }

    // grazing inside the radius still hits
    let ray = Ray::new(Point3::new(1f32 - eps, -5f32, 0f32), Vec3::unit_y());
    assert!(intersects(sphere, ray));

    // a degenerate ray never hits
    assert!(!intersects(sphere, Ray::new(f32p3::origin(), f32v3::zero())));
}

#[test]
fn ray_sphere_behind_origin() {
    // The boolean test works on the infinite line, the parametric test only looks forward
    let sphere = Sphere::new(Point3::new(0f32, 0f32, 5f32), 1f32);
    let ray = Ray::new(f32p3::origin(), Vec3::new(0f32, 0f32, -1f32));
    assert!(intersects(sphere, ray));
    assert_eq!(sphere.intersect_ray(&ray), None);
}

#[test]
fn ray_sphere_param() {
    let sphere = Sphere::new(Point3::new(0f32, 0f32, -5f32), 1f32);

    let ray = Ray::new(f32p3::origin(), Vec3::new(0f32, 0f32, -1f32));
    match sphere.intersect_ray(&ray) {
        Some(t) => assert!(t.is_close_to(4f32, 0.0001)),
        None => panic!("None != Some(4)"),
    }

    // non-normalized direction, the parameter is in multiples of the direction
    let ray = Ray::new(f32p3::origin(), Vec3::new(0f32, 0f32, -2f32));
    match sphere.intersect_ray(&ray) {
        Some(t) => assert!(t.is_close_to(2f32, 0.0001)),
        None => panic!("None != Some(2)"),
    }

    // from inside
    let ray = Ray::new(Point3::new(0f32, 0f32, -5f32), Vec3::unit_x());
    match sphere.intersect_ray(&ray) {
        Some(t) => assert!(t.is_close_to(1f32, 0.0001)),
        None => panic!("None != Some(1)"),
    }
}

#[test]
fn ray_plane_exact() {
    let plane = Plane::horizontal(0f32);
    let rays = [
        Ray::from_points(Point3::new(0f32, 2f32, 2f32), Point3::new(0.3f32, -1f32, -0.7f32)),
        Ray::from_points(Point3::new(-1f32, 0.5f32, 3f32), Point3::new(2f32, -8f32, -4f32)),
        Ray::new(Point3::new(0.25f32, -3f32, 0.1f32), Vec3::new(0.01f32, 1f32, -0.02f32)),
    ];

    for ray in rays {
        let point = match intersection_point(ray, plane) {
            Some(point) => point,
            None => panic!("ray {ray} should cross the plane"),
        };
        assert!((point - plane.point).dot(plane.normal).is_close_to(0f32, 0.00001));
    }

    // tilted plane
    let plane = Plane::new(Point3::new(1f32, 1f32, 1f32), Vec3::new(1f32, 1f32, 0f32)).expect("valid normal");
    let ray = Ray::new(f32p3::origin(), Vec3::new(0.2f32, 1f32, 0.4f32));
    let point = intersection_point(ray, plane).expect("ray is not parallel");
    assert!((point - plane.point).dot(plane.normal).is_close_to(0f32, 0.00001));
}

#[test]
fn ray_plane_parallel() {
    let plane = Plane::horizontal(0f32);
    let ray = Ray::new(Point3::new(0f32, 1f32, 0f32), Vec3::new(1f32, 0f32, -1f32));
    assert_eq!(intersection_point(ray, plane), None);
    assert_eq!(plane.intersect_ray(&ray), None);

    let ray = Ray::new(Point3::new(0f32, 1f32, 0f32), f32v3::zero());
    assert_eq!(intersection_point(ray, plane), None);
}

#[test]
fn ray_plane_param() {
    let plane = Plane::horizontal(0f32);

    let ray = Ray::new(Point3::new(0f32, 2f32, 0f32), Vec3::new(0f32, -0.5f32, 0f32));
    assert_eq!(plane.intersect_ray(&ray), Some(4f32));

    // crossing behind the origin: the point exists, but the forward hit does not
    let ray = Ray::new(Point3::new(0f32, 2f32, 0f32), Vec3::unit_y());
    assert_eq!(plane.intersect_ray(&ray), None);
    assert_eq!(intersection_point(ray, plane), Some(f32p3::origin()));
}

#[test]
fn short_directions() {
    // the direction length is irrelevant, however short it gets
    let sphere = Sphere::new(f32p3::origin(), 1f32);
    for len in [1e-4f32, 1e-7f32, 1e-12f32] {
        let ray = Ray::new(Point3::new(0f32, 5f32, 0f32), Vec3::new(0f32, -len, 0f32));
        assert!(intersects(sphere, ray), "ray through the center with |dir| = {len} should hit");

        let ray = Ray::new(Point3::new(1.5f32, 5f32, 0f32), Vec3::new(0f32, -len, 0f32));
        assert!(!intersects(sphere, ray), "ray with |dir| = {len} should miss");
    }

    let ray = Ray::new(Point3::new(0f32, 5f32, 0f32), Vec3::new(0f32, -1e-4f32, 0f32));
    match sphere.intersect_ray(&ray) {
        Some(t) => assert!(t.is_close_to(40000f32, 5f32)),
        None => panic!("None != Some(40000)"),
    }

    let plane = Plane::horizontal(0f32);
    for dir in [Vec3::new(0f32, -1e-7f32, 0f32), Vec3::new(0.5e-7f32, -1e-7f32, 0f32)] {
        match intersection_point(Ray::new(Point3::new(0f32, 5f32, 0f32), dir), plane) {
            Some(point) => assert!(point.y.is_close_to(0f32, 0.00001), "{point}"),
            None => panic!("ray along {dir} should cross the plane"),
        }
    }
}

#[test]
fn non_finite_rays() {
    let sphere = Sphere::new(f32p3::origin(), 1f32);
    let plane = Plane::horizontal(0f32);

    let rays = [
        Ray::new(Point3::new(0f32, 5f32, 0f32), Vec3::new(f32::NAN, -1f32, 0f32)),
        Ray::new(Point3::new(f32::NAN, 5f32, 0f32), Vec3::new(0f32, -1f32, 0f32)),
        Ray::new(Point3::new(0f32, 5f32, 0f32), Vec3::new(0f32, f32::NEG_INFINITY, 0f32)),
        Ray::new(Point3::new(0f32, f32::INFINITY, 0f32), Vec3::new(0f32, -1f32, 0f32)),
    ];
    for ray in rays {
        assert!(!intersects(sphere, ray), "{ray} should never hit");
        assert_eq!(sphere.intersect_ray(&ray), None, "{ray} should never hit");
        assert_eq!(intersection_point(ray, plane), None, "{ray} should not cross the plane");
    }
}
