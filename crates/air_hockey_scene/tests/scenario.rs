use air_hockey_math::*;
use air_hockey_scene::*;

fn camera() -> Camera {
    Camera::new(CameraSettings::default(), 480, 800).expect("valid camera")
}

fn table_press(camera: &Camera, point: f32p3) -> (f32, f32) {
    let ndc = camera.world_to_ndc(point).expect("point in front of the camera");
    (ndc.x, ndc.y)
}

#[test]
fn strike_the_puck() {
    let camera = camera();
    let inv = camera.inverted_view_projection();

    let mallet = Mallet::new(0.08, 0.15, Point3::new(0.0, 0.075, 0.4));
    let puck = Puck::new(0.06, 0.02, Point3::new(0.0, 0.03, 0.0));
    let mut scene = Scene::with_entities(TableBounds::default(), PhysicsSettings::default(), mallet, puck);

    let (x, y) = table_press(&camera, scene.mallet().position());
    assert!(scene.on_press_begin(x, y, inv));

    // drag towards the puck, the mallet can't cross z == radius
    let (x, y) = table_press(&camera, Point3::new(0.0, 0.0, 0.05));
    let position = scene.on_drag(x, y, inv);
    assert!(position.is_close_to(Point3::new(0.0, 0.075, 0.08), 0.0001));
    assert!(position.dist(scene.puck().position) < 0.14);

    let displacement = Vec3::between(scene.mallet().previous_position(), scene.mallet().position());
    assert_eq!(scene.puck().velocity, displacement);
    assert!(scene.puck().velocity.is_close_to(Vec3::new(0.0, 0.0, -0.32), 0.0001));

    scene.release();
    assert_eq!(scene.mallet().state(), MalletState::Idle);

    // the puck now travels towards the far end, slowing down and bouncing back
    let mut bounced = false;
    for _ in 0..200 {
        scene.advance();
        let puck = scene.puck();
        assert!(scene.table().contains(puck.position, puck.radius), "puck left the table: {}", puck.position);
        bounced |= puck.velocity.z > 0.0;
    }
    assert!(bounced);
}

#[test]
fn drag_without_contact_leaves_puck_alone() {
    let camera = camera();
    let inv = camera.inverted_view_projection();
    let mut scene = Scene::new(&SceneSettings::default());

    let (x, y) = table_press(&camera, scene.mallet().position());
    assert!(scene.on_press_begin(x, y, inv));

    let (x, y) = table_press(&camera, Point3::new(0.3, 0.0, 0.6));
    scene.on_drag(x, y, inv);
    assert_eq!(scene.puck().velocity, f32v3::zero());
}

#[test]
fn friction_slows_the_puck() {
    let mut scene = Scene::new(&SceneSettings::default());
    scene.puck_mut().velocity = Vec3::new(0.013, 0.0, -0.021);

    let mut speed = scene.puck().speed();
    for frame in 0..600 {
        scene.advance();
        let puck = scene.puck();
        assert!(puck.speed() < speed, "speed did not decrease at frame {frame}");
        assert!(scene.table().contains(puck.position, puck.radius));
        speed = puck.speed();
    }
    assert!(speed < 0.0001);
}

#[test]
fn bounce_reflects_and_damps() {
    let mut scene = Scene::new(&SceneSettings::default());
    scene.puck_mut().position = Point3::new(0.4, 0.01, 0.0);
    scene.puck_mut().velocity = Vec3::new(0.1, 0.0, 0.0);

    scene.advance_with(1.0, 0.9);
    assert!(scene.puck().velocity.x.is_close_to(-0.09, 0.000001));
    assert!(scene.puck().position.x.is_close_to(0.44, 0.000001));
}

#[test]
fn loaded_settings_drive_the_scene() {
    let settings = SceneSettings::load("[physics]\nfriction = 0.5\n[mallet]\nstart-z = 0.6").expect("valid settings");
    let mut scene = Scene::new(&settings);
    assert!(scene.mallet().position().is_close_to(Point3::new(0.0, 0.075, 0.6), 0.000001));

    scene.puck_mut().velocity = Vec3::new(0.02, 0.0, 0.0);
    scene.advance();
    assert!(scene.puck().velocity.x.is_close_to(0.01, 0.000001));
}
