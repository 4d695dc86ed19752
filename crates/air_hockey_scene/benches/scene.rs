use criterion::{criterion_group, criterion_main, Criterion, black_box};

use air_hockey_math::*;
use air_hockey_scene::*;

fn puck_advance(c: &mut Criterion) {
    let mut scene = Scene::new(&SceneSettings::default());
    c.bench_function("Scene::advance", |b| b.iter(|| {
        scene.puck_mut().velocity = Vec3::new(0.05, 0.0, -0.08);
        scene.advance();
        black_box(scene.puck().position)
    }));
}

fn touch_to_table(c: &mut Criterion) {
    let camera = match Camera::new(CameraSettings::default(), 480, 800) {
        Ok(camera) => camera,
        Err(err) => panic!("{err}"),
    };
    let inv = camera.inverted_view_projection();

    c.bench_function("screen_to_world_ray", |b| b.iter(|| {
        screen_to_world_ray(black_box(0.1f32), black_box(-0.3f32), inv)
    }));

    c.bench_function("hits_mallet", |b| b.iter(|| {
        hits_mallet(black_box(0.0), black_box(-0.2), inv, Point3::new(0.0, 0.075, 0.4), 0.15)
    }));

    let mut scene = Scene::new(&SceneSettings::default());
    c.bench_function("Scene::on_press_begin + on_drag", |b| b.iter(|| {
        scene.on_press_begin(black_box(0.0), black_box(-0.2), inv);
        scene.on_drag(black_box(0.05), black_box(-0.25), inv)
    }));
}

fn matrices(c: &mut Criterion) {
    let camera = match Camera::new(CameraSettings::default(), 480, 800) {
        Ok(camera) => camera,
        Err(err) => panic!("{err}"),
    };
    let view_proj = camera.view_projection();

    c.bench_function("Mat4::inverse", |b| b.iter(|| {
        black_box(view_proj).inverse()
    }));
    c.bench_function("Camera::model_view_projection", |b| b.iter(|| {
        camera.model_view_projection(black_box(Point3::new(0.0, 0.01, 0.0)))
    }));
}

criterion_group!(scene,
    puck_advance,
    touch_to_table,
    matrices
);
criterion_main!(scene);
