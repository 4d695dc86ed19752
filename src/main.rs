use std::{fs::File, process::ExitCode};

use air_hockey_logging::{log_error, log_info, log_severe, log_verbose, log_warning, set_logger, LogCategory, Logger};
use air_hockey_math::*;
use air_hockey_scene::*;

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

const DEFAULT_SETTINGS_PATH : &str = "air_hockey.toml";
const LOG_FILE_PATH : &str = "air_hockey.log";
const MESH_POINTS : usize = 32;
const DRAG_STEPS : usize = 8;

static LOGGER : Logger = Logger::new();

fn setup_logger() {
    set_logger(&LOGGER);

    match File::create(LOG_FILE_PATH) {
        Ok(file) => if LOGGER.add_writer(Box::new(file)).is_err() {
            log_warning!(LOG_CAT, "No writer slot left for '{LOG_FILE_PATH}'");
        },
        Err(err) => log_warning!(LOG_CAT, "Failed to create '{LOG_FILE_PATH}', only logging to the console, err: {err}"),
    }
}

fn load_settings(path: &str) -> SceneSettings {
    let toml_data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            log_warning!(LOG_CAT, "Failed to read '{path}', using default settings, err: {err}");
            return SceneSettings::default();
        }
    };

    match SceneSettings::load(&toml_data) {
        Some(settings) => {
            log_info!(LOG_CAT, "Loaded settings from '{path}'");
            settings
        },
        None => {
            log_warning!(LOG_CAT, "'{path}' contains invalid settings, using default settings");
            SceneSettings::default()
        }
    }
}

fn main() -> ExitCode {
    setup_logger();
    let _flush = scopeguard::guard((), |_| LOGGER.flush());

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = load_settings(&path);

    match run_session(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_severe!(LOG_CAT, main, "Session failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Turn a world point into the pixel a player would touch to hit it, then back into normalized device coordinates,
/// the same way a touch event is handled
fn touch_at(camera: &Camera, point: f32p3) -> Option<(f32, f32)> {
    let ndc = camera.world_to_ndc(point)?;
    let (width, height) = camera.viewport();
    let pixel_x = (ndc.x + 1.0) / 2.0 * width as f32;
    let pixel_y = (1.0 - ndc.y) / 2.0 * height as f32;
    Some(camera.normalized_device_coords(pixel_x, pixel_y))
}

fn build_meshes(settings: &SceneSettings) {
    let puck = Cylinder::new(Point3::new(0.0, settings.puck.height / 2.0, 0.0), settings.puck.radius, settings.puck.height);
    let puck_mesh = ObjectBuilder::create_puck(puck, MESH_POINTS);

    let mallet_mesh = ObjectBuilder::create_mallet(
        Point3::new(0.0, settings.mallet.height / 2.0, 0.0),
        settings.mallet.radius,
        settings.mallet.height,
        MESH_POINTS
    );

    for (name, mesh) in [("puck", &puck_mesh), ("mallet", &mallet_mesh)] {
        log_info!(LOG_CAT, "Built {name} mesh: {} vertices, {} draw commands", mesh.vertex_count(), mesh.draw_list.len());
        for cmd in &mesh.draw_list {
            log_verbose!(LOG_CAT, "  {}: first {}, count {}", cmd.kind, cmd.first, cmd.count);
        }
    }
}

fn run_session(settings: &SceneSettings) -> Result<()> {
    let camera = Camera::new(settings.camera, settings.session.viewport_width, settings.session.viewport_height)?;
    let inv_view_proj = camera.inverted_view_projection();
    let mut scene = Scene::new(settings);

    build_meshes(settings);

    // Grab the mallet where it stands
    let mallet_position = scene.mallet().position();
    let grabbed = match touch_at(&camera, mallet_position) {
        Some((x, y)) => scene.on_press_begin(x, y, inv_view_proj),
        None => false,
    };
    if !grabbed {
        log_error!(LOG_CAT, run_session, "Press on the mallet at {mallet_position} did not grab it");
    }
    log_info!(LOG_CAT, "Mallet {} at {}", scene.mallet().state(), mallet_position);

    // Drag it towards the puck, one drag event per frame
    let start = Point3::new(mallet_position.x, 0.0, mallet_position.z);
    let end = Point3::new(scene.puck().position.x, 0.0, scene.puck().position.z);
    for step in 1..=DRAG_STEPS {
        let target = start.translate(Vec3::between(start, end) * (step as f32 / DRAG_STEPS as f32));
        if let Some((x, y)) = touch_at(&camera, target) {
            let position = scene.on_drag(x, y, inv_view_proj);
            log_verbose!(LOG_CAT, "Drag {step}: mallet at {position}");
        }
        scene.advance();
    }
    scene.release();
    log_info!(LOG_CAT, "Puck velocity after the strike: {}", scene.puck().velocity);

    for frame in 1..=settings.session.frames {
        scene.advance();
        if frame % 30 == 0 {
            let puck = scene.puck();
            log_info!(LOG_CAT, "Frame {frame}: puck at {}, speed {:.5}", puck.position, puck.speed());
        }
    }

    let puck = scene.puck();
    log_info!(LOG_CAT, "Session done after {} frames, puck at {} (ndc {:?})", settings.session.frames, puck.position, camera.world_to_ndc(puck.position).map(|ndc| (ndc.x, ndc.y)));
    Ok(())
}
