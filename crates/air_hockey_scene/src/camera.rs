use air_hockey_logging::log_error;
use air_hockey_math::*;

use crate::{CameraSettings, Error, Result, LOG_CAT};

/// Camera looking at the table
///
/// Keeps the projection, view and combined matrices up to date with the viewport, including the inverse needed to turn touches into rays.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Camera {
    settings                 : CameraSettings,
    width                    : u32,
    height                   : u32,
    projection               : f32m4,
    view                     : f32m4,
    view_projection          : f32m4,
    inverted_view_projection : f32m4,
}

impl Camera {
    /// Create a camera for a viewport of the given size
    pub fn new(settings: CameraSettings, width: u32, height: u32) -> Result<Self> {
        let mut camera = Self {
            settings,
            width: 0,
            height: 0,
            projection: f32m4::identity(),
            view: f32m4::identity(),
            view_projection: f32m4::identity(),
            inverted_view_projection: f32m4::identity(),
        };
        camera.resize(width, height)?;
        Ok(camera)
    }

    /// Recalculate all matrices for a new viewport size
    ///
    /// On failure, the camera keeps its previous state.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            log_error!(LOG_CAT, Self::resize, "Can't resize camera to {width}x{height}");
            return Err(Error::InvalidViewport { width, height });
        }

        let aspect = width as f32 / height as f32;
        let projection = perspective_m(self.settings.fov_degrees, aspect, self.settings.near, self.settings.far);
        let view = f32m4::create_lookat_rh(self.settings.eye, self.settings.focus, Vec3::unit_y());
        let view_projection = view * projection;

        let inverted_view_projection = match view_projection.inverse() {
            Some(inv) => inv,
            None => {
                log_error!(LOG_CAT, Self::resize, "View-projection matrix is singular, keeping the previous camera");
                return Err(Error::SingularMatrix("view-projection"));
            }
        };

        self.width = width;
        self.height = height;
        self.projection = projection;
        self.view = view;
        self.view_projection = view_projection;
        self.inverted_view_projection = inverted_view_projection;
        Ok(())
    }

    /// Get the viewport size
    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn projection(&self) -> f32m4 {
        self.projection
    }

    pub fn view(&self) -> f32m4 {
        self.view
    }

    pub fn view_projection(&self) -> f32m4 {
        self.view_projection
    }

    pub fn inverted_view_projection(&self) -> f32m4 {
        self.inverted_view_projection
    }

    /// Get the model-view-projection matrix for an object placed at `position`
    pub fn model_view_projection(&self, position: f32p3) -> f32m4 {
        f32m4::create_translation(position.to_vec()) * self.view_projection
    }

    /// Convert a pixel position to normalized device coordinates
    pub fn normalized_device_coords(&self, pixel_x: f32, pixel_y: f32) -> (f32, f32) {
        normalized_device_coords(pixel_x, pixel_y, self.width as f32, self.height as f32)
    }

    /// Project a world-space point to normalized device coordinates
    pub fn world_to_ndc(&self, point: f32p3) -> Option<f32p3> {
        world_to_ndc(point, self.view_projection)
    }

    /// Get the world-space ray through a point in normalized device coordinates
    pub fn ray_through(&self, normalized_x: f32, normalized_y: f32) -> Option<f32ray> {
        screen_to_world_ray(normalized_x, normalized_y, self.inverted_view_projection)
    }
}
