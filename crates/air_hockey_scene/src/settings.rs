use air_hockey_logging::{log_error, log_warning};
use air_hockey_math::*;

use crate::{Error, Result, TableBounds, LOG_CAT};

/// Mallet dimensions and starting spot
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MalletSettings {
    pub radius  : f32,
    pub height  : f32,
    /// Starting z-coord, the mallet starts centered on the x-axis
    pub start_z : f32,
}

impl Default for MalletSettings {
    fn default() -> Self {
        Self { radius: 0.08, height: 0.15, start_z: 0.4 }
    }
}

/// Puck dimensions, the puck starts at the center of the table
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PuckSettings {
    pub radius : f32,
    pub height : f32,
}

impl Default for PuckSettings {
    fn default() -> Self {
        Self { radius: 0.06, height: 0.02 }
    }
}

/// Per-frame physics factors
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PhysicsSettings {
    /// Factor the puck's velocity is scaled by every frame
    pub friction       : f32,
    /// Factor the puck's velocity is scaled by on every bounce
    pub bounce_damping : f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self { friction: 0.99, bounce_damping: 0.9 }
    }
}

/// Camera lens and placement
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CameraSettings {
    /// Vertical field of view, in degrees
    pub fov_degrees : f32,
    pub near        : f32,
    pub far         : f32,
    pub eye         : f32p3,
    pub focus       : f32p3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 1.0,
            far: 10.0,
            eye: Point3::new(0.0, 1.2, 2.2),
            focus: f32p3::origin(),
        }
    }
}

/// Scripted headless session
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SessionSettings {
    /// Number of frames to simulate after the strike
    pub frames          : u32,
    pub viewport_width  : u32,
    pub viewport_height : u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { frames: 120, viewport_width: 480, viewport_height: 800 }
    }
}

/// Scene settings
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SceneSettings {
    pub table   : TableBounds,
    pub mallet  : MalletSettings,
    pub puck    : PuckSettings,
    pub physics : PhysicsSettings,
    pub camera  : CameraSettings,
    pub session : SessionSettings,
}

impl SceneSettings {
    /// Load the settings from a toml string
    ///
    /// Missing sections and keys keep their default value, keys with a wrong type are reported and ignored.
    /// Returns `None` if the toml can't be parsed or the resulting settings are invalid.
    pub fn load(toml: &str) -> Option<SceneSettings> {
        let toml = match toml.parse::<toml::Table>() {
            Ok(toml) => toml,
            Err(err) => {
                log_error!(LOG_CAT, Self::load, "Failed to parse scene settings, err: {err}");
                return None;
            }
        };
        let mut settings = SceneSettings::default();

        if let Some(table) = get_section(&toml, "table") {
            read_f32(table, "table", "left", &mut settings.table.left);
            read_f32(table, "table", "right", &mut settings.table.right);
            read_f32(table, "table", "far", &mut settings.table.far);
            read_f32(table, "table", "near", &mut settings.table.near);
        }

        if let Some(mallet) = get_section(&toml, "mallet") {
            read_f32(mallet, "mallet", "radius", &mut settings.mallet.radius);
            read_f32(mallet, "mallet", "height", &mut settings.mallet.height);
            read_f32(mallet, "mallet", "start-z", &mut settings.mallet.start_z);
        }

        if let Some(puck) = get_section(&toml, "puck") {
            read_f32(puck, "puck", "radius", &mut settings.puck.radius);
            read_f32(puck, "puck", "height", &mut settings.puck.height);
        }

        if let Some(physics) = get_section(&toml, "physics") {
            read_f32(physics, "physics", "friction", &mut settings.physics.friction);
            read_f32(physics, "physics", "bounce-damping", &mut settings.physics.bounce_damping);
        }

        if let Some(camera) = get_section(&toml, "camera") {
            read_f32(camera, "camera", "fov", &mut settings.camera.fov_degrees);
            read_f32(camera, "camera", "near", &mut settings.camera.near);
            read_f32(camera, "camera", "far", &mut settings.camera.far);
            read_f32(camera, "camera", "eye-x", &mut settings.camera.eye.x);
            read_f32(camera, "camera", "eye-y", &mut settings.camera.eye.y);
            read_f32(camera, "camera", "eye-z", &mut settings.camera.eye.z);
        }

        if let Some(session) = get_section(&toml, "session") {
            read_u32(session, "session", "frames", &mut settings.session.frames);
            read_u32(session, "session", "viewport-width", &mut settings.session.viewport_width);
            read_u32(session, "session", "viewport-height", &mut settings.session.viewport_height);
        }

        if let Err(err) = settings.validate() {
            log_error!(LOG_CAT, Self::load, "Invalid scene settings: {err}");
            return None;
        }
        Some(settings)
    }

    /// Check that all settings are in their valid range
    pub fn validate(&self) -> Result<()> {
        self.table.validate()?;

        check_positive("mallet.radius", self.mallet.radius)?;
        check_positive("mallet.height", self.mallet.height)?;
        check_positive("puck.radius", self.puck.radius)?;
        check_positive("puck.height", self.puck.height)?;

        if !(self.table.near - self.mallet.radius > self.mallet.radius) {
            return Err(Error::InvalidValue { name: "mallet.radius", value: self.mallet.radius });
        }
        if !(self.table.width() > self.puck.radius * 2.0 && self.table.length() > self.puck.radius * 2.0) {
            return Err(Error::InvalidValue { name: "puck.radius", value: self.puck.radius });
        }

        check_factor("physics.friction", self.physics.friction)?;
        check_factor("physics.bounce-damping", self.physics.bounce_damping)?;

        if !(self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0) {
            return Err(Error::InvalidValue { name: "camera.fov", value: self.camera.fov_degrees });
        }
        check_positive("camera.near", self.camera.near)?;
        if !(self.camera.far > self.camera.near) {
            return Err(Error::InvalidValue { name: "camera.far", value: self.camera.far });
        }
        if !self.camera.eye.is_finite() || self.camera.eye == self.camera.focus {
            return Err(Error::InvalidValue { name: "camera.eye", value: self.camera.eye.dist(self.camera.focus) });
        }

        if self.session.viewport_width == 0 || self.session.viewport_height == 0 {
            return Err(Error::InvalidViewport { width: self.session.viewport_width, height: self.session.viewport_height });
        }
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidValue { name, value })
    }
}

fn check_factor(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidValue { name, value })
    }
}

fn get_section<'a>(toml: &'a toml::Table, section: &str) -> Option<&'a toml::Table> {
    match toml.get(section) {
        Some(toml::Value::Table(table)) => Some(table),
        Some(_) => {
            log_warning!(LOG_CAT, "'{section}' should be a table, ignoring it");
            None
        },
        None => None,
    }
}

fn read_f32(table: &toml::Table, section: &str, key: &str, out: &mut f32) {
    match table.get(key) {
        Some(toml::Value::Float(val)) => *out = *val as f32,
        Some(toml::Value::Integer(val)) => *out = *val as f32,
        Some(val) => log_warning!(LOG_CAT, "'{section}.{key}' should be a number, found '{val}', keeping {out}"),
        None => {},
    }
}

fn read_u32(table: &toml::Table, section: &str, key: &str, out: &mut u32) {
    match table.get(key) {
        Some(toml::Value::Integer(val)) => match u32::try_from(*val) {
            Ok(val) => *out = val,
            Err(_) => log_warning!(LOG_CAT, "'{section}.{key}' is out of range: {val}, keeping {out}"),
        },
        Some(val) => log_warning!(LOG_CAT, "'{section}.{key}' should be an integer, found '{val}', keeping {out}"),
        None => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_uses_defaults() {
        assert_eq!(SceneSettings::load(""), Some(SceneSettings::default()));
    }

    #[test]
    fn overrides() {
        let settings = SceneSettings::load(r#"
            [table]
            left = -1
            right = 1.0

            [physics]
            friction = 1.0

            [camera]
            fov = 60.0
            eye-y = 2

            [session]
            frames = 10
        "#);

        let settings = settings.expect("valid settings");
        assert_eq!(settings.table.left, -1.0);
        assert_eq!(settings.table.right, 1.0);
        assert_eq!(settings.table.near, 0.8);
        assert_eq!(settings.physics.friction, 1.0);
        assert_eq!(settings.physics.bounce_damping, 0.9);
        assert_eq!(settings.camera.fov_degrees, 60.0);
        assert_eq!(settings.camera.eye, Point3::new(0.0, 2.0, 2.2));
        assert_eq!(settings.session.frames, 10);
    }

    #[test]
    fn wrong_types_are_ignored() {
        let settings = SceneSettings::load(r#"
            [puck]
            radius = "big"

            [session]
            frames = -3
        "#);
        assert_eq!(settings, Some(SceneSettings::default()));
    }

    #[test]
    fn invalid() {
        assert_eq!(SceneSettings::load("[table"), None);
        assert_eq!(SceneSettings::load("[table]\nleft = 1.0"), None);
        assert_eq!(SceneSettings::load("[physics]\nfriction = 1.5"), None);
        assert_eq!(SceneSettings::load("[camera]\nnear = 20"), None);
        assert_eq!(SceneSettings::load("[session]\nviewport-width = 0"), None);
    }

    #[test]
    fn validate() {
        let mut settings = SceneSettings::default();
        assert!(settings.validate().is_ok());

        settings.mallet.radius = 0.0;
        assert_eq!(settings.validate(), Err(Error::InvalidValue { name: "mallet.radius", value: 0.0 }));
    }
}
