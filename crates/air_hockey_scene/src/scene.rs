use air_hockey_logging::{log_debug, log_verbose, log_warning};
use air_hockey_math::*;

use crate::{Mallet, MalletState, PhysicsSettings, Puck, SceneSettings, TableBounds, mallet, LOG_CAT};

/// Check if a press at the given normalized device coordinates hits a mallet
///
/// The mallet is approximated by a sphere at `mallet_position` with a radius of half its height, and the press ray is
/// treated as an infinite line. Presses that can't be turned into a valid ray never hit.
pub fn hits_mallet(normalized_x: f32, normalized_y: f32, inv_view_proj: f32m4, mallet_position: f32p3, mallet_height: f32) -> bool {
    let ray = match screen_to_world_ray(normalized_x, normalized_y, inv_view_proj) {
        Some(ray) if ray.is_finite() => ray,
        _ => {
            log_warning!(LOG_CAT, "Press at ({normalized_x}, {normalized_y}) does not map to a valid ray, ignoring it");
            return false;
        }
    };

    intersects(mallet::bounding_sphere(mallet_position, mallet_height), ray)
}

/// The table with the player's mallet and the puck
///
/// All mutation goes through `&mut self`, the owner is responsible for serializing input and frame updates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Scene {
    table   : TableBounds,
    physics : PhysicsSettings,
    mallet  : Mallet,
    puck    : Puck,
}

impl Scene {
    /// Set up the scene: the mallet on the player's half, the puck at rest in the center
    pub fn new(settings: &SceneSettings) -> Self {
        let mallet = Mallet::new(
            settings.mallet.radius,
            settings.mallet.height,
            Point3::new(0.0, settings.mallet.height / 2.0, settings.mallet.start_z)
        );
        let puck = Puck::new(
            settings.puck.radius,
            settings.puck.height,
            Point3::new(0.0, settings.puck.height / 2.0, 0.0)
        );
        Self::with_entities(settings.table, settings.physics, mallet, puck)
    }

    /// Set up a scene with explicitly placed entities
    pub fn with_entities(table: TableBounds, physics: PhysicsSettings, mallet: Mallet, puck: Puck) -> Self {
        Self { table, physics, mallet, puck }
    }

    pub fn table(&self) -> &TableBounds {
        &self.table
    }

    pub fn physics(&self) -> &PhysicsSettings {
        &self.physics
    }

    pub fn mallet(&self) -> &Mallet {
        &self.mallet
    }

    pub fn puck(&self) -> &Puck {
        &self.puck
    }

    pub fn puck_mut(&mut self) -> &mut Puck {
        &mut self.puck
    }

    /// Handle the start of a press, grabbing the mallet if the press hits it
    ///
    /// Returns whether the mallet is grabbed after the press.
    pub fn on_press_begin(&mut self, normalized_x: f32, normalized_y: f32, inv_view_proj: f32m4) -> bool {
        let hit = hits_mallet(normalized_x, normalized_y, inv_view_proj, self.mallet.position(), self.mallet.height);
        let state = if hit { MalletState::Grabbed } else { MalletState::Idle };

        if state != self.mallet.state() {
            log_verbose!(LOG_CAT, "Mallet {} -> {}", self.mallet.state(), state);
        }
        self.mallet.set_state(state);
        hit
    }

    /// Handle a drag, moving a grabbed mallet to where the press meets the table
    ///
    /// The mallet is kept on the player's half of the table. When the moved mallet touches the puck,
    /// the puck's velocity becomes the mallet's displacement (an impulse, not scaled by mass or time).
    ///
    /// Returns the mallet's position after the drag.
    pub fn on_drag(&mut self, normalized_x: f32, normalized_y: f32, inv_view_proj: f32m4) -> f32p3 {
        if !self.mallet.is_grabbed() {
            return self.mallet.position();
        }

        let ray = match screen_to_world_ray(normalized_x, normalized_y, inv_view_proj) {
            Some(ray) => ray,
            None => {
                log_warning!(LOG_CAT, "Drag at ({normalized_x}, {normalized_y}) does not map to a valid ray, ignoring it");
                return self.mallet.position();
            }
        };

        let touched = match intersection_point(ray, Plane::horizontal(0.0)) {
            Some(point) if point.is_finite() => point,
            _ => {
                log_warning!(LOG_CAT, "Drag at ({normalized_x}, {normalized_y}) does not touch the table, ignoring it");
                return self.mallet.position();
            }
        };

        let radius = self.mallet.radius;
        let position = Point3::new(
            self.table.clamp_x(touched.x, radius),
            self.mallet.position().y,
            self.table.clamp_z_near_half(touched.z, radius)
        );
        self.mallet.move_to(position);

        let distance = self.mallet.position().dist(self.puck.position);
        if distance < self.puck.radius + self.mallet.radius {
            self.puck.velocity = self.mallet.displacement();
            log_debug!(LOG_CAT, Self::on_drag, "Mallet struck the puck, velocity: {}", self.puck.velocity);
        }

        self.mallet.position()
    }

    /// Release the mallet
    pub fn release(&mut self) {
        if self.mallet.is_grabbed() {
            log_verbose!(LOG_CAT, "Mallet {} -> {}", MalletState::Grabbed, MalletState::Idle);
        }
        self.mallet.set_state(MalletState::Idle);
    }

    /// Advance the puck by a frame, using the scene's physics settings
    pub fn advance(&mut self) {
        let PhysicsSettings { friction, bounce_damping } = self.physics;
        self.advance_with(friction, bounce_damping);
    }

    /// Advance the puck by a frame, using the given friction and bounce damping
    pub fn advance_with(&mut self, friction: f32, bounce_damping: f32) {
        self.puck.advance(&self.table, friction, bounce_damping);
    }
}
