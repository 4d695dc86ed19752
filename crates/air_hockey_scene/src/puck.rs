use air_hockey_logging::log_warning;
use air_hockey_math::*;

use crate::{TableBounds, LOG_CAT};

/// Puck sliding over the table
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Puck {
    pub radius   : f32,
    pub height   : f32,
    pub position : f32p3,
    pub velocity : f32v3,
}

impl Puck {
    /// Create a puck at rest
    pub fn new(radius: f32, height: f32, position: f32p3) -> Self {
        Self { radius, height, position, velocity: f32v3::zero() }
    }

    /// Get the current speed
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.len()
    }

    /// Advance the puck by a single frame
    ///
    /// Applies friction, moves the puck, bounces it off any bound it crossed, and clamps it back onto the table.
    /// There is no time step: each call is one frame, so the motion depends on the frame rate.
    ///
    /// Non-finite input never reaches the position: a frame with a non-finite position, friction or damping is skipped,
    /// and a non-finite velocity brings the puck to rest where it is.
    pub fn advance(&mut self, table: &TableBounds, friction: f32, bounce_damping: f32) {
        if !friction.is_finite() || !bounce_damping.is_finite() || !self.position.is_finite() {
            log_warning!(LOG_CAT, "Skipping puck frame, friction: {friction}, bounce damping: {bounce_damping}, position: {}", self.position);
            return;
        }
        if !self.velocity.is_finite() {
            log_warning!(LOG_CAT, "Puck velocity {} is not finite, stopping the puck", self.velocity);
            self.velocity = f32v3::zero();
            return;
        }

        self.velocity = self.velocity.scale(friction);
        self.position = self.position.translate(self.velocity);

        let radius = self.radius;
        if self.position.x < table.left + radius || self.position.x > table.right - radius {
            self.velocity.x = -self.velocity.x;
            self.velocity = self.velocity.scale(bounce_damping);
        }
        if self.position.z < table.far + radius || self.position.z > table.near - radius {
            self.velocity.z = -self.velocity.z;
            self.velocity = self.velocity.scale(bounce_damping);
        }

        self.position = table.clamp(self.position, radius);
    }
}
