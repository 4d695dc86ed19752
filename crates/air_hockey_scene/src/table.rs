use air_hockey_math::*;

use crate::{Error, Result};

/// Rectangular play area of the table, in world x/z coordinates
///
/// `far` is the more negative z (away from the player), `near` the more positive z.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TableBounds {
    pub left  : f32,
    pub right : f32,
    pub far   : f32,
    pub near  : f32,
}

impl TableBounds {
    /// Create new table bounds, fails if the bounds don't enclose an area
    pub fn new(left: f32, right: f32, far: f32, near: f32) -> Result<Self> {
        let bounds = Self { left, right, far, near };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that `left < right` and `far < near`
    pub fn validate(&self) -> Result<()> {
        // written so NaN bounds fail as well
        if self.left < self.right && self.far < self.near {
            Ok(())
        } else {
            Err(Error::InvalidBounds { left: self.left, right: self.right, far: self.far, near: self.near })
        }
    }

    /// Clamp an x-coord so an object of the given radius stays between the left and right bound
    #[inline]
    pub fn clamp_x(&self, x: f32, radius: f32) -> f32 {
        NumericBase::clamp(x, self.left + radius, self.right - radius)
    }

    /// Clamp a z-coord so an object of the given radius stays between the far and near bound
    #[inline]
    pub fn clamp_z(&self, z: f32, radius: f32) -> f32 {
        NumericBase::clamp(z, self.far + radius, self.near - radius)
    }

    /// Clamp a z-coord so an object of the given radius stays on the player's (near) half of the table
    #[inline]
    pub fn clamp_z_near_half(&self, z: f32, radius: f32) -> f32 {
        NumericBase::clamp(z, radius, self.near - radius)
    }

    /// Clamp a position so an object of the given radius stays on the table, the y-coord is left untouched
    pub fn clamp(&self, position: f32p3, radius: f32) -> f32p3 {
        Point3::new(self.clamp_x(position.x, radius), position.y, self.clamp_z(position.z, radius))
    }

    /// Check if an object of the given radius at `position` lies fully on the table
    pub fn contains(&self, position: f32p3, radius: f32) -> bool {
        position.x >= self.left + radius && position.x <= self.right - radius &&
        position.z >= self.far + radius && position.z <= self.near - radius
    }

    /// Get the width (x) of the table
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Get the length (z) of the table
    pub fn length(&self) -> f32 {
        self.near - self.far
    }
}

impl Default for TableBounds {
    fn default() -> Self {
        Self { left: -0.5, right: 0.5, far: -0.8, near: 0.8 }
    }
}
