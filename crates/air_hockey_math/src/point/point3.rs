use std::{ops::*, fmt::Display};
use crate::*;


generic_point!{ doc = "A 3D point"; Point3, Vec3, 3, x, y, z;
    f32p3 => f32
    f64p3 => f64
}

impl<T: Real> Point3<T> {
    /// Get the point moved along the y-axis by `distance`
    #[inline]
    #[must_use]
    pub fn translate_y(self, distance: T) -> Self {
        Self { x: self.x, y: self.y + distance, z: self.z }
    }
}

impl<T: Real + Display> Display for Point3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
