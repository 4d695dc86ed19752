use std::fmt::Display;

use crate::*;

/// Horizontal circle, lying in a plane parallel to the xz-plane
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle<T: Real> {
    pub center : Point3<T>,
    pub radius : T
}

impl<T: Real> Circle<T> {
    /// Create a circle
    #[must_use]
    pub fn new(center: Point3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Get the point on the circle's edge at a given angle, measured from +x towards +z
    #[must_use]
    pub fn point_on_edge(self, angle: Radians<T>) -> Point3<T> {
        let (sin, cos) = angle.sin_cos();
        Point3::new(self.center.x + self.radius * cos, self.center.y, self.center.z + self.radius * sin)
    }
}

impl<T: Real> ApproxEq for Circle<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.radius.is_close_to(rhs.radius, epsilon)
    }
}

impl<T: Real + Display> Display for Circle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, r: {} }}", self.center, self.radius))
    }
}
