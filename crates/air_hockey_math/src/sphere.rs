use std::fmt::Display;

use crate::{Real, ApproxEq, Point3};

/// 3D sphere
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sphere<T: Real> {
    pub center : Point3<T>,
    pub radius : T
}

impl<T: Real> Sphere<T> {
    /// Create a new sphere, a negative radius is clamped to 0
    #[inline]
    #[must_use]
    pub fn new(center: Point3<T>, radius: T) -> Self {
        Self { center, radius: radius.max(T::zero()) }
    }
}

impl<T: Real> ApproxEq for Sphere<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.radius.is_close_to(rhs.radius, epsilon)
    }
}

impl<T: Real + Display> Display for Sphere<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, r: {} }}", self.center, self.radius))
    }
}
