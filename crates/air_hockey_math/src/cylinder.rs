use std::fmt::Display;

use crate::*;

/// Upright cylinder, its axis is parallel to the y-axis and `center` is the middle of that axis
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cylinder<T: Real> {
    pub center : Point3<T>,
    pub radius : T,
    pub height : T,
}

impl<T: Real> Cylinder<T> {
    /// Create a cylinder
    #[must_use]
    pub fn new(center: Point3<T>, radius: T, height: T) -> Self {
        Self { center, radius, height }
    }

    /// Get the circle capping the top of the cylinder
    #[inline]
    #[must_use]
    pub fn top(self) -> Circle<T> {
        Circle::new(self.center.translate_y(self.height / T::from_i32(2)), self.radius)
    }

    /// Get the circle closing the bottom of the cylinder
    #[inline]
    #[must_use]
    pub fn bottom(self) -> Circle<T> {
        Circle::new(self.center.translate_y(-self.height / T::from_i32(2)), self.radius)
    }
}

impl<T: Real> ApproxEq for Cylinder<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.center.is_close_to(rhs.center, epsilon) &&
        self.radius.is_close_to(rhs.radius, epsilon) &&
        self.height.is_close_to(rhs.height, epsilon)
    }
}

impl<T: Real + Display> Display for Cylinder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ c: {}, r: {}, h: {} }}", self.center, self.radius, self.height))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn caps() {
        let cylinder = Cylinder::new(Point3::new(0f32, 0.01, 0f32), 0.06, 0.02);
        assert!(cylinder.top().center.is_close_to(Point3::new(0f32, 0.02, 0f32), 0.000001));
        assert!(cylinder.bottom().center.is_close_to(f32p3::origin(), 0.000001));
        assert_eq!(cylinder.top().radius, 0.06);
        assert_eq!(cylinder.bottom().radius, 0.06);
    }
}
