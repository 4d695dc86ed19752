use std::fmt::Display;

use crate::*;

/// Representation of a plane, represented by a point on the plane and its normal
///
/// The normal is normalized on construction.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Plane<T: Real> {
    pub point  : Point3<T>,
    pub normal : Vec3<T>,
}

impl<T: Real> Plane<T> {
    /// Create a plane through `point` with the given `normal`, returns `None` if the normal is a zero vector
    #[must_use]
    pub fn new(point: Point3<T>, normal: Vec3<T>) -> Option<Self> {
        normal.try_normalize().map(|normal| Self { point, normal })
    }

    /// Create the horizontal plane at a given height, with its normal pointing up (+y)
    #[inline]
    #[must_use]
    pub fn horizontal(height: T) -> Self {
        Self { point: Point3::new(T::zero(), height, T::zero()), normal: Vec3::unit_y() }
    }
}

impl<T: Real> ApproxEq for Plane<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.point.is_close_to(rhs.point, epsilon) &&
        self.normal.is_close_to(rhs.normal, epsilon)
    }
}

impl<T: Real + Display> Display for Plane<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ p: {}, n: {} }}", self.point, self.normal))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn construction() {
        let plane = Plane::new(f32p3::origin(), Vec3::new(0f32, 3f32, 0f32));
        assert_eq!(plane, Some(Plane::horizontal(0f32)));
        assert_eq!(Plane::new(f32p3::origin(), f32v3::zero()), None);
    }

    #[test]
    fn horizontal() {
        let plane = Plane::horizontal(1f32);
        assert_eq!(plane.point, Point3::new(0f32, 1f32, 0f32));
        assert_eq!(plane.normal, Vec3::unit_y());

        // a tiny normal still has a direction
        let plane = Plane::new(f32p3::origin(), Vec3::new(0f32, 1e-9f32, 0f32));
        match plane {
            Some(plane) => assert!(plane.normal.is_close_to(Vec3::unit_y(), 0.000001)),
            None => panic!("None != Some(plane)"),
        }
    }
}
