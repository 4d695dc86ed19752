use std::fmt::Display;
use crate::*;


impl<T: Real> Vec3<T> {
    /// Get the vector pointing from `from` to `to`, i.e. `to - from`
    #[inline]
    #[must_use]
    pub fn between(from: Point3<T>, to: Point3<T>) -> Self {
        to - from
    }

    /// Calculate the cross product of 2 vectors
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Vec3 { x: self.y * rhs.z - self.z * rhs.y,
               y: self.z * rhs.x - self.x * rhs.z,
               z: self.x * rhs.y - self.y * rhs.x }
    }
}

impl<T: Real + Display> Display for Vec3<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Constants
impl<T: Real> Vec3<T> {
    pub fn unit_x() -> Self { Self{ x: T::one() , y: T::zero(), z: T::zero() } }
    pub fn unit_y() -> Self { Self{ x: T::zero(), y: T::one() , z: T::zero() } }
    pub fn unit_z() -> Self { Self{ x: T::zero(), y: T::zero(), z: T::one()  } }
}
