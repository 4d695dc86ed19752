use std::fmt::Display;
use crate::*;


impl<T: Real> Vec4<T> {
    /// Create a homogeneous point (w-coord == 1)
    #[inline]
    #[must_use]
    pub fn from_point(point: Point3<T>) -> Self {
        Vec4 { x: point.x, y: point.y, z: point.z, w: T::one() }
    }

    /// Perform the perspective divide, returns `None` when the w-coord is 0 or the result is not finite
    pub fn perspective_divide(self) -> Option<Point3<T>> {
        if self.w == T::zero() {
            return None;
        }
        let rcp_w = self.w.rcp();
        let point = Point3::new(self.x * rcp_w, self.y * rcp_w, self.z * rcp_w);
        if point.is_finite() { Some(point) } else { None }
    }
}

impl<T: Real + Display> Display for Vec4<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn perspective_divide() {
        let v = Vec4::new(2f32, 4f32, -6f32, 2f32);
        assert_eq!(v.perspective_divide(), Some(Point3::new(1f32, 2f32, -3f32)));

        let v = Vec4::new(2f32, 4f32, -6f32, 0f32);
        assert_eq!(v.perspective_divide(), None);

        // a tiny w is still a valid divisor
        let v = Vec4::new(1e-3f32, 0f32, 0f32, 1e-6f32);
        match v.perspective_divide() {
            Some(p) => assert!(p.x.is_close_to(1000f32, 0.01)),
            None => panic!("None != Some(1000, 0, 0)"),
        }

        // but not when the result overflows
        let v = Vec4::new(1e30f32, 0f32, 0f32, 1e-30f32);
        assert_eq!(v.perspective_divide(), None);
    }

    #[test]
    fn from_point() {
        assert_eq!(Vec4::from_point(Point3::new(1f32, 2f32, 3f32)), Vec4::new(1f32, 2f32, 3f32, 1f32));
    }
}
