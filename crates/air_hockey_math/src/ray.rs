use std::fmt::Display;

use crate::{Real, ApproxEq, Point3, Vec3};

/// 3D Ray, starting at `orig` and extending infinitely along `dir`
///
/// The direction is not required to be normalized. Ray parameters (`t`) are expressed in multiples of `dir`,
/// so distances along different rays are only comparable when their directions have the same length.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray<T: Real> {
    pub orig : Point3<T>,
    pub dir  : Vec3<T>,
}

impl<T: Real> Ray<T> {
    /// Create a new ray
    #[inline]
    #[must_use]
    pub fn new(orig: Point3<T>, dir: Vec3<T>) -> Self {
        Self { orig, dir }
    }

    /// Create a ray starting at `from` and passing through `to`, the direction is `to - from`
    #[inline]
    #[must_use]
    pub fn from_points(from: Point3<T>, to: Point3<T>) -> Self {
        Self { orig: from, dir: Vec3::between(from, to) }
    }

    /// Get the point at a given ray parameter
    #[inline]
    #[must_use]
    pub fn point_at(self, t: T) -> Point3<T> {
        self.orig + self.dir * t
    }

    /// Get the ray parameter of the point on the ray's line closest to `point`, returns `None` when the direction is a zero vector
    ///
    /// The parameter can be negative, i.e. the closest point may lie behind the origin.
    #[must_use]
    pub fn closest_param(self, point: Point3<T>) -> Option<T> {
        let len_sq = self.dir.len_sq();
        if len_sq == T::zero() {
            return None;
        }
        Some(self.dir.dot(point - self.orig) / len_sq)
    }

    /// Get a ray with the same origin and a normalized direction, returns `None` when the direction is a zero vector
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        self.dir.try_normalize().map(|dir| Self { orig: self.orig, dir })
    }

    /// Check that both origin and direction only contain finite values
    #[inline]
    pub fn is_finite(self) -> bool {
        self.orig.is_finite() && self.dir.is_finite()
    }
}

impl<T: Real> ApproxEq for Ray<T> {
    type Epsilon = T;

    fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
        self.orig.is_close_to(rhs.orig, epsilon) &&
        self.dir.is_close_to(rhs.dir, epsilon)
    }
}

impl<T: Real + Display> Display for Ray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ o: {}, d: {} }}", self.orig, self.dir))
    }
}

#[allow(non_camel_case_types)] pub type f32ray = Ray<f32>;
#[allow(non_camel_case_types)] pub type f64ray = Ray<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn points() {
        let ray = Ray::from_points(Point3::new(0f32, 1f32, 0f32), Point3::new(0f32, 1f32, -4f32));
        assert_eq!(ray.dir, Vec3::new(0f32, 0f32, -4f32));
        assert_eq!(ray.point_at(0.5), Point3::new(0f32, 1f32, -2f32));
        assert_eq!(ray.point_at(1f32), Point3::new(0f32, 1f32, -4f32));
    }

    #[test]
    fn closest_param() {
        let ray = Ray::new(Point3::new(0f32, 0f32, 0f32), Vec3::new(2f32, 0f32, 0f32));
        assert_eq!(ray.closest_param(Point3::new(1f32, 5f32, 0f32)), Some(0.5));
        assert_eq!(ray.closest_param(Point3::new(-4f32, 0f32, 3f32)), Some(-2f32));

        // short directions are still valid
        let ray = Ray::new(f32p3::origin(), Vec3::new(0f32, 0f32, -1e-4f32));
        match ray.closest_param(Point3::new(0f32, 1f32, -2f32)) {
            Some(t) => assert!(t.is_close_to(20000f32, 0.5)),
            None => panic!("None != Some(20000)"),
        }

        let degenerate = Ray::new(f32p3::origin(), f32v3::zero());
        assert_eq!(degenerate.closest_param(Point3::new(1f32, 0f32, 0f32)), None);
        assert_eq!(degenerate.normalized(), None);
    }
}
