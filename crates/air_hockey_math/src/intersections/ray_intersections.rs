use crate::*;
use super::line_plane_param;

//- ray-sphere intersection ----------------------------------------------------------------------------------------------------

impl<T: Real> Intersects<Ray<T>> for Sphere<T> {
    fn intersects(&self, ray: &Ray<T>) -> bool {
        if !ray.is_finite() {
            return false;
        }

        // Parameter of the point on the line closest to the center, the sign is ignored
        let tc = match ray.closest_param(self.center) {
            Some(tc) => tc,
            None => return false,
        };

        let closest = ray.point_at(tc);
        closest.dist_sq(self.center) <= self.radius * self.radius
    }
}

impl<T: Real> IntersectWithRay<T, Ray<T>> for Sphere<T> {
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        // Solve |o + t * d - c|^2 = r^2 for t:
        //     (d . d) * t^2 + 2 * (d . (o - c)) * t + |o - c|^2 - r^2 = 0
        let a = ray.dir.len_sq();
        if a == T::zero() || !ray.is_finite() {
            return None;
        }

        let to_orig = ray.orig - self.center;
        let half_b = ray.dir.dot(to_orig);
        let c = to_orig.len_sq() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < T::zero() {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let near = (-half_b - sqrt_disc) / a;
        let far = (-half_b + sqrt_disc) / a;

        if near >= T::zero() {
            Some(near)
        } else if far >= T::zero() {
            // origin is inside the sphere
            Some(far)
        } else {
            None
        }
    }
}

//- ray-plane intersection -----------------------------------------------------------------------------------------------------

impl<T: Real> IntersectWithRay<T, Ray<T>> for Plane<T> {
    fn intersect_ray(&self, ray: &Ray<T>) -> Option<T> {
        line_plane_param(*ray, *self).filter(|&t| t >= T::zero())
    }
}
