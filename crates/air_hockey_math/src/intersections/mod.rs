use crate::*;

/// Defines a shape that can be hit by a ray of type `R`, giving the ray parameter of the first hit
///
/// Only hits in front of the ray's origin (`t >= 0`) are reported.
pub trait IntersectWithRay<T: Real, R> {
    fn intersect_ray(&self, ray: &R) -> Option<T>;
}

/// Defines a boolean overlap test between 2 shapes
pub trait Intersects<Rhs = Self> {
    fn intersects(&self, rhs: &Rhs) -> bool;
}

/// Check if the line through `ray` passes through `sphere`
///
/// The ray is treated as an infinite line, so a sphere behind the ray's origin is also reported.
/// A ray with a zero direction or non-finite values never intersects.
#[inline]
#[must_use]
pub fn intersects<T: Real>(sphere: Sphere<T>, ray: Ray<T>) -> bool {
    sphere.intersects(&ray)
}

/// Calculate the point where the line through `ray` crosses `plane`
///
/// Returns `None` when the ray runs parallel to the plane or contains non-finite values. The crossing may lie behind the ray's origin.
#[must_use]
pub fn intersection_point<T: Real>(ray: Ray<T>, plane: Plane<T>) -> Option<Point3<T>> {
    line_plane_param(ray, plane).map(|t| ray.point_at(t)).filter(|point| point.is_finite())
}

fn line_plane_param<T: Real>(ray: Ray<T>, plane: Plane<T>) -> Option<T> {
    if !ray.is_finite() {
        return None;
    }

    let denom = ray.dir.dot(plane.normal);
    if denom == T::zero() {
        return None;
    }
    let t = (plane.point - ray.orig).dot(plane.normal) / denom;
    if t.is_finite() { Some(t) } else { None }
}

mod ray_intersections;

#[cfg(test)]
mod test;
