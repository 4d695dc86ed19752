use crate::*;

/// Build a GL style perspective projection matrix from a vertical field of view in degrees
///
/// `aspect` is `width / height`. The resulting 16 values are laid out exactly like the column-major array GL expects.
#[must_use]
pub fn perspective_m<T: Real>(y_fov_degrees: T, aspect: T, near: T, far: T) -> Mat4<T> {
    Mat4::create_perspective_fov_rh_gl(Degrees(y_fov_degrees).to_radians(), aspect, near, far)
}

/// Convert normalized device coordinates into a world-space ray, using the inverse view-projection matrix
///
/// The ray starts on the near plane and points towards the matching point on the far plane, its direction is not normalized.
/// Returns `None` when either point ends up with a 0 w-coord, i.e. the matrix is not a valid inverse view-projection.
#[must_use]
pub fn screen_to_world_ray<T: Real>(normalized_x: T, normalized_y: T, inv_view_proj: Mat4<T>) -> Option<Ray<T>> {
    let near_ndc = Vec4::new(normalized_x, normalized_y, -T::one(), T::one());
    let far_ndc = Vec4::new(normalized_x, normalized_y, T::one(), T::one());

    let near_world = inv_view_proj.transform(near_ndc).perspective_divide()?;
    let far_world = inv_view_proj.transform(far_ndc).perspective_divide()?;

    Some(Ray::from_points(near_world, far_world))
}

/// Project a world-space point into normalized device coordinates
///
/// Returns `None` when the point lies on the camera plane (w-coord of 0).
#[must_use]
pub fn world_to_ndc<T: Real>(point: Point3<T>, view_proj: Mat4<T>) -> Option<Point3<T>> {
    view_proj.transform_point(point).perspective_divide()
}

/// Convert a pixel position on a viewport of `width` x `height` into normalized device coordinates
///
/// Pixel rows grow downwards while NDC y grows upwards, so the y-axis is inverted.
#[must_use]
pub fn normalized_device_coords<T: Real>(pixel_x: T, pixel_y: T, width: T, height: T) -> (T, T) {
    let two = T::from_i32(2);
    let x = pixel_x / width * two - T::one();
    let y = -(pixel_y / height * two - T::one());
    (x, y)
}
