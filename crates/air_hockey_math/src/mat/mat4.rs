use std::{ops::{Mul, MulAssign}, fmt::Display};
use crate::*;

// Matrices use row vectors, so a point is transformed as `p * M` and `A * B` applies `A` first.
// Stored in row-major order, the 16 values have exactly the same memory layout as the GL column-major, column vector convention.
// This means that the GL matrix `P * V` corresponds to `V * P` here, while both share the same flat array.

impl<T: Real> Mat4<T> {
    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        let idx = index * 4;
        Vec4::new(self.vals[idx], self.vals[idx + 1], self.vals[idx + 2], self.vals[idx + 3])
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        Vec4::new(self.vals[index], self.vals[index + 4], self.vals[index + 8], self.vals[index + 12])
    }

    /// Get the identity matrix
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();
        Self { vals: [one , zero, zero, zero,
                      zero, one , zero, zero,
                      zero, zero, one , zero,
                      zero, zero, zero, one ] }
    }

    /// Transpose the matrix
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Self {
        Self { vals: [self[0], self[4], self[ 8], self[12],
                      self[1], self[5], self[ 9], self[13],
                      self[2], self[6], self[10], self[14],
                      self[3], self[7], self[11], self[15]] }
    }

    /// Calculate the adjugate (transpose cofactor)
    #[must_use]
    pub fn adjugate(self) -> Self {
        let m = &self.vals;

        let a00 =  m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15] + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
        let a04 = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15] - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
        let a08 =  m[4] * m[ 9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15] + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[ 9];
        let a12 = -m[4] * m[ 9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14] - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[ 9];

        let a01 = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15] - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
        let a05 =  m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15] + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
        let a09 = -m[0] * m[ 9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15] - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[ 9];
        let a13 =  m[0] * m[ 9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14] + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[ 9];

        let a02 =  m[1] * m[ 6] * m[15] - m[1] * m[ 7] * m[14] - m[5] * m[2] * m[15] + m[5] * m[3] * m[14] + m[13] * m[2] * m[ 7] - m[13] * m[3] * m[ 6];
        let a06 = -m[0] * m[ 6] * m[15] + m[0] * m[ 7] * m[14] + m[4] * m[2] * m[15] - m[4] * m[3] * m[14] - m[12] * m[2] * m[ 7] + m[12] * m[3] * m[ 6];
        let a10 =  m[0] * m[ 5] * m[15] - m[0] * m[ 7] * m[13] - m[4] * m[1] * m[15] + m[4] * m[3] * m[13] + m[12] * m[1] * m[ 7] - m[12] * m[3] * m[ 5];
        let a14 = -m[0] * m[ 5] * m[14] + m[0] * m[ 6] * m[13] + m[4] * m[1] * m[14] - m[4] * m[2] * m[13] - m[12] * m[1] * m[ 6] + m[12] * m[2] * m[ 5];

        let a03 = -m[1] * m[ 6] * m[11] + m[1] * m[ 7] * m[10] + m[5] * m[2] * m[11] - m[5] * m[3] * m[10] - m[ 9] * m[2] * m[ 7] + m[ 9] * m[3] * m[ 6];
        let a07 =  m[0] * m[ 6] * m[11] - m[0] * m[ 7] * m[10] - m[4] * m[2] * m[11] + m[4] * m[3] * m[10] + m[ 8] * m[2] * m[ 7] - m[ 8] * m[3] * m[ 6];
        let a11 = -m[0] * m[ 5] * m[11] + m[0] * m[ 7] * m[ 9] + m[4] * m[1] * m[11] - m[4] * m[3] * m[ 9] - m[ 8] * m[1] * m[ 7] + m[ 8] * m[3] * m[ 5];
        let a15 =  m[0] * m[ 5] * m[10] - m[0] * m[ 6] * m[ 9] - m[4] * m[1] * m[10] + m[4] * m[2] * m[ 9] + m[ 8] * m[1] * m[ 6] - m[ 8] * m[2] * m[ 5];

        Self { vals: [a00, a01, a02, a03,
                      a04, a05, a06, a07,
                      a08, a09, a10, a11,
                      a12, a13, a14, a15] }
    }

    /// Calculate the determinant
    pub fn determinant(self) -> T {
        let adj = self.adjugate();
        self[0] * adj[0] + self[1] * adj[4] + self[2] * adj[8] + self[3] * adj[12]
    }

    /// Calculate the inverse, returns `None` when the matrix is singular
    pub fn inverse(self) -> Option<Self> {
        let adj = self.adjugate();
        let det = self[0] * adj[0] + self[1] * adj[4] + self[2] * adj[8] + self[3] * adj[12];
        if det == T::zero() || !det.is_finite() {
            None
        } else {
            Some(adj * det.rcp())
        }
    }

    /// Transform a `Vec4`
    pub fn transform(self, vec: Vec4<T>) -> Vec4<T> {
        let row0 = self.row(0);
        let row1 = self.row(1);
        let row2 = self.row(2);
        let row3 = self.row(3);

        row0 * vec.x + row1 * vec.y + row2 * vec.z + row3 * vec.w
    }

    /// Transform a `Point3` into homogeneous coordinates (implicit w-coord with a value of 1)
    pub fn transform_point(self, point: Point3<T>) -> Vec4<T> {
        self.transform(Vec4::from_point(point))
    }

    //------------------------------------------------------------------------------------------------------------------------------

    /// Create a 3d translation matrix
    pub fn create_translation(trans: Vec3<T>) -> Self {
        let zero = T::zero();
        let one = T::one();

        Self { vals: [one    , zero   , zero   , zero,
                      zero   , one    , zero   , zero,
                      zero   , zero   , one    , zero,
                      trans.x, trans.y, trans.z, one ] }
    }

    /// Create a counter-clockwise rotation around the x-axis (right-handed)
    pub fn create_rotation_x(angle: Radians<T>) -> Self {
        let zero = T::zero();
        let one = T::one();
        let (sin, cos) = angle.sin_cos();

        Self { vals: [one , zero, zero, zero,
                      zero, cos , sin , zero,
                      zero, -sin, cos , zero,
                      zero, zero, zero, one ] }
    }

    /// Create a right-handed look-at matrix, looking from `eye` towards `focus` and a given `up` vector
    ///
    /// Produces the same values as GL's `setLookAtM`
    pub fn create_lookat_rh(eye: Point3<T>, focus: Point3<T>, up: Vec3<T>) -> Self {
        let forward = (focus - eye).normalize();
        let side = forward.cross(up).normalize();
        let up = side.cross(forward);

        let eye = eye.to_vec();
        let zero = T::zero();
        let one = T::one();

        Self { vals: [side.x        , up.x        , -forward.x      , zero,
                      side.y        , up.y        , -forward.y      , zero,
                      side.z        , up.z        , -forward.z      , zero,
                      -side.dot(eye), -up.dot(eye), forward.dot(eye), one ] }
    }

    /// Create a perspective matrix, with a given vertical `fov` and an `aspect` ratio defined as `width / height`
    ///
    /// This version assumes a RH coordinate system with a z depth in the range (-1; 1), i.e. an OpenGL style projection
    pub fn create_perspective_fov_rh_gl(fov: Radians<T>, aspect: T, near: T, far: T) -> Self {
        debug_assert!(fov > Radians::zero());
        debug_assert!(aspect > T::zero());
        debug_assert!(near < far);
        debug_assert!(near > T::zero());

        let zero = T::zero();
        let one = T::one();
        let two = T::from_i32(2);

        // focal length
        let focal = (fov / two).tan().rcp();
        let rcp_range = (far - near).rcp();

        Self { vals: [focal / aspect, zero , zero                         , zero,
                      zero          , focal, zero                         , zero,
                      zero          , zero , -(far + near) * rcp_range    , -one,
                      zero          , zero , -(two * far * near) * rcp_range, zero] }
    }
}

impl<T: Real> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let row0 = self.row(0);
        let row1 = self.row(1);
        let row2 = self.row(2);
        let row3 = self.row(3);

        let column0 = rhs.column(0);
        let column1 = rhs.column(1);
        let column2 = rhs.column(2);
        let column3 = rhs.column(3);

        Self { vals : [row0.dot(column0), row0.dot(column1), row0.dot(column2), row0.dot(column3),
                       row1.dot(column0), row1.dot(column1), row1.dot(column2), row1.dot(column3),
                       row2.dot(column0), row2.dot(column1), row2.dot(column2), row2.dot(column3),
                       row3.dot(column0), row3.dot(column1), row3.dot(column2), row3.dot(column3)] }
    }
}

impl<T: Real> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real + Display> Display for Mat4<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[[{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}], [{}, {}, {}, {}]]",
               self[ 0], self[ 1], self[ 2], self[ 3],
               self[ 4], self[ 5], self[ 6], self[ 7],
               self[ 8], self[ 9], self[10], self[11],
               self[12], self[13], self[14], self[15])
    }
}

#[allow(non_camel_case_types)] pub type f32m4 = Mat4<f32>;
#[allow(non_camel_case_types)] pub type f64m4 = Mat4<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn identity_and_multiply() {
        let trans = f32m4::create_translation(Vec3::new(1f32, 2f32, 3f32));
        assert_eq!(trans * f32m4::identity(), trans);
        assert_eq!(f32m4::identity() * trans, trans);

        // translations compose additively
        let twice = trans * trans;
        let expected = f32m4::create_translation(Vec3::new(2f32, 4f32, 6f32));
        assert!(twice.is_close_to(expected, 0.00001));
    }

    #[test]
    fn transform_point() {
        let trans = f32m4::create_translation(Vec3::new(1f32, 2f32, 3f32));
        let res = trans.transform_point(Point3::new(1f32, 1f32, 1f32));
        assert_eq!(res, Vec4::new(2f32, 3f32, 4f32, 1f32));
    }

    #[test]
    fn gl_memory_layout() {
        // the translation lives in elements 12..15, as in a GL column-major array
        let trans = f32m4::create_translation(Vec3::new(1f32, 2f32, 3f32));
        assert_eq!(&trans.as_array()[12..15], &[1f32, 2f32, 3f32]);
    }

    #[test]
    fn rotation() {
        // rotating +y by 90 degrees around x yields +z
        let rot = f32m4::create_rotation_x(Degrees(90f32).to_radians());
        let res = rot.transform_point(Point3::new(0f32, 1f32, 0f32));
        assert!(res.is_close_to(Vec4::new(0f32, 0f32, 1f32, 1f32), 0.00001));
    }

    #[test]
    fn inverse() {
        let mat = f32m4::create_rotation_x(Degrees(-60f32).to_radians()) * f32m4::create_translation(Vec3::new(0f32, 0f32, -2.5f32));
        let inv = mat.inverse().expect("matrix should be invertible");
        assert!((mat * inv).is_close_to(f32m4::identity(), 0.0001));
        assert!((inv * mat).is_close_to(f32m4::identity(), 0.0001));

        assert_eq!(f32m4::zero().inverse(), None);
        assert!(f32m4::identity().determinant().is_close_to(1f32, 0.000001));
    }

    #[test]
    fn determinant() {
        let rot = f32m4::create_rotation_x(Degrees(30f32).to_radians());
        assert!(rot.determinant().is_close_to(1f32, 0.0001));

        // a rotation is orthonormal, its transpose is its inverse
        let inv = rot.inverse().expect("rotation is invertible");
        assert!(rot.transpose().is_close_to(inv, 0.00001));
        assert_eq!(rot.transpose().transpose(), rot);
    }

    #[test]
    fn lookat() {
        let eye = Point3::new(0f32, 1.2f32, 2.2f32);
        let view = f32m4::create_lookat_rh(eye, f32p3::origin(), Vec3::unit_y());

        // the eye ends up at the view-space origin
        let res = view.transform_point(eye);
        assert!(res.is_close_to(Vec4::new(0f32, 0f32, 0f32, 1f32), 0.00001));

        // the focus point lies straight ahead (-z)
        let res = view.transform_point(f32p3::origin());
        let dist = eye.to_vec().len();
        assert!(res.is_close_to(Vec4::new(0f32, 0f32, -dist, 1f32), 0.00001));
    }

    #[test]
    fn perspective_matches_gl() {
        let fov = Degrees(45f32).to_radians();
        let proj = f32m4::create_perspective_fov_rh_gl(fov, 1.5f32, 1f32, 10f32);
        let a = 1f32 / (22.5f32.to_radians()).tan();

        let expected = [a / 1.5f32, 0f32, 0f32          , 0f32,
                        0f32      , a   , 0f32          , 0f32,
                        0f32      , 0f32, -11f32 / 9f32 , -1f32,
                        0f32      , 0f32, -20f32 / 9f32 , 0f32];
        assert!(proj.is_close_to(f32m4::from_array(expected), 0.00001));
    }
}
