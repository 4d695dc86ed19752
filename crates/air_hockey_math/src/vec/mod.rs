use std::ops::*;
use crate::numeric::*;

mod vec3;
mod vec4;

macro_rules! generic_vec {
    {
        $docs:meta;
        $name:ident,
        $elem_cnt:literal,
        $($comp:ident),+;
        $($alias_ty:ident => $base_ty:ty)*
    } => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        #[repr(C)]
        pub struct $name<T: Copy> {
            $(pub $comp: T,)+
        }

        impl<T: Real> $name<T> {
            /// Create a new vector
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),+) -> Self {
                Self{ $($comp: $comp),+ }
            }

            /// Create a vector from an array
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [T; $elem_cnt]) -> Self {
                let [$($comp),+] = arr;
                Self{ $($comp),+ }
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $elem_cnt] {
                [$(self.$comp),*]
            }

            /// Interpret a reference to an vector as a reference to a array
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $elem_cnt] {
                // SAFETY: `#[repr(C)]` with only `T` fields has the same layout as `[T; N]`
                unsafe { &*(self as *const Self as *const [T; $elem_cnt]) }
            }

            /// Interpret a mutable reference to an vector as a mutable reference to a array
            #[inline(always)]
            #[must_use]
            pub fn as_mut_array(&mut self) -> &mut [T; $elem_cnt] {
                // SAFETY: see `as_array`
                unsafe { &mut *(self as *mut Self as *mut [T; $elem_cnt]) }
            }

        //--------------------------------------------------------------

            /// Scale the vector by a scalar
            #[inline]
            #[must_use]
            pub fn scale(self, scale: T) -> Self {
                Self{ $($comp: self.$comp * scale),+ }
            }

            /// Calculate the dot product of 2 vectors
            #[inline]
            pub fn dot(self, rhs: Self) -> T {
                crate::utils::strip_plus!($(+ self.$comp * rhs.$comp)+)
            }

            /// Calculate the square length of the vector
            #[inline]
            pub fn len_sq(self) -> T {
                crate::utils::strip_plus!($(+ self.$comp * self.$comp)+)
            }

            /// Calculate the length of the vector
            #[inline]
            pub fn len(self) -> T {
                self.len_sq().sqrt()
            }

            /// Calculate the square distance between 2 vectors
            pub fn dist_sq(self, other: Self) -> T {
                (other - self).len_sq()
            }

            /// Calculate the distance between 2 vectors
            pub fn dist(self, other: Self) -> T {
                self.dist_sq(other).sqrt()
            }

            /// Normalize the vector
            ///
            /// A zero-length vector has no direction, so it is returned unchanged (i.e. as a zero vector), as is a vector with non-finite components.
            pub fn normalize(self) -> Self {
                self.try_normalize().unwrap_or(self)
            }

            /// Normalize the vector, returns `None` for a zero-length vector, or when the length can't be represented
            pub fn try_normalize(self) -> Option<Self> {
                let len_sq = self.len_sq();
                if len_sq == T::zero() {
                    return None;
                }
                let normalized = self * len_sq.rsqrt();
                if normalized.is_finite() { Some(normalized) } else { None }
            }

            /// Check that none of the components are infinite or NaN
            pub fn is_finite(self) -> bool {
                $(self.$comp.is_finite())&&+
            }
        }

        impl<T: Real> Index<usize> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                debug_assert!(index < $elem_cnt);
                &self.as_array()[index]
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                debug_assert!(index < $elem_cnt);
                &mut self.as_mut_array()[index]
            }
        }

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self{ $($comp: T::zero()),+ }
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Add for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp + rhs.$comp),+ }
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$comp += rhs.$comp);+
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Sub for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp - rhs.$comp),+ }
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$comp -= rhs.$comp);+
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Mul for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self{ $($comp: self.$comp * rhs.$comp),+ }
            }
        }

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp * rhs),+ }
            }
        }

        impl<T: Real> MulAssign<T> for $name<T> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$comp *= rhs);+
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Div<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: T) -> Self {
                Self{ $($comp: self.$comp / rhs),+ }
            }
        }

        impl<T: Real> DivAssign<T> for $name<T> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: T) {
                $(self.$comp /= rhs);+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Neg for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self{ $($comp: -self.$comp),+ }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                $(self.$comp.is_close_to(rhs.$comp, epsilon))&&+
            }
        }

        impl<T: Real> ApproxZero for $name<T> {
            type Epsilon = T;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                $(self.$comp.is_close_to_zero(epsilon))&&+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> From<[T; $elem_cnt]> for $name<T> {
            fn from(arr: [T; $elem_cnt]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: Real> From<$name<T>> for [T; $elem_cnt] {
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        $(
            #[allow(non_camel_case_types)]
            pub type $alias_ty = $name<$base_ty>;
        )*
    };
}

generic_vec!{ doc = "3D Vector"; Vec3, 3, x, y, z;
    f32v3 => f32
    f64v3 => f64
}
generic_vec!{ doc = "4D Vector, used for homogeneous coordinates"; Vec4, 4, x, y, z, w;
    f32v4 => f32
    f64v4 => f64
}

macro_rules! impl_vec_premul {
    ($iden:ident, $($ty:ty)*) => {
        $(
            impl Mul<$iden<$ty>> for $ty {
                type Output = $iden<$ty>;

                fn mul(self, rhs: $iden<$ty>) -> $iden<$ty> {
                    rhs * self
                }
            }
        )*
    };
}
impl_vec_premul!{ Vec3, f32 f64 }
impl_vec_premul!{ Vec4, f32 f64 }
