use crate::*;

use core::ops::*;

mod mat4;
pub use mat4::*;

macro_rules! generic_matrix {
    {$docs:meta; $name:ident, $m:literal, $n:literal} => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T: Real> {
            vals : [T; $m * $n]
        }

        impl<T: Real> $name<T> {
            /// Create a matrix from an array
            #[inline(always)]
            #[must_use]
            pub fn from_array(vals: [T; $m * $n]) -> Self {
                Self { vals }
            }

            /// Get the content of the matrix as an array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $m * $n] {
                self.vals
            }

            /// Get a reference to the content of the matrix as an array
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $m * $n] {
                &self.vals
            }
        }

        impl<T: Real> Index<usize> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: usize) -> &Self::Output {
                debug_assert!(index < $m * $n);
                &self.vals[index]
            }
        }

        impl<T: Real> IndexMut<usize> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                debug_assert!(index < $m * $n);
                &mut self.vals[index]
            }
        }

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self { vals: [T::zero(); $m * $n] }
            }
        }

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                let mut res = self;
                for val in &mut res.vals {
                    *val *= rhs;
                }
                res
            }
        }

        impl<T: Real> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                self.vals.iter().zip(rhs.vals.iter()).all(|(a, b)| a.is_close_to(*b, epsilon))
            }
        }

        impl<T: Real> From<[T; $m * $n]> for $name<T> {
            fn from(vals: [T; $m * $n]) -> Self {
                Self::from_array(vals)
            }
        }
    };
}
generic_matrix!{ doc = "4x4 matrix (row-major order, row vectors: `v' = v * M`)"; Mat4, 4, 4 }
