use std::{ops::*, fmt::Debug};
use crate::MathConsts;

/// Defines a type which has a 0-value, i.e. the additive identity
pub trait Zero {
    fn zero() -> Self;
}

impl Zero for f32 {
    #[inline(always)]
    fn zero() -> Self { 0f32 }
}
impl Zero for f64 {
    #[inline(always)]
    fn zero() -> Self { 0f64 }
}

/// Defines a type which has a 1-value, i.e. the multiplicative identity
pub trait One {
    fn one() -> Self;
}

impl One for f32 {
    #[inline(always)]
    fn one() -> Self { 1f32 }
}
impl One for f64 {
    #[inline(always)]
    fn one() -> Self { 1f64 }
}

/// Defines a type that is a partial implementation of a `Numeric`
pub trait NumericBase : Sized + Clone + Copy + Debug + One + Zero + PartialEq + PartialOrd +
                    Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Rem<Output = Self> +
                    AddAssign + SubAssign + MulAssign + DivAssign + RemAssign
{
    /// Machine epsilon
    const EPSILON : Self;

    /// Get the minimum of 2 `Numeric`s
    fn min(self, rhs: Self) -> Self;
    /// Get the maximum of 2 `Numeric`s
    fn max(self, rhs: Self) -> Self;

    /// Clamp a value between 2 values
    ///
    /// Unlike the std `clamp`, this never panics: when `min > max` the result is `max`.
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Calculate the absolute difference of 2 values
    fn abs_diff(self, rhs: Self) -> Self;
    /// Calculate the absolute value
    fn abs(self) -> Self;

    /// Get the sign of the value: 0 for 0, +1 for positive, and -1 for negative
    fn sign(self) -> Self;

    /// Calculate the square root of a value
    fn sqrt(self) -> Self;
    /// Calculate the reciprocal of the square root of the value
    fn rsqrt(self) -> Self {
        self.sqrt().rcp()
    }
    /// Calculate the reciprocal of the value
    fn rcp(self) -> Self {
        Self::one() / self
    }

    /// Create a numeric from an `i32`
    fn from_i32(val: i32) -> Self;
}

macro_rules! impl_numeric {
    {@fp $ty:ty} => {
        impl NumericBase for $ty {
            const EPSILON : Self = <$ty>::EPSILON;

            fn min(self, rhs: Self) -> Self {
                self.min(rhs)
            }

            fn max(self, rhs: Self) -> Self {
                self.max(rhs)
            }

            fn abs_diff(self, rhs: Self) -> Self {
                (self - rhs).abs()
            }

            fn abs(self) -> Self {
                self.abs()
            }

            fn sign(self) -> Self {
                if self == 0 as $ty { 0 as $ty } else { self.signum() }
            }

            fn sqrt(self) -> Self {
                self.sqrt()
            }

            fn from_i32(val: i32) -> Self {
                val as $ty
            }
        }
    };
}

impl_numeric!{ @fp f32 }
impl_numeric!{ @fp f64 }

/// Defines a type that can check if it's approximately equal to another value
pub trait ApproxEq : Sized {
    type Epsilon : NumericBase;

    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool;

    /// Check if `self` is approximately equal to another, using the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::Epsilon::EPSILON)
    }
}

macro_rules! impl_approx_eq {
    {$($ty:ty),*} => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                fn is_close_to(self, rhs: Self, epsilon: Self::Epsilon) -> bool {
                    (self - rhs).abs() <= epsilon
                }
            }
        )*
    };
}
impl_approx_eq!{f32, f64}

/// Defines a type that can check if it's approximately equal to it's zero identity
pub trait ApproxZero : Sized {
    type Epsilon: NumericBase;

    /// Check if `self` is approximately equal to 0, given an `epsilon`
    fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool;
}

macro_rules! impl_approx_zero {
    {$($ty:ty),*} => {
        $(
            impl ApproxZero for $ty {
                type Epsilon = $ty;

                fn is_close_to_zero(self, epsilon: Self::Epsilon) -> bool {
                    self.abs() <= epsilon
                }
            }
        )*
    };
}
impl_approx_zero!{f32, f64}

/// Defines a type that is numeric
pub trait Numeric : NumericBase + ApproxEq<Epsilon = Self> + ApproxZero<Epsilon = Self> + MathConsts {

}

impl Numeric for f32 {}
impl Numeric for f64 {}

/// Arithmatic type representing a signed number
pub trait Signed : Numeric + Neg<Output = Self>
{}

impl Signed for f32 {}
impl Signed for f64 {}

/// Arithmatic type representing a real number
pub trait Real : Signed {
    /// Get a ceil of the value
    fn ceil(self) -> Self;
    /// Get a floor of the value
    fn floor(self) -> Self;
    /// Round the value to the nearest integer
    fn round(self) -> Self;

    /// Check that the value is neither infinite nor NaN
    fn is_finite(self) -> bool;

    /// Calculate the sine of the value
    fn sin(self) -> Self;
    /// Calculate the cosine of the value
    fn cos(self) -> Self;
    /// Calculate the sine and cosine simultaniously (this may result in a faster calculation)
    fn sin_cos(self) -> (Self, Self);
    /// Calculate the tangent of the value
    fn tan(self) -> Self;
    /// Calculate the arctangent of the value, from a given x and y coordinate
    fn atan2(y: Self, x: Self) -> Self;

    /// Create a numeric from an f32
    fn from_f32(val: f32) -> Self;
    /// Create a numeric from an f64
    fn from_f64(val: f64) -> Self;
}

macro_rules! impl_real {
    {$ty:ty} => {
        impl Real for $ty {
            fn ceil(self) -> Self {
                self.ceil()
            }

            fn floor(self) -> Self {
                self.floor()
            }

            fn round(self) -> Self {
                self.round()
            }

            fn is_finite(self) -> bool {
                self.is_finite()
            }

            fn sin(self) -> Self {
                self.sin()
            }

            fn cos(self) -> Self {
                self.cos()
            }

            fn sin_cos(self) -> (Self, Self) {
                self.sin_cos()
            }

            fn tan(self) -> Self {
                self.tan()
            }

            fn atan2(y: Self, x: Self) -> Self {
                <$ty>::atan2(y, x)
            }

            fn from_f32(val: f32) -> Self {
                val as $ty
            }

            fn from_f64(val: f64) -> Self {
                val as $ty
            }
        }
    };
}
impl_real!{f32}
impl_real!{f64}
