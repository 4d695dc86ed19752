use crate::{Real, ApproxEq, Zero};
use core::ops::*;
use std::fmt::Display;

macro_rules! angle_common {
    {$name:ident} => {
        impl<T: Real> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<T: Real> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl<T: Real> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<T: Real> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl<T: Real> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl<T: Real> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> ApproxEq for $name<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                self.0.is_close_to(rhs.0, epsilon)
            }
        }

        impl<T: Real> Zero for $name<T> {
            fn zero() -> Self {
                Self(T::zero())
            }
        }
    };
}

//------------------------------------------------------------------------------------------------------------------------------

/// Angle in degrees
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Degrees<T: Real>(pub T);

impl<T: Real> Degrees<T> {
    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub fn new(val: T) -> Self {
        Self(val)
    }

    /// Convert the angle to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians<T> {
        Radians(self.0 * T::DEG_TO_RAD)
    }

    /// Calculate the tangent of the angle
    #[inline]
    pub fn tan(self) -> T {
        self.to_radians().tan()
    }
}

angle_common!{ Degrees }

impl<T: Real> From<Radians<T>> for Degrees<T> {
    fn from(rads: Radians<T>) -> Self {
        rads.to_degrees()
    }
}

impl<T: Real + Display> Display for Degrees<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

/// Angle in radians
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Radians<T: Real>(pub T);

impl<T: Real> Radians<T> {
    /// Create a new angle in radians
    #[inline]
    #[must_use]
    pub fn new(val: T) -> Self {
        Self(val)
    }

    /// Convert the angle to degrees
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees<T> {
        Degrees(self.0 * T::RAD_TO_DEG)
    }

    /// Calculate the sine of the angle
    #[inline]
    pub fn sin(self) -> T {
        self.0.sin()
    }

    /// Calculate the cosine of the angle
    #[inline]
    pub fn cos(self) -> T {
        self.0.cos()
    }

    /// Calculate the sine and cosine of the angle
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.0.sin_cos()
    }

    /// Calculate the tangent of the angle
    #[inline]
    pub fn tan(self) -> T {
        self.0.tan()
    }
}

angle_common!{ Radians }

impl<T: Real> From<Degrees<T>> for Radians<T> {
    fn from(degs: Degrees<T>) -> Self {
        degs.to_radians()
    }
}

impl<T: Real + Display> Display for Radians<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rad", self.0)
    }
}
