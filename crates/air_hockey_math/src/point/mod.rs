macro_rules! generic_point {
    (
        $docs:meta;
        $iden:ident,
        $vec:ident,
        $elem_cnt:literal,
        $($comp:ident),+;
        $($alias:ident => $alias_base:ty)*
    ) => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Debug)]
        #[repr(C)]
        pub struct $iden<T: Copy> {
            $(pub $comp: T),*
        }

        impl<T: Real> $iden<T> {
            #[doc = concat!("Create a new ", stringify!($iden), ".")]
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),*) -> Self {
                Self { $($comp: $comp),+ }
            }

            #[doc = concat!("Create a ", stringify!($iden), " at the origin.")]
            #[inline(always)]
            #[must_use]
            pub fn origin() -> Self {
                Self { $($comp: T::zero()),+ }
            }

            #[doc = concat!("Create a `", stringify!($iden), "` from a `", stringify!($vec), "`.")]
            #[inline(always)]
            #[must_use]
            pub fn from_vec(vec: $vec<T>) -> Self {
                Self { $($comp: vec.$comp),* }
            }

            #[doc = concat!("Get a `", stringify!($vec), "` from the `", stringify!($iden), "`.")]
            #[inline(always)]
            #[must_use]
            pub fn to_vec(self) -> $vec<T> {
                $vec { $($comp: self.$comp),* }
            }

            #[doc = concat!("Get the contents from the ", stringify!($iden), " as an array")]
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $elem_cnt] {
                [$(self.$comp),+]
            }

            /// Translate the point by a vector, returning the new point
            #[inline]
            #[must_use]
            pub fn translate(self, vec: $vec<T>) -> Self {
                Self { $($comp: self.$comp + vec.$comp),* }
            }

            /// Get the vector pointing from this point to `other`, i.e. `other - self`
            #[inline]
            #[must_use]
            pub fn vector_to(self, other: Self) -> $vec<T> {
                other - self
            }

            /// Calculate the squared distance between 2 points
            #[must_use]
            pub fn dist_sq(self, other: Self) -> T {
                (self - other).len_sq()
            }

            /// Calculate the distance between 2 points
            #[must_use]
            pub fn dist(self, other: Self) -> T {
                (self - other).len()
            }

            /// Check that none of the coordinates are infinite or NaN
            pub fn is_finite(self) -> bool {
                $(self.$comp.is_finite())&&+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: Real> Add<$vec<T>> for $iden<T> {
            type Output = Self;

            fn add(self, rhs: $vec<T>) -> Self::Output {
                self.translate(rhs)
            }
        }

        impl<T: Real> AddAssign<$vec<T>> for $iden<T> {
            fn add_assign(&mut self, rhs: $vec<T>) {
                $(self.$comp += rhs.$comp;)*
            }
        }

        impl<T: Real> Sub<$vec<T>> for $iden<T> {
            type Output = Self;

            fn sub(self, rhs: $vec<T>) -> Self::Output {
                Self { $($comp: self.$comp - rhs.$comp),* }
            }
        }

        impl<T: Real> Sub for $iden<T> {
            type Output = $vec<T>;

            fn sub(self, rhs: Self) -> Self::Output {
                $vec { $($comp: self.$comp - rhs.$comp),* }
            }
        }

        //--------------------------------------------------------------

        impl<T: Real> ApproxEq for $iden<T> {
            type Epsilon = T;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                $(self.$comp.is_close_to(rhs.$comp, epsilon))&&+
            }
        }

        impl<T: Real> From<$vec<T>> for $iden<T> {
            fn from(vec: $vec<T>) -> Self {
                Self::from_vec(vec)
            }
        }

        impl<T: Real> From<[T; $elem_cnt]> for $iden<T> {
            fn from(arr: [T; $elem_cnt]) -> Self {
                let [$($comp),+] = arr;
                Self { $($comp),+ }
            }
        }

        $(
            #[allow(non_camel_case_types)]
            pub type $alias = $iden<$alias_base>;
        )*
    };
}

mod point3;
pub use point3::*;
