/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces,
// implemented on finite sets of types rather than more general
//  generic bounds in order to reduce coupling with client crates.

use std::fmt;
use std::ops::{Add, Sub, Mul, Div, Neg};
use std::ops::{AddAssign, SubAssign, MulAssign, DivAssign};

use num_traits::{Zero, One};

pub use self::number::Number;
mod number {
    use super::*;

    /// Trait for scalars usable as the elements of a `NumArray`.
    ///
    /// A `Number` has an additive identity, a multiplicative identity, and
    /// the four arithmetic operations along with their compound-assignment
    /// forms.  This is roughly "a field, if you squint", and the squinting
    /// is needed for the integer types.
    ///
    /// You get the primitive integers and floats.
    /// This trait is sealed to avoid accidental commitments.
    pub trait Number
        : Sealed
        + crate::Element<Scalar = Self, Shape = ()>
        + Copy + Clone + 'static
        + PartialEq + PartialOrd
        + fmt::Debug + fmt::Display
        + Zero + One
        + Add<Output = Self> + Sub<Output = Self>
        + Mul<Output = Self> + Div<Output = Self>
        + AddAssign + SubAssign + MulAssign + DivAssign
        + std::iter::Sum + std::iter::Product
    {
        /// The floating point type produced by `sqrt` and friends.
        ///
        /// `f32` stays `f32`; everything else goes to `f64`.
        type Float: super::Real;

        fn to_float(self) -> Self::Float;

        /// Lossy conversion from an index, for filling arrays in tests
        /// and benchmarks.
        fn from_usize(n: usize) -> Self;

        /// Absolute value. (the identity for unsigned types)
        fn abs(self) -> Self;
    }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

pub use self::signed::Signed;
mod signed {
    use super::*;

    /// Trait for scalars that are closed under negation.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It doesn't include unsigned integers for the obvious reason.
    /// (we *could* include `Wrapping`, but bleh)
    pub trait Signed: Number + Neg<Output = Self> + Sealed { }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

pub use self::real::Real;
mod real {
    use super::*;

    /// Trait for real floating point scalars.
    ///
    /// This trait is sealed to avoid accidental commitments.
    /// It's currently just primitive, real floating point types;
    /// You'll just have to take your rationals and complex numbers elsewhere.
    pub trait Real: Signed<Float = Self> + Sealed {
        fn sqrt(self) -> Self;
        fn acos(self) -> Self;
        fn min(self, b: Self) -> Self;
        fn max(self, b: Self) -> Self;
    }

    pub(crate) use self::private::Sealed;
    pub(crate) mod private {
        pub trait Sealed { }
    }
}

// Generate the impls of Number, Signed, and Real.
gen_each!{
    @{float}
    for_each!({$T:ty}) => {
        impl Number for $T {
            type Float = $T;

            #[inline(always)] fn to_float(self) -> $T { self }
            #[inline(always)] fn from_usize(n: usize) -> $T { n as $T }
            #[inline(always)] fn abs(self) -> $T { <$T>::abs(self) }
        }
        impl number::Sealed for $T { }

        impl Real for $T {
            #[inline(always)] fn sqrt(self) -> $T { <$T>::sqrt(self) }
            #[inline(always)] fn acos(self) -> $T { <$T>::acos(self) }
            #[inline(always)] fn min(self, b: $T) -> $T { <$T>::min(self, b) }
            #[inline(always)] fn max(self, b: $T) -> $T { <$T>::max(self, b) }
        }
        impl real::Sealed for $T { }
    };
}

gen_each!{
    @{signed_int}
    for_each!({$T:ty}) => {
        impl Number for $T {
            type Float = f64;

            #[inline(always)] fn to_float(self) -> f64 { self as f64 }
            #[inline(always)] fn from_usize(n: usize) -> $T { n as $T }
            #[inline(always)] fn abs(self) -> $T { <$T>::abs(self) }
        }
        impl number::Sealed for $T { }
    };
}

gen_each!{
    @{unsigned}
    for_each!({$T:ty}) => {
        impl Number for $T {
            type Float = f64;

            #[inline(always)] fn to_float(self) -> f64 { self as f64 }
            #[inline(always)] fn from_usize(n: usize) -> $T { n as $T }
            #[inline(always)] fn abs(self) -> $T { self }
        }
        impl number::Sealed for $T { }
    };
}

gen_each!{
    @{signed}
    for_each!({$T:ty}) => {
        impl Signed for $T { }
        impl signed::Sealed for $T { }
    };
}

// ---------------------------------------------------------------------------

/// One level of a recursive numeric array.
///
/// This is implemented by every `Number` (the leaves) and by `NumArray<E, M>`
/// whenever `E: Element`, which is what lets a single container type stand in
/// for vectors, matrices, and anything of higher rank.  Everything here is
/// shape metadata or a way to get at the scalars; arithmetic is provided by
/// the operator impls on `NumArray`.
///
/// This trait is sealed; please don't try to implement it for your own types.
pub trait Element: Copy + PartialEq + fmt::Debug + element::Sealed {
    /// The type at the very bottom of the recursion.
    type Scalar: Number;

    /// A type-level list of the extents, used to require identical shapes
    /// between arrays of different scalar types.
    ///
    /// `()` for scalars, `([(); M], E::Shape)` for `NumArray<E, M>`.
    type Shape;

    /// The same shape, holding scalars of type `R`.
    type Rebind<R: Number>: Element<Scalar = R, Shape = Self::Shape>;

    /// Number of extents. (0 for scalars)
    const RANK: usize;

    /// Total number of scalars. (the product of all extents)
    const LEN: usize;

    /// The extent along `axis`, or `None` if `axis >= RANK`.
    fn extent_of(axis: usize) -> Option<usize>;

    /// Broadcast a scalar across every position.
    fn splat(x: Self::Scalar) -> Self;

    /// View a contiguous sequence of elements as its scalars, in row-major order.
    fn flatten(items: &[Self]) -> &[Self::Scalar];

    /// View a contiguous sequence of elements as its scalars, in row-major order.
    fn flatten_mut(items: &mut [Self]) -> &mut [Self::Scalar];

    /// Build the same shape by applying a function to each scalar in row-major order.
    fn rebind_map<R, F>(&self, f: &mut F) -> Self::Rebind<R>
    where
        R: Number,
        F: FnMut(Self::Scalar) -> R;
}

pub(crate) mod element {
    pub trait Sealed { }
}

gen_each!{
    @{number}
    for_each!({$T:ty}) => {
        impl Element for $T {
            type Scalar = $T;
            type Shape = ();
            type Rebind<R: Number> = R;

            const RANK: usize = 0;
            const LEN: usize = 1;

            #[inline(always)]
            fn extent_of(_: usize) -> Option<usize> { None }

            #[inline(always)]
            fn splat(x: $T) -> $T { x }

            #[inline(always)]
            fn flatten(items: &[$T]) -> &[$T] { items }

            #[inline(always)]
            fn flatten_mut(items: &mut [$T]) -> &mut [$T] { items }

            #[inline(always)]
            fn rebind_map<R, F>(&self, f: &mut F) -> R
            where
                R: Number,
                F: FnMut($T) -> R,
            { f(*self) }
        }
        impl element::Sealed for $T { }
    };
}

// ---------------------------------------------------------------------------
