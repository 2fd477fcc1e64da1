/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `assert_close!`, for comparing floats (and collections of floats) in tests.
//!
//! ```
//! use numarr_assert_close::assert_close;
//!
//! assert_close!(0.3, 0.1 + 0.2);
//! assert_close!(abs=1e-6, [0.0f32, 1.0], [1e-7, 1.0]);
//! ```

use std::fmt;

use thiserror::Error;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Assert that two floats (or collections of floats) are nearly equal.
///
/// Tolerances go in front as `rel=..., abs=...`, in either order, and a
/// custom panic message may follow the operands as in `assert!`.
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::__assert_close_parse!{[$($t)*] rel=$crate::DEFAULT_NONZERO_TOL, abs=0.0}
    };
}

/// `assert_close!` in debug builds only.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_close!{$($t)*}
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_parse {
    ([rel=$tol:expr, $($rest:tt)*] rel=$_old:expr, abs=$abs:expr) => {
        $crate::__assert_close_parse!{[$($rest)*] rel=$tol, abs=$abs}
    };
    ([abs=$tol:expr, $($rest:tt)*] rel=$rel:expr, abs=$_old:expr) => {
        $crate::__assert_close_parse!{[$($rest)*] rel=$rel, abs=$tol}
    };
    ([$a:expr, $b:expr $(,)?] rel=$rel:expr, abs=$abs:expr) => {
        $crate::__assert_close(
            &$a, &$b,
            $crate::Tolerances { rel: $rel, abs: $abs },
            format_args!("not nearly equal!"),
        )
    };
    ([$a:expr, $b:expr, $($fmt:tt)+] rel=$rel:expr, abs=$abs:expr) => {
        $crate::__assert_close(
            &$a, &$b,
            $crate::Tolerances { rel: $rel, abs: $abs },
            format_args!($($fmt)+),
        )
    };
}

#[doc(hidden)]
#[track_caller]
pub fn __assert_close<A, B>(a: &A, b: &B, tol: Tolerances, msg: fmt::Arguments<'_>)
where
    A: ?Sized + CheckClose<B> + fmt::Debug,
    B: ?Sized + fmt::Debug,
{
    if let Err(e) = a.check_close(b, tol) {
        panic!(
            "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
            msg, tol.rel, tol.abs, a, b, e,
        );
    }
}

#[doc(hidden)]
#[inline]
pub fn __is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    // Same algorithm as Python's math.isclose.
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

#[derive(Debug, Error)]
pub struct CheckCloseError<T: fmt::Debug = f64> {
    pub values: (T, T),
    pub tol: Tolerances,
}

impl<T: fmt::Debug> fmt::Display for CheckCloseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ref left, ref right) = self.values;
        write!(f, "failed at:
  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar: fmt::Debug;

    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;
}

macro_rules! gen_float_impls {
    ($($F:ty)*) => {$(
        impl CheckClose for $F {
            type Scalar = $F;

            #[inline]
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<$F>> {
                if __is_close(*self as f64, *other as f64, tol) {
                    Ok(())
                } else {
                    Err(CheckCloseError {
                        values: (*self, *other),
                        tol,
                    })
                }
            }
        }
    )*};
}

gen_float_impls!{ f32 f64 }

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0, 1.0,);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0,);
        assert_close!(1.0f32, 1.0f32);
        assert_close!([[1.0, 2.0], [3.0, 4.0]], [[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn bad_parse_regression() {
        #[derive(Debug)] struct S;
        impl S { fn x(self) -> S { self } }
        impl CheckClose for S {
            type Scalar = f64;
            fn check_close(&self, _: &S, _: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>> { Ok(()) }
        }
        assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
        );
        debug_assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
        );
        assert_close!(
            abs=1e-10,
            S.x().x().x(),
            S.x().x().x(),
            "{}", "hello",
        );
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[should_panic]
    fn nested_not_close() {
        assert_close!(vec![[1.0, 2.0]], vec![[1.0, 2.5]]);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
