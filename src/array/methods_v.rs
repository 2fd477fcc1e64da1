/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::AddAssign;

use num_traits::{Zero, One};

use crate::{Element, Number, Real, CommonType, Promoted};
use crate::types::*;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<T: Number, const N: usize> Vector<T, N> {
    /// Get a basis vector.
    #[inline]
    pub fn axis_unit(i: usize) -> Self {
        let mut v = Self::zero();
        *v.get_mut(i)
            .unwrap_or_else(|| panic!("Invalid axis for {}d vector: {}", N, i)) = T::one();
        v
    }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `Vector::dot(a, b)`, rather than `a.dot(b)`.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> T
    { vee::dot(self, other) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> T
    { vee::sqnorm(self) }

    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> T::Float
    { vee::magnitude(self) }

    /// Normalize the vector.
    #[inline(always)]
    pub fn unit(&self) -> Vector<T::Float, N>
    { vee::dir(self) }

    /// Get the shortest angle (as a value in `[0, pi]`) between this vector and another.
    #[inline(always)]
    pub fn angle_to(&self, other: &Self) -> T::Float
    { vee::angle_between(self, other) }

    /// Get the part of the vector that is parallel to `r`.
    #[inline]
    pub fn par(&self, r: &Self) -> Self {
        let scale = dot_with(self, r, |a, b| a * b) / r.sqnorm();
        r.map(|x| x * scale)
    }

    /// Get the part of the vector that is perpendicular to `r`.
    ///
    /// Be aware that chained calls to `perp` can have **spectacularly bad**
    /// numerical stability issues; you cannot trust that `c.perp(a).perp(b)`
    /// is even *remotely* orthogonal to `a` unless `b` is orthogonal to `a`.
    #[inline]
    pub fn perp(&self, r: &Self) -> Self
    { self.zip_map(self.par(r), |a, b| a - b) }
}

impl<T: Number> Vector<T, 3> {
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self
    { cross_with(self, other) }
}

pub mod vee {
    //! Vector algebra as free functions.
    //!
    //! Functions taking two vectors accept different scalar types and
    //! compute in their common type.  (see [`Promoted`])

    use super::*;

    /// Get a zero vector.
    #[inline(always)]
    pub fn zero<T: Number, const N: usize>() -> Vector<T, N>
    { Vector::zero() }

    /// Construct a fixed-size vector from a function on indices.
    #[inline(always)]
    pub fn from_fn<T, F, const N: usize>(f: F) -> Vector<T, N>
    where F: FnMut(usize) -> T,
    { Vector::from_fn(f) }

    /// Inner product of two vectors of one scalar type.
    #[inline(always)]
    pub fn dot<T: Number, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T
    { dot_with(a, b, |x, y| x * y) }

    /// Inner product, in the common scalar type.
    ///
    /// The sum starts from zero, so empty vectors have a dot product of zero.
    #[inline]
    pub fn dot_product<A, B, const N: usize>(v: &Vector<A, N>, w: &Vector<B, N>) -> Promoted<A, B>
    where A: CommonType<B>, B: Number,
    { dot_with(v, w, promoted_mul::<A, B>) }

    /// Cross product, in the common scalar type.
    #[inline]
    pub fn cross_product<A, B>(v: &Vec3<A>, w: &Vec3<B>) -> Vec3<Promoted<A, B>>
    where A: CommonType<B>, B: Number,
    {
        let (v, w) = promote_pair(v, w);
        cross_with(&v, &w)
    }

    /// `u · (v × w)`, in the common scalar type of all three.
    #[inline]
    pub fn triple_product<A, B, C>(u: &Vec3<A>, v: &Vec3<B>, w: &Vec3<C>) -> Promoted<A, Promoted<B, C>>
    where
        A: CommonType<Promoted<B, C>>,
        B: CommonType<C>,
        C: Number,
    { dot_product(u, &cross_product(v, w)) }

    /// Squared magnitude, in the vector's own scalar type.
    #[inline(always)]
    pub fn sqnorm<T: Number, const N: usize>(v: &Vector<T, N>) -> T
    { dot(v, v) }

    /// Euclidean length.
    ///
    /// Integer vectors are converted to `f64` before squaring.
    #[inline]
    pub fn magnitude<T: Number, const N: usize>(v: &Vector<T, N>) -> T::Float
    { float_norm(&to_float(v)) }

    /// The unit vector in the direction of `v`.
    ///
    /// A zero vector has no direction; the result is all NaN.
    #[inline]
    pub fn dir<T: Number, const N: usize>(v: &Vector<T, N>) -> Vector<T::Float, N> {
        let v = to_float(v);
        let norm = float_norm(&v);
        v.map(|x| x / norm)
    }

    /// The projection of `w` onto `v`, in the common scalar type.
    ///
    /// When `v` is a zero vector, float results are all NaN and integer
    /// results panic from division by zero.  Integer projections truncate
    /// the scale factor.
    #[inline]
    pub fn projection<A, B, const N: usize>(v: &Vector<A, N>, w: &Vector<B, N>) -> Vector<Promoted<A, B>, N>
    where A: CommonType<B>, B: Number,
    {
        let (v, w) = promote_pair(v, w);
        let scale = dot(&v, &w) / dot(&v, &v);
        v.map(|x| x * scale)
    }

    /// The matrix whose row `m` is `w` scaled by `v[m]`.
    #[inline]
    pub fn outer_product<A, B, const N1: usize, const N2: usize>(
        v: &Vector<A, N1>,
        w: &Vector<B, N2>,
    ) -> Matrix<Promoted<A, B>, N1, N2>
    where A: CommonType<B>, B: Number,
    { Matrix::from_fn(|m| Vector::from_fn(|n| promoted_mul::<A, B>(v[m], w[n]))) }

    /// Get the shortest angle (as a value in `[0, pi]`) between two vectors.
    ///
    /// The cosine is clamped to `[-1, 1]` before taking the arccosine.
    #[inline]
    pub fn angle_between<T: Number, const N: usize>(v: &Vector<T, N>, w: &Vector<T, N>) -> T::Float {
        let (v, w) = (to_float(v), to_float(w));
        let arg = dot(&v, &w) / Real::sqrt(sqnorm(&v) * sqnorm(&w));
        let one = <T::Float as One>::one();
        arg.min(one).max(-one).acos()
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation details.
// ---------------------------------------------------------------------------

// The kernel behind both `vee::dot` and `vee::dot_product`.
#[inline(always)]
pub(crate) fn dot_with<A, B, C, F, const N: usize>(v: &NumArray<A, N>, w: &NumArray<B, N>, mut mul: F) -> C
where
    A: Copy,
    B: Copy,
    C: Number,
    F: FnMut(A, B) -> C,
{
    v.iter().zip(w.iter())
        .fold(C::zero(), |acc, (&a, &b)| acc + mul(a, b))
}

#[inline(always)]
fn cross_with<T: Number>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    NumArray([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

#[inline(always)]
pub(crate) fn promoted_mul<A, B>(a: A, b: B) -> Promoted<A, B>
where A: CommonType<B>, B: Number,
{ <A as CommonType<B>>::promote(a) * <A as CommonType<B>>::promote_rhs(b) }

#[inline(always)]
fn promote_pair<A, B, const N: usize>(
    v: &Vector<A, N>,
    w: &Vector<B, N>,
) -> (Vector<Promoted<A, B>, N>, Vector<Promoted<A, B>, N>)
where A: CommonType<B>, B: Number,
{
    (
        v.map(<A as CommonType<B>>::promote),
        w.map(<A as CommonType<B>>::promote_rhs),
    )
}

#[inline(always)]
fn to_float<T: Number, const N: usize>(v: &Vector<T, N>) -> Vector<T::Float, N>
{ v.map(|x| x.to_float()) }

#[inline(always)]
fn float_norm<F: Real, const N: usize>(v: &Vector<F, N>) -> F
{ vee::sqnorm(v).sqrt() }

// ---------------------------------------------------------------------------

// stdlib integration

impl<E: Element + AddAssign, const M: usize> std::iter::Sum for NumArray<E, M> {
    fn sum<I: Iterator<Item=NumArray<E, M>>>(iter: I) -> Self {
        iter.fold(NumArray::zero(), |a, b| a + b)
    }
}

impl<'a, E: Element + AddAssign, const M: usize> std::iter::Sum<&'a NumArray<E, M>> for NumArray<E, M> {
    fn sum<I: Iterator<Item=&'a NumArray<E, M>>>(iter: I) -> Self {
        iter.fold(NumArray::zero(), |a, &b| a + b)
    }
}

impl<E: Element + AddAssign, const M: usize> Zero for NumArray<E, M> {
    #[inline]
    fn zero() -> Self
    { <Self as Element>::splat(Zero::zero()) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.flat().iter().all(Zero::is_zero) }
}

// ---------------------------------------------------------------------------
