/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::ops::{Index, IndexMut};

use crate::{Element, Number, CommonType, Promoted};
use crate::types::*;
use crate::methods_m::{matrix_product_with, matrix_vector_product_with, vector_matrix_product_with};

// ---------------------------------------------------------------------------
// indexing

impl<E, const M: usize> Index<usize> for NumArray<E, M> {
    type Output = E;

    #[inline(always)]
    fn index(&self, i: usize) -> &E
    { &self.0[i] }
}

impl<E, const M: usize> IndexMut<usize> for NumArray<E, M> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut E
    { &mut self.0[i] }
}

// Multi-indices must reach all the way down to a scalar; `m[(i, j)]` on a
// rank-3 array does not compile.
impl<E, const M: usize> Index<(usize, usize)> for NumArray<E, M>
where E: Element + Index<usize, Output = <E as Element>::Scalar>,
{
    type Output = E::Scalar;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &E::Scalar
    { &self.0[i][j] }
}

impl<E, const M: usize> IndexMut<(usize, usize)> for NumArray<E, M>
where E: Element + IndexMut<usize, Output = <E as Element>::Scalar>,
{
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut E::Scalar
    { &mut self.0[i][j] }
}

impl<E, const M: usize> Index<(usize, usize, usize)> for NumArray<E, M>
where E: Element + Index<(usize, usize), Output = <E as Element>::Scalar>,
{
    type Output = E::Scalar;

    #[inline(always)]
    fn index(&self, (i, j, k): (usize, usize, usize)) -> &E::Scalar
    { &self.0[i][(j, k)] }
}

impl<E, const M: usize> IndexMut<(usize, usize, usize)> for NumArray<E, M>
where E: Element + IndexMut<(usize, usize), Output = <E as Element>::Scalar>,
{
    #[inline(always)]
    fn index_mut(&mut self, (i, j, k): (usize, usize, usize)) -> &mut E::Scalar
    { &mut self.0[i][(j, k)] }
}

impl<E, const M: usize> Index<(usize, usize, usize, usize)> for NumArray<E, M>
where E: Element + Index<(usize, usize, usize), Output = <E as Element>::Scalar>,
{
    type Output = E::Scalar;

    #[inline(always)]
    fn index(&self, (i, j, k, l): (usize, usize, usize, usize)) -> &E::Scalar
    { &self.0[i][(j, k, l)] }
}

impl<E, const M: usize> IndexMut<(usize, usize, usize, usize)> for NumArray<E, M>
where E: Element + IndexMut<(usize, usize, usize), Output = <E as Element>::Scalar>,
{
    #[inline(always)]
    fn index_mut(&mut self, (i, j, k, l): (usize, usize, usize, usize)) -> &mut E::Scalar
    { &mut self.0[i][(j, k, l)] }
}

// ---------------------------------------------------------------------------
// assign ops

// NOTE: Operator impls are deliberately between same-typed operands,
//       rather than e.g. NumArray<T> and NumArray<U> where T: Add<U>.
//       Mixed scalar types go through the promoting functions below.

// array `op=` scalar
gen_each!{
    // NOTE: the orphan rules prevent the commuted impls below from being
    //       generic over X: Number, so we generate one impl per scalar type.
    //       The assign ops follow suit so that the bounds line up.
    @{number}
    impl_scalar_assign_ops!({$X:ty}) => {
        impl<E, const M: usize> AddAssign<$X> for NumArray<E, M>
        where E: Element<Scalar = $X> + AddAssign<$X>,
        {
            #[inline]
            fn add_assign(&mut self, rhs: $X)
            { self.apply(|x| *x += rhs); }
        }

        impl<E, const M: usize> SubAssign<$X> for NumArray<E, M>
        where E: Element<Scalar = $X> + SubAssign<$X>,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: $X)
            { self.apply(|x| *x -= rhs); }
        }

        impl<E, const M: usize> MulAssign<$X> for NumArray<E, M>
        where E: Element<Scalar = $X> + MulAssign<$X>,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $X)
            { self.apply(|x| *x *= rhs); }
        }

        impl<E, const M: usize> DivAssign<$X> for NumArray<E, M>
        where E: Element<Scalar = $X> + DivAssign<$X>,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $X)
            { self.apply(|x| *x /= rhs); }
        }

        // array * scalar
        impl<E, const M: usize> Mul<$X> for NumArray<E, M>
        where Self: MulAssign<$X>,
        {
            type Output = Self;

            #[inline]
            fn mul(mut self, rhs: $X) -> Self
            { self *= rhs; self }
        }

        // scalar * array
        impl<E, const M: usize> Mul<NumArray<E, M>> for $X
        where NumArray<E, M>: MulAssign<$X>,
        {
            type Output = NumArray<E, M>;

            #[inline]
            fn mul(self, mut rhs: NumArray<E, M>) -> NumArray<E, M>
            { rhs *= self; rhs }
        }

        // broadcast comparison
        impl<E, const M: usize> PartialEq<$X> for NumArray<E, M>
        where E: Element<Scalar = $X>,
        {
            #[inline]
            fn eq(&self, rhs: &$X) -> bool
            { self.flat().iter().all(|x| x == rhs) }
        }
    }
}

// array += array
impl<E: Element + AddAssign, const M: usize> AddAssign for NumArray<E, M> {
    #[inline]
    fn add_assign(&mut self, rhs: Self)
    { self.apply_with(&rhs, |a, &b| *a += b); }
}

// array -= array
impl<E: Element + SubAssign, const M: usize> SubAssign for NumArray<E, M> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self)
    { self.apply_with(&rhs, |a, &b| *a -= b); }
}

// ---------------------------------------------------------------------------
// binary ops, as copy-then-assign

impl<E, B, const M: usize> Add<B> for NumArray<E, M>
where Self: AddAssign<B>,
{
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: B) -> Self
    { self += rhs; self }
}

impl<E, B, const M: usize> Sub<B> for NumArray<E, M>
where Self: SubAssign<B>,
{
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: B) -> Self
    { self -= rhs; self }
}

// No `Mul<B>` counterpart; it would overlap with the matrix products.
impl<E, B, const M: usize> Div<B> for NumArray<E, M>
where Self: DivAssign<B>,
{
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: B) -> Self
    { self /= rhs; self }
}

// -array
impl<E: Element + Neg<Output = E>, const M: usize> Neg for NumArray<E, M> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self
    { self.apply(|x| *x = -*x); self }
}

// ---------------------------------------------------------------------------
// matrix products

// matrix * matrix
impl<T: Number, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N> {
    type Output = Matrix<T, M, P>;

    #[inline]
    fn mul(self, other: Matrix<T, N, P>) -> Self::Output
    { matrix_product_with(&self, &other, |a, b| a * b) }
}

// matrix * column vector
impl<T: Number, const M: usize, const N: usize> Mul<Vector<T, N>> for Matrix<T, M, N> {
    type Output = Vector<T, M>;

    #[inline]
    fn mul(self, other: Vector<T, N>) -> Self::Output
    { matrix_vector_product_with(&self, &other, |a, b| a * b) }
}

// row vector * matrix
impl<T: Number, const M: usize, const N: usize> Mul<Matrix<T, M, N>> for Vector<T, M> {
    type Output = Vector<T, N>;

    #[inline]
    fn mul(self, other: Matrix<T, M, N>) -> Self::Output
    { vector_matrix_product_with(&self, &other, |a, b| a * b) }
}

// ---------------------------------------------------------------------------
// promoting elementwise functions

type PromotedArray<A, B> = <A as Element>::Rebind<Promoted<<A as Element>::Scalar, <B as Element>::Scalar>>;
type PromotedScalarArray<A, S> = <A as Element>::Rebind<Promoted<<A as Element>::Scalar, S>>;

#[inline]
fn zip_promoted<A, B, F>(a: &A, b: &B, mut f: F) -> PromotedArray<A, B>
where
    A: Element,
    B: Element<Shape = A::Shape>,
    A::Scalar: CommonType<B::Scalar>,
    F: FnMut(Promoted<A::Scalar, B::Scalar>, Promoted<A::Scalar, B::Scalar>) -> Promoted<A::Scalar, B::Scalar>,
{
    // equal shapes imply equal flat lengths, visited in the same order
    let mut rhs = B::flatten(std::slice::from_ref(b)).iter();
    a.rebind_map(&mut |x| match rhs.next() {
        Some(&y) => f(
            <A::Scalar as CommonType<B::Scalar>>::promote(x),
            <A::Scalar as CommonType<B::Scalar>>::promote_rhs(y),
        ),
        None => unreachable!("arrays of one shape have one length"),
    })
}

#[inline]
fn map_promoted<A, S, F>(a: &A, s: S, mut f: F) -> PromotedScalarArray<A, S>
where
    A: Element,
    S: Number,
    A::Scalar: CommonType<S>,
    F: FnMut(Promoted<A::Scalar, S>, Promoted<A::Scalar, S>) -> Promoted<A::Scalar, S>,
{
    let s = <A::Scalar as CommonType<S>>::promote_rhs(s);
    a.rebind_map(&mut |x| f(<A::Scalar as CommonType<S>>::promote(x), s))
}

/// Elementwise sum of two arrays of one shape, in their common scalar type.
///
/// ```
/// use numarr_array::{add, NumArray};
///
/// let out = add(&NumArray([1i32, 2]), &NumArray([0.5f32, 0.25]));
/// assert_eq!(out, NumArray([1.5f32, 2.25]));
/// ```
pub fn add<A, B>(a: &A, b: &B) -> PromotedArray<A, B>
where
    A: Element,
    B: Element<Shape = A::Shape>,
    A::Scalar: CommonType<B::Scalar>,
{ zip_promoted(a, b, |x, y| x + y) }

/// Elementwise difference of two arrays of one shape, in their common scalar type.
pub fn sub<A, B>(a: &A, b: &B) -> PromotedArray<A, B>
where
    A: Element,
    B: Element<Shape = A::Shape>,
    A::Scalar: CommonType<B::Scalar>,
{ zip_promoted(a, b, |x, y| x - y) }

/// Add a scalar to every element, in the common scalar type.
pub fn add_scalar<A, S>(a: &A, s: S) -> PromotedScalarArray<A, S>
where
    A: Element,
    S: Number,
    A::Scalar: CommonType<S>,
{ map_promoted(a, s, |x, s| x + s) }

/// Subtract a scalar from every element, in the common scalar type.
pub fn sub_scalar<A, S>(a: &A, s: S) -> PromotedScalarArray<A, S>
where
    A: Element,
    S: Number,
    A::Scalar: CommonType<S>,
{ map_promoted(a, s, |x, s| x - s) }

/// Multiply every element by a scalar, in the common scalar type.
pub fn mul_scalar<A, S>(a: &A, s: S) -> PromotedScalarArray<A, S>
where
    A: Element,
    S: Number,
    A::Scalar: CommonType<S>,
{ map_promoted(a, s, |x, s| x * s) }

/// Divide every element by a scalar, in the common scalar type.
///
/// Integer division by zero panics; float division by zero follows IEEE 754.
pub fn div_scalar<A, S>(a: &A, s: S) -> PromotedScalarArray<A, S>
where
    A: Element,
    S: Number,
    A::Scalar: CommonType<S>,
{ map_promoted(a, s, |x, s| x / s) }

/// Elementwise equality of two arrays of one shape, compared in their common scalar type.
///
/// ```
/// use numarr_array::{eq, NumArray};
///
/// assert!(eq(&NumArray([1i32, 2]), &NumArray([1.0f64, 2.0])));
/// assert!(!eq(&NumArray([-1i8]), &NumArray([255u8])));
/// ```
pub fn eq<A, B>(a: &A, b: &B) -> bool
where
    A: Element,
    B: Element<Shape = A::Shape>,
    A::Scalar: CommonType<B::Scalar>,
{
    let lhs = A::flatten(std::slice::from_ref(a));
    let rhs = B::flatten(std::slice::from_ref(b));
    lhs.iter().zip(rhs).all(|(&x, &y)| {
        <A::Scalar as CommonType<B::Scalar>>::promote(x)
            == <A::Scalar as CommonType<B::Scalar>>::promote_rhs(y)
    })
}

/// Negation of [`eq`].
pub fn ne<A, B>(a: &A, b: &B) -> bool
where
    A: Element,
    B: Element<Shape = A::Shape>,
    A::Scalar: CommonType<B::Scalar>,
{ !eq(a, b) }

/// Whether every element equals `s`, compared in the common scalar type.
pub fn eq_scalar<A, S>(a: &A, s: S) -> bool
where
    A: Element,
    S: Number,
    A::Scalar: CommonType<S>,
{
    let s = <A::Scalar as CommonType<S>>::promote_rhs(s);
    A::flatten(std::slice::from_ref(a)).iter()
        .all(|&x| <A::Scalar as CommonType<S>>::promote(x) == s)
}

/// Negation of [`eq_scalar`].
pub fn ne_scalar<A, S>(a: &A, s: S) -> bool
where
    A: Element,
    S: Number,
    A::Scalar: CommonType<S>,
{ !eq_scalar(a, s) }

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_index() {
        let mut m = Matrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m[(1, 2)], 6);
        m[(0, 1)] = 20;
        assert_eq!(m[0], NumArray([1, 20, 3]));

        let mut a = Array3::<u8, 2, 2, 2>::zero();
        a[(1, 0, 1)] = 3;
        assert_eq!(a.flat(), &[0, 0, 0, 0, 0, 3, 0, 0]);
        assert_eq!(a[(1, 0, 1)], a[1][0][1]);

        let mut b = NumArray::<Array3<f64, 2, 2, 2>, 2>::zero();
        b[(1, 1, 1, 1)] = 1.0;
        assert_eq!(b.flat()[15], 1.0);
    }

    #[test]
    fn scalar_ops() {
        let v = NumArray([1.0, 2.0, 3.0]);
        assert_eq!(v * 2.0, NumArray([2.0, 4.0, 6.0]));
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(v / 2.0, NumArray([0.5, 1.0, 1.5]));
        assert_eq!(v + 1.0, NumArray([2.0, 3.0, 4.0]));
        assert_eq!(v - 1.0, NumArray([0.0, 1.0, 2.0]));

        let mut m = Matrix::<u32, 2, 2>::from([[1, 2], [3, 4]]);
        m *= 3u32;
        m -= 1u32;
        assert_eq!(m, Matrix::from([[2, 5], [8, 11]]));
    }

    #[test]
    fn array_ops() {
        let a = Matrix::<i16, 2, 2>::from([[1, 2], [3, 4]]);
        let b = Matrix::<i16, 2, 2>::from([[4, 3], [2, 1]]);
        assert_eq!(a + b, 5i16);
        assert_eq!(a - b, Matrix::from([[-3, -1], [1, 3]]));
        assert_eq!(-a, Matrix::from([[-1, -2], [-3, -4]]));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn broadcast_eq() {
        let m = Mat3::<f32>::splat(0.5);
        assert!(m == 0.5f32);
        assert!(m != 1.0f32);

        let mut m = m;
        m[(2, 2)] = 1.0;
        assert!(m != 0.5f32);
    }

    #[test]
    fn matrix_operators() {
        let a = Matrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::<i32, 3, 1>::from([[1], [0], [-1]]);
        assert_eq!(a * b, Matrix::from([[-2], [-2]]));
        assert_eq!(a * NumArray([1, 0, -1]), NumArray([-2, -2]));
        assert_eq!(NumArray([1, 1]) * a, NumArray([5, 7, 9]));
    }

    #[test]
    fn promoting_functions() {
        let a = NumArray([1u8, 2, 3]);
        let b = NumArray([-1i32, -1, -1]);
        let c: NumArray<i32, 3> = add(&a, &b);
        assert_eq!(c, NumArray([0, 1, 2]));

        let d: NumArray<f64, 3> = sub(&a, &NumArray([0.5, 0.5, 0.5]));
        assert_eq!(d, NumArray([0.5, 1.5, 2.5]));

        let m = Matrix::<i64, 2, 2>::from([[1, 2], [3, 4]]);
        let half: Matrix<f64, 2, 2> = div_scalar(&m, 2.0f64);
        assert_eq!(half, Matrix::from([[0.5, 1.0], [1.5, 2.0]]));
        let twice: Matrix<f32, 2, 2> = mul_scalar(&m, 2.0f32);
        assert_eq!(twice, Matrix::from([[2.0, 4.0], [6.0, 8.0]]));

        assert_eq!(add_scalar(&a, 1u32), NumArray([2u32, 3, 4]));
        assert_eq!(add_scalar(&a, 1u16), NumArray([2i32, 3, 4]));
        assert_eq!(sub_scalar(&a, 4i8), NumArray([-3i32, -2, -1]));
    }

    #[test]
    fn promoting_equality() {
        let a = Vec3::<i32>::new([1, 2, 3]);
        assert!(eq(&a, &Vec3::<f64>::new([1.0, 2.0, 3.0])));
        assert!(ne(&a, &Vec3::<f64>::new([1.0, 2.0, 3.5])));
        assert!(eq(&Vec3::<f64>::new([1.0, 2.0, 3.0]), &a));

        let m = Matrix::<u8, 2, 3>::splat(2);
        assert!(eq_scalar(&m, 2.0f32));
        assert!(ne_scalar(&m, 2.5f32));
        assert!(ne_scalar(&NumArray([-1i8, -1]), 255u8));

        // a single differing scalar deep inside is enough
        let mut n = m;
        n[(1, 2)] = 3;
        assert!(ne(&m, &n.cast::<i64>()));
        assert!(ne_scalar(&n, 2i16));
    }
}
