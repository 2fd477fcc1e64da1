/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use num_traits::{Zero, One};

use crate::{Number, CommonType, Promoted};
use crate::types::*;
use crate::methods_v::promoted_mul;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<T: Number, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Transpose the matrix.
    #[inline(always)]
    pub fn t(&self) -> Matrix<T, N, M>
    { mat::transpose(self) }

    /// Get a copy of row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, N>
    { *self.at(i) }

    /// Get a copy of column `j`.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<T, M> {
        assert!(j < N, "Invalid column for matrix with {} columns: {}", N, j);
        Vector::from_fn(|r| self[r][j])
    }
}

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Get the identity matrix.
    #[inline(always)]
    pub fn eye() -> Self
    { mat::eye() }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> T
    { (0..N).map(|i| self[i][i]).sum() }

    /// Get the matrix determinant.  Only 2x2 and 3x3 matrices have one.
    #[inline(always)]
    pub fn det(&self) -> T
    where Self: Det<Output = T>,
    { Det::det(self) }
}

pub mod mat {
    //! Matrix algebra as free functions.
    //!
    //! Matrices are stored as arrays of rows.  Products of two operands
    //! accept different scalar types and compute in their common type.
    //! (see [`Promoted`])

    use super::*;

    /// Construct a matrix from a plain array of rows.
    #[inline(always)]
    pub fn from_array<T: Number, const M: usize, const N: usize>(arr: [[T; N]; M]) -> Matrix<T, M, N>
    { Matrix::from(arr) }

    /// Construct a matrix from a function on row and column indices.
    #[inline]
    pub fn from_fn<T, F, const M: usize, const N: usize>(mut f: F) -> NumArray<NumArray<T, N>, M>
    where F: FnMut(usize, usize) -> T,
    { NumArray::from_fn(|r| NumArray::from_fn(|c| f(r, c))) }

    /// Get the identity matrix.
    #[inline]
    pub fn eye<T: Number, const N: usize>() -> Matrix<T, N, N>
    { from_fn(|r, c| if r == c { T::one() } else { T::zero() }) }

    /// Swap rows and columns.
    #[inline]
    pub fn transpose<E: Copy, const M: usize, const N: usize>(
        m: &NumArray<NumArray<E, N>, M>,
    ) -> NumArray<NumArray<E, M>, N>
    { from_fn(|r, c| m[c][r]) }

    /// Get the matrix determinant.  Only 2x2 and 3x3 matrices have one.
    #[inline(always)]
    pub fn det<D: Det>(m: &D) -> D::Output
    { m.det() }

    /// `M×N` times `N×P`, in the common scalar type.
    #[inline]
    pub fn matrix_product<A, B, const M: usize, const N: usize, const P: usize>(
        a: &Matrix<A, M, N>,
        b: &Matrix<B, N, P>,
    ) -> Matrix<Promoted<A, B>, M, P>
    where A: CommonType<B>, B: Number,
    { matrix_product_with(a, b, promoted_mul::<A, B>) }

    /// Row vector times matrix, in the common scalar type.
    #[inline]
    pub fn vector_matrix_product<A, B, const M: usize, const N: usize>(
        v: &Vector<A, M>,
        b: &Matrix<B, M, N>,
    ) -> Vector<Promoted<A, B>, N>
    where A: CommonType<B>, B: Number,
    { vector_matrix_product_with(v, b, promoted_mul::<A, B>) }

    /// Matrix times column vector, in the common scalar type.
    #[inline]
    pub fn matrix_vector_product<A, B, const M: usize, const N: usize>(
        a: &Matrix<A, M, N>,
        v: &Vector<B, N>,
    ) -> Vector<Promoted<A, B>, M>
    where A: CommonType<B>, B: Number,
    { matrix_vector_product_with(a, v, promoted_mul::<A, B>) }
}

/// Implementation detail of the inherent method `Matrix::det`.
///
/// Implemented for 2x2 and 3x3 matrices.
pub trait Det {
    type Output;

    fn det(&self) -> Self::Output;
}

impl<T: Number> Det for Mat2<T> {
    type Output = T;

    #[inline]
    fn det(&self) -> T {
        let [[a, b], [c, d]]: [[T; 2]; 2] = (*self).into();
        a * d - b * c
    }
}

// rule of Sarrus, with the subtractions last so that unsigned
// determinants only underflow when the result is negative.
impl<T: Number> Det for Mat3<T> {
    type Output = T;

    #[inline]
    fn det(&self) -> T {
        let m = self;
        let pos = T::zero()
            + m[0][0] * m[1][1] * m[2][2]
            + m[0][1] * m[1][2] * m[2][0]
            + m[0][2] * m[1][0] * m[2][1];
        let neg = T::zero()
            + m[0][2] * m[1][1] * m[2][0]
            + m[0][0] * m[1][2] * m[2][1]
            + m[0][1] * m[1][0] * m[2][2];
        pos - neg
    }
}

// -------------------------- END PUBLIC API ---------------------------------

// The kernels behind both the operators and the promoting functions.

#[inline(always)]
pub(crate) fn matrix_product_with<A, B, C, F, const M: usize, const N: usize, const P: usize>(
    a: &Matrix<A, M, N>,
    b: &Matrix<B, N, P>,
    mut mul: F,
) -> Matrix<C, M, P>
where
    A: Copy,
    B: Copy,
    C: Number,
    F: FnMut(A, B) -> C,
{
    mat::from_fn(|r, c| {
        (0..N).fold(<C as Zero>::zero(), |acc, k| acc + mul(a[r][k], b[k][c]))
    })
}

#[inline(always)]
pub(crate) fn vector_matrix_product_with<A, B, C, F, const M: usize, const N: usize>(
    v: &Vector<A, M>,
    b: &Matrix<B, M, N>,
    mut mul: F,
) -> Vector<C, N>
where
    A: Copy,
    B: Copy,
    C: Number,
    F: FnMut(A, B) -> C,
{
    Vector::from_fn(|c| {
        (0..M).fold(<C as Zero>::zero(), |acc, k| acc + mul(v[k], b[k][c]))
    })
}

#[inline(always)]
pub(crate) fn matrix_vector_product_with<A, B, C, F, const M: usize, const N: usize>(
    a: &Matrix<A, M, N>,
    v: &Vector<B, N>,
    mut mul: F,
) -> Vector<C, M>
where
    A: Copy,
    B: Copy,
    C: Number,
    F: FnMut(A, B) -> C,
{
    Vector::from_fn(|r| {
        (0..N).fold(<C as Zero>::zero(), |acc, k| acc + mul(a[r][k], v[k]))
    })
}

// ---------------------------------------------------------------------------

impl<T: Number, const N: usize> One for Matrix<T, N, N> {
    #[inline(always)]
    fn one() -> Self
    { mat::eye() }
}

// ---------------------------------------------------------------------------
