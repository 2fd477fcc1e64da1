/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::fmt;

use num_traits::{Zero, AsPrimitive};
use slice_of_array::prelude::*;
use slice_of_array::IsSliceomorphic;

use crate::{Element, Number, ConstructionError};

// ---------------------------------------------------------------------------

/// A fixed-size numeric array of `M` elements.
///
/// The element type `E` is either a scalar (`f64`, `i32`, ...) or another
/// `NumArray`, so a matrix is an array of rows, a rank-3 array is an array of
/// matrices, and so on.  Storage is a plain `[E; M]` held by value; copying the
/// array copies every scalar.
///
/// Arithmetic operators require both operands to share one scalar type.
/// For mixed scalar types, see the promoting functions at the crate root
/// along with the `vee` and `mat` modules.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NumArray<E, const M: usize>(pub [E; M]);

/// A rank-1 array.
pub type Vector<T, const N: usize> = NumArray<T, N>;
/// A 2-dimensional vector.
pub type Vec2<T = f64> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T = f64> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T = f64> = Vector<T, 4>;

/// A dense matrix with `M` rows and `N` columns, stored as an array of rows.
pub type Matrix<T, const M: usize, const N: usize> = NumArray<NumArray<T, N>, M>;
/// A square dense 2x2 matrix.
pub type Mat2<T = f64> = Matrix<T, 2, 2>;
/// A square dense 3x3 matrix.
pub type Mat3<T = f64> = Matrix<T, 3, 3>;
/// A square dense 4x4 matrix.
pub type Mat4<T = f64> = Matrix<T, 4, 4>;

/// A rank-3 array of shape `(L, M, N)`.
pub type Array3<T, const L: usize, const M: usize, const N: usize> = NumArray<Matrix<T, M, N>, L>;

// ---------------------------------------------------------------------------
// Behaves generally like the backing array type.

pub type Iter<'a, E> = std::slice::Iter<'a, E>;
pub type IterMut<'a, E> = std::slice::IterMut<'a, E>;

impl<E, const M: usize> Deref for NumArray<E, M> {
    type Target = [E; M];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<E, const M: usize> DerefMut for NumArray<E, M> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// Fix a paper cut not solved by Deref, which is that many methods
// take `I: IntoIterator`.
impl<'a, E, const M: usize> IntoIterator for &'a NumArray<E, M> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, E, const M: usize> IntoIterator for &'a mut NumArray<E, M> {
    type Item = &'a mut E;
    type IntoIter = IterMut<'a, E>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<E, const M: usize> IntoIterator for NumArray<E, M> {
    type Item = E;
    type IntoIter = std::array::IntoIter<E, M>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { IntoIterator::into_iter(self.0) }
}

// forward the debug impl without a surrounding "NumArray(...)", so that the
// debug output of integer and float arrays is valid JSON.
impl<E: fmt::Debug, const M: usize> fmt::Debug for NumArray<E, M> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

/// Renders as `{ a, b, c }`, nesting for inner arrays.
///
/// Format parameters such as precision are applied to every scalar.
impl<E: fmt::Display, const M: usize> fmt::Display for NumArray<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        f.write_str(" }")
    }
}

// ---------------------------------------------------------------------------
// Conversions to and from plain arrays.

impl<E, const M: usize> From<[E; M]> for NumArray<E, M> {
    #[inline(always)]
    fn from(arr: [E; M]) -> Self
    { NumArray(arr) }
}

impl<E, const M: usize> From<NumArray<E, M>> for [E; M] {
    #[inline(always)]
    fn from(arr: NumArray<E, M>) -> Self
    { arr.0 }
}

impl<T: Number, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T, M, N> {
    #[inline]
    fn from(arr: [[T; N]; M]) -> Self
    { NumArray(arr.map(NumArray)) }
}

impl<T: Number, const M: usize, const N: usize> From<Matrix<T, M, N>> for [[T; N]; M] {
    #[inline]
    fn from(m: Matrix<T, M, N>) -> Self
    { m.0.map(|row| row.0) }
}

// ---------------------------------------------------------------------------
// The recursive case of `Element`.

// `NumArray` is `repr(transparent)` over `[E; M]`.
unsafe impl<E, const M: usize> IsSliceomorphic for NumArray<E, M> {
    type Element = E;
    const LEN: usize = M;
}

impl<E: Element, const M: usize> crate::traits::element::Sealed for NumArray<E, M> { }

impl<E: Element, const M: usize> Element for NumArray<E, M> {
    type Scalar = E::Scalar;
    type Shape = ([(); M], E::Shape);
    type Rebind<R: Number> = NumArray<E::Rebind<R>, M>;

    const RANK: usize = E::RANK + 1;
    const LEN: usize = E::LEN * M;

    #[inline]
    fn extent_of(axis: usize) -> Option<usize> {
        match axis {
            0 => Some(M),
            n => E::extent_of(n - 1),
        }
    }

    #[inline]
    fn splat(x: E::Scalar) -> Self
    { NumArray([E::splat(x); M]) }

    #[inline]
    fn flatten(items: &[Self]) -> &[E::Scalar]
    { E::flatten(items.flat()) }

    #[inline]
    fn flatten_mut(items: &mut [Self]) -> &mut [E::Scalar]
    { E::flatten_mut(items.flat_mut()) }

    #[inline]
    fn rebind_map<R, F>(&self, f: &mut F) -> Self::Rebind<R>
    where
        R: Number,
        F: FnMut(E::Scalar) -> R,
    { NumArray(std::array::from_fn(|i| self.0[i].rebind_map(&mut *f))) }
}

// Evaluated during monomorphization, so an out-of-range axis is a build error.
struct AxisCheck<A, const AXIS: usize>(PhantomData<A>);

impl<A: Element, const AXIS: usize> AxisCheck<A, AXIS> {
    const OK: () = assert!(AXIS < A::RANK, "axis is not less than the array's rank");
}

// ---------------------------------------------------------------------------

impl<E, const M: usize> NumArray<E, M> {
    #[inline(always)]
    pub const fn new(elems: [E; M]) -> Self
    { NumArray(elems) }

    /// The extent of the first axis.
    #[inline(always)]
    pub const fn size(&self) -> usize
    { M }

    /// An uninitialized array, for code that fills every element before reading.
    ///
    /// Prefer [`NumArray::zero`] or [`NumArray::from_fn`] unless profiling says otherwise.
    #[inline(always)]
    pub const fn uninit() -> MaybeUninit<Self>
    { MaybeUninit::uninit() }

    /// Construct from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> E,
    { NumArray(std::array::from_fn(f)) }

    /// Apply a function to each top-level element.
    #[inline]
    pub fn map<R, F>(self, f: F) -> NumArray<R, M>
    where F: FnMut(E) -> R,
    { NumArray(self.0.map(f)) }

    /// Combine two arrays one top-level element at a time.
    #[inline]
    pub fn zip_map<B, R, F>(self, other: NumArray<B, M>, mut f: F) -> NumArray<R, M>
    where F: FnMut(E, B) -> R,
    {
        let mut other = other.0.into_iter();
        self.map(|a| match other.next() {
            Some(b) => f(a, b),
            None => unreachable!("arrays of equal length"),
        })
    }

    /// Call `f` on each top-level element in index order.
    #[inline]
    pub fn apply<F>(&mut self, mut f: F) -> &mut Self
    where F: FnMut(&mut E),
    {
        for x in &mut self.0 {
            f(x);
        }
        self
    }

    /// Call `f` on each pair of corresponding top-level elements in index order.
    #[inline]
    pub fn apply_with<F>(&mut self, other: &Self, mut f: F) -> &mut Self
    where F: FnMut(&mut E, &E),
    {
        for (a, b) in self.0.iter_mut().zip(&other.0) {
            f(a, b);
        }
        self
    }

    /// Index with a panic message that names the extent.
    ///
    /// Takes a `usize` for one level, or a tuple of 2 to 4 indices that
    /// reaches all the way down to a scalar, like the tuple `Index` impls.
    #[inline]
    pub fn at<I: ArrayIndex<Self>>(&self, index: I) -> &I::Output
    { index.checked(self) }

    /// Mutable form of [`NumArray::at`].
    #[inline]
    pub fn at_mut<I: ArrayIndex<Self>>(&mut self, index: I) -> &mut I::Output
    { index.checked_mut(self) }
}

/// Index types accepted by [`NumArray::at`].
pub trait ArrayIndex<A> {
    type Output;

    fn checked(self, array: &A) -> &Self::Output;

    fn checked_mut(self, array: &mut A) -> &mut Self::Output;
}

impl<E, const M: usize> ArrayIndex<NumArray<E, M>> for usize {
    type Output = E;

    #[inline]
    fn checked(self, array: &NumArray<E, M>) -> &E {
        match array.0.get(self) {
            Some(x) => x,
            None => panic!("index {} out of range for an array of extent {}", self, M),
        }
    }

    #[inline]
    fn checked_mut(self, array: &mut NumArray<E, M>) -> &mut E {
        match array.0.get_mut(self) {
            Some(x) => x,
            None => panic!("index {} out of range for an array of extent {}", self, M),
        }
    }
}

// The first level of a tuple index, kept out of the tuple impls so that
// their where clauses don't steer which impl this picks.
#[inline(always)]
fn outer<E, const M: usize>(i: usize, array: &NumArray<E, M>) -> &E
{ <usize as ArrayIndex<NumArray<E, M>>>::checked(i, array) }

#[inline(always)]
fn outer_mut<E, const M: usize>(i: usize, array: &mut NumArray<E, M>) -> &mut E
{ <usize as ArrayIndex<NumArray<E, M>>>::checked_mut(i, array) }

impl<E, const M: usize> ArrayIndex<NumArray<E, M>> for (usize, usize)
where usize: ArrayIndex<E>,
{
    type Output = <usize as ArrayIndex<E>>::Output;

    #[inline]
    fn checked(self, array: &NumArray<E, M>) -> &Self::Output
    { <usize as ArrayIndex<E>>::checked(self.1, outer(self.0, array)) }

    #[inline]
    fn checked_mut(self, array: &mut NumArray<E, M>) -> &mut Self::Output
    { <usize as ArrayIndex<E>>::checked_mut(self.1, outer_mut(self.0, array)) }
}

impl<E, const M: usize> ArrayIndex<NumArray<E, M>> for (usize, usize, usize)
where (usize, usize): ArrayIndex<E>,
{
    type Output = <(usize, usize) as ArrayIndex<E>>::Output;

    #[inline]
    fn checked(self, array: &NumArray<E, M>) -> &Self::Output
    { <(usize, usize) as ArrayIndex<E>>::checked((self.1, self.2), outer(self.0, array)) }

    #[inline]
    fn checked_mut(self, array: &mut NumArray<E, M>) -> &mut Self::Output
    { <(usize, usize) as ArrayIndex<E>>::checked_mut((self.1, self.2), outer_mut(self.0, array)) }
}

impl<E, const M: usize> ArrayIndex<NumArray<E, M>> for (usize, usize, usize, usize)
where (usize, usize, usize): ArrayIndex<E>,
{
    type Output = <(usize, usize, usize) as ArrayIndex<E>>::Output;

    #[inline]
    fn checked(self, array: &NumArray<E, M>) -> &Self::Output
    { <(usize, usize, usize) as ArrayIndex<E>>::checked((self.1, self.2, self.3), outer(self.0, array)) }

    #[inline]
    fn checked_mut(self, array: &mut NumArray<E, M>) -> &mut Self::Output
    { <(usize, usize, usize) as ArrayIndex<E>>::checked_mut((self.1, self.2, self.3), outer_mut(self.0, array)) }
}

impl<E: Element, const M: usize> NumArray<E, M> {
    /// The number of axes.
    #[inline(always)]
    pub const fn order(&self) -> usize
    { <Self as Element>::RANK }

    /// The extent along `AXIS`.  Fails to build if `AXIS` is not less than the rank.
    #[inline]
    pub fn extent<const AXIS: usize>(&self) -> usize {
        #[allow(clippy::let_unit_value)]
        let () = AxisCheck::<Self, AXIS>::OK;
        match Self::extent_of(AXIS) {
            Some(n) => n,
            None => unreachable!(),
        }
    }

    /// Every extent, outermost first.
    pub fn shape(&self) -> Vec<usize>
    { (0..<Self as Element>::RANK).filter_map(Self::extent_of).collect() }

    /// Total number of scalars.
    #[inline(always)]
    pub const fn n_elements(&self) -> usize
    { <Self as Element>::LEN }

    /// All scalars in row-major order.
    #[inline(always)]
    pub fn flat(&self) -> &[E::Scalar]
    { E::flatten(&self.0) }

    #[inline(always)]
    pub fn flat_mut(&mut self) -> &mut [E::Scalar]
    { E::flatten_mut(&mut self.0) }

    /// Fill every top-level position with a copy of `elem`.
    #[inline]
    pub fn from_elem(elem: E) -> Self
    { NumArray([elem; M]) }

    /// Fill every position with the scalar `x`.
    #[inline]
    pub fn splat(x: E::Scalar) -> Self
    { <Self as Element>::splat(x) }

    #[inline]
    pub fn zero() -> Self
    { Self::splat(Zero::zero()) }

    /// Construct from a list of top-level elements.
    ///
    /// A single element is broadcast to every position.  Otherwise the list
    /// must have exactly `M` elements.
    pub fn from_list(elems: &[E]) -> Result<Self, ConstructionError> {
        match elems.len() {
            1 => Ok(Self::from_elem(elems[0])),
            n if n == M => Ok(Self::from_fn(|i| elems[i])),
            actual => Err(ConstructionError::WrongLength { expected: M, actual }),
        }
    }

    /// Construct from all scalars in row-major order.
    pub fn from_flat(scalars: &[E::Scalar]) -> Result<Self, ConstructionError> {
        let expected = <Self as Element>::LEN;
        if scalars.len() != expected {
            return Err(ConstructionError::WrongFlatLength { expected, actual: scalars.len() });
        }
        let mut out = Self::zero();
        out.flat_mut().copy_from_slice(scalars);
        Ok(out)
    }

    /// Convert every scalar with `as`.
    #[inline]
    pub fn cast<R: Number>(&self) -> NumArray<E::Rebind<R>, M>
    where E::Scalar: AsPrimitive<R>,
    { self.rebind_map(&mut |x: E::Scalar| x.as_()) }

    /// Replace every scalar by its absolute value.
    #[inline]
    pub fn abs(mut self) -> Self {
        for x in self.flat_mut() {
            *x = Number::abs(*x);
        }
        self
    }

    /// Sum of every scalar.
    #[inline]
    pub fn sum(&self) -> E::Scalar
    { self.flat().iter().copied().sum() }

    /// Product of every scalar.
    #[inline]
    pub fn product(&self) -> E::Scalar
    { self.flat().iter().copied().product() }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_queries() {
        let v = Vec3::<f32>::zero();
        assert_eq!((v.size(), v.order(), v.n_elements()), (3, 1, 3));
        assert_eq!(v.shape(), vec![3]);

        let m = Matrix::<i32, 2, 5>::zero();
        assert_eq!((m.size(), m.order(), m.n_elements()), (2, 2, 10));
        assert_eq!((m.extent::<0>(), m.extent::<1>()), (2, 5));

        let a = Array3::<u8, 4, 3, 2>::zero();
        assert_eq!((a.size(), a.order(), a.n_elements()), (4, 3, 24));
        assert_eq!(a.shape(), vec![4, 3, 2]);
        assert_eq!(a.extent::<2>(), 2);
    }

    #[test]
    fn flat_is_row_major() {
        let m = Matrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.flat(), &[1, 2, 3, 4, 5, 6]);

        let mut a = Array3::<i32, 2, 2, 2>::zero();
        a.flat_mut()[5] = 7;
        assert_eq!(a[1][0][1], 7);
    }

    #[test]
    fn from_list() {
        let v = Vec3::<i32>::from_list(&[1, 2, 3]).unwrap();
        assert_eq!(v, NumArray([1, 2, 3]));

        let v = Vec3::<i32>::from_list(&[4]).unwrap();
        assert_eq!(v, NumArray([4, 4, 4]));

        assert_eq!(
            Vec3::<i32>::from_list(&[1, 2]),
            Err(ConstructionError::WrongLength { expected: 3, actual: 2 }),
        );
        assert!(Vec3::<i32>::from_list(&[]).is_err());

        // elements of a matrix are rows
        let row = NumArray([1.0, 2.0]);
        let m = Mat2::<f64>::from_list(&[row]).unwrap();
        assert_eq!(m, NumArray([row, row]));
    }

    #[test]
    fn from_flat() {
        let m = Matrix::<u16, 2, 2>::from_flat(&[1, 2, 3, 4]).unwrap();
        assert_eq!(m, Matrix::from([[1, 2], [3, 4]]));
        assert_eq!(
            Matrix::<u16, 2, 2>::from_flat(&[1, 2, 3]),
            Err(ConstructionError::WrongFlatLength { expected: 4, actual: 3 }),
        );
    }

    #[test]
    fn uninit_then_fill() {
        let mut out = Vec4::<f64>::uninit();
        let filled = unsafe {
            let p = out.as_mut_ptr() as *mut f64;
            for i in 0..4 {
                p.add(i).write(i as f64);
            }
            out.assume_init()
        };
        assert_eq!(filled, NumArray([0.0, 1.0, 2.0, 3.0]));
    }

    #[test]
    fn splat_vs_from_elem() {
        let m = Mat3::<i8>::splat(2);
        assert_eq!(m, Mat3::<i8>::from_elem(NumArray([2; 3])));
        assert!(m.flat().iter().all(|&x| x == 2));
    }

    #[test]
    fn cast() {
        let m = Matrix::<f64, 1, 3>::from([[1.5, -2.5, 3.0]]);
        let c: Matrix<i32, 1, 3> = m.cast();
        assert_eq!(c, Matrix::from([[1, -2, 3]]));
    }

    #[test]
    fn apply_and_apply_with() {
        let mut v = NumArray([1, 2, 3]);
        v.apply(|x| *x *= 10).apply(|x| *x += 1);
        assert_eq!(v, NumArray([11, 21, 31]));

        let w = NumArray([1, 1, 2]);
        v.apply_with(&w, |a, b| *a -= *b);
        assert_eq!(v, NumArray([10, 20, 29]));
    }

    #[test]
    fn abs_sum_product() {
        let m = Matrix::<i64, 2, 2>::from([[-1, 2], [3, -4]]);
        assert_eq!(m.abs(), Matrix::from([[1, 2], [3, 4]]));
        assert_eq!(m.sum(), 0);
        assert_eq!(m.product(), 24);
    }

    #[test]
    fn zip_map() {
        let a = NumArray([1, 2, 3]);
        let b = NumArray([0.5, 0.25, 0.125]);
        assert_eq!(a.zip_map(b, |a, b| a as f64 * b), NumArray([0.5, 0.5, 0.375]));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn at_panics() {
        let v = Vec2::<f64>::zero();
        let _ = v.at(2);
    }

    #[test]
    fn at_takes_multi_indices() {
        let mut a = Array3::<i32, 2, 3, 4>::from_fn(|i| {
            Matrix::from_fn(|j| NumArray::from_fn(|k| (100 * i + 10 * j + k) as i32))
        });
        assert_eq!(*a.at(1), a[1]);
        assert_eq!(*a.at((1, 2)), a[1][2]);
        assert_eq!(*a.at((1, 2, 3)), 123);
        *a.at_mut((0, 1, 2)) = -1;
        assert_eq!(a[(0, 1, 2)], -1);

        let deep = NumArray([a; 2]);
        assert_eq!(*deep.at((1, 1, 0, 3)), 103);
    }

    #[test]
    #[should_panic(expected = "index 3 out of range for an array of extent 3")]
    fn at_multi_index_names_the_bad_level() {
        let m = Matrix::<f64, 2, 3>::zero();
        let _ = m.at((1, 3));
    }

    #[test]
    fn display() {
        let m = Matrix::<i32, 2, 2>::from([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "{ { 1, 2 }, { 3, 4 } }");
        assert_eq!(format!("{:.2}", NumArray([1.0, 1.0 / 3.0])), "{ 1.00, 0.33 }");
        assert_eq!(format!("{:?}", m), "[[1, 2], [3, 4]]");
    }
}
