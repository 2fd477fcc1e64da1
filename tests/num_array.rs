use numarr::{Array3, ConstructionError, Matrix, NumArray, Number, Vector};

use itertools::iproduct;
use pretty_assertions::assert_eq;

#[test]
fn shape_invariants() {
    let v = Vector::<f64, 7>::zero();
    assert_eq!((v.size(), v.order()), (7, 1));
    assert_eq!(v.shape(), vec![7]);

    let m = Matrix::<i32, 2, 5>::zero();
    assert_eq!((m.size(), m.order()), (2, 2));
    assert_eq!((m.extent::<0>(), m.extent::<1>()), (2, 5));
    assert_eq!(m.n_elements(), 10);

    let a = Array3::<u8, 4, 3, 2>::zero();
    assert_eq!((a.size(), a.order()), (4, 3));
    assert_eq!(a.shape(), vec![4, 3, 2]);
    assert_eq!(a[0].shape(), vec![3, 2]);
    assert_eq!(a.flat().len(), 24);

    let deep = NumArray([Array3::<f32, 1, 2, 3>::zero(); 2]);
    assert_eq!(deep.order(), 4);
    assert_eq!(deep.shape(), vec![2, 1, 2, 3]);
}

macro_rules! construction_tests {
    ($($name:ident: $T:ty;)*) => {$(
        #[test]
        fn $name() {
            let x = <$T as Number>::from_usize(3);
            let a = Matrix::<$T, 3, 2>::splat(x);

            // value construction
            assert!(a == x);
            assert_eq!(a, Matrix::from_fn(|_| NumArray::from_fn(|_| x)));

            // copies
            let b = a;
            assert_eq!(a, b);

            // one-element list broadcasts
            assert_eq!(Matrix::<$T, 3, 2>::from_list(&[NumArray([x, x])]), Ok(a));
            assert_eq!(Vector::<$T, 4>::from_list(&[x]), Ok(NumArray([x; 4])));

            // wrong list lengths
            assert_eq!(
                Vector::<$T, 3>::from_list(&[x, x]),
                Err(ConstructionError::WrongLength { expected: 3, actual: 2 }),
            );
            assert_eq!(
                Vector::<$T, 3>::from_list(&[]),
                Err(ConstructionError::WrongLength { expected: 3, actual: 0 }),
            );
        }
    )*};
}

construction_tests! {
    construct_i8: i8;
    construct_u16: u16;
    construct_i64: i64;
    construct_usize: usize;
    construct_f32: f32;
    construct_f64: f64;
}

macro_rules! group_law_tests {
    ($($name:ident: $T:ty;)*) => {$(
        #[test]
        fn $name() {
            let zero: $T = <$T as Number>::from_usize(0);
            let one: $T = <$T as Number>::from_usize(1);
            let two: $T = <$T as Number>::from_usize(2);

            let mut a = Array3::<$T, 2, 3, 2>::zero();
            for (i, x) in a.flat_mut().iter_mut().enumerate() {
                *x = <$T as Number>::from_usize(i);
            }

            assert_eq!(a * two, a + a);
            assert_eq!(two * a, a + a);
            assert_eq!((a + a) / two, a);
            assert_eq!((a + a) - a, a);
            assert!(a - a == zero);
            assert!((a - a) + one == one);

            let mut b = a;
            b += a;
            b -= a;
            b *= two;
            b /= two;
            assert_eq!(b, a);
        }
    )*};
}

group_law_tests! {
    group_laws_u8: u8;
    group_laws_i16: i16;
    group_laws_u32: u32;
    group_laws_i64: i64;
    group_laws_f32: f32;
    group_laws_f64: f64;
}

#[test]
fn signed_group_laws() {
    let a = Matrix::<i32, 3, 3>::from_fn(|r| NumArray::from_fn(|c| (3 * r + c) as i32));
    assert!((a - a) - 1i32 == -1i32);
    assert_eq!(-a + a, Matrix::zero());

    let b = Matrix::<f64, 2, 2>::from([[0.5, -1.0], [2.0, 4.0]]);
    assert!((b - b) - 1.0f64 == -1.0f64);
    assert_eq!(-(-b), b);
}

#[test]
fn multi_index_matches_flat() {
    let mut a = Array3::<i32, 2, 3, 4>::zero();
    for (i, x) in a.flat_mut().iter_mut().enumerate() {
        *x = i as i32;
    }
    for (i, j, k) in iproduct!(0..2, 0..3, 0..4) {
        assert_eq!(a[(i, j, k)], a.flat()[(i * 3 + j) * 4 + k]);
        assert_eq!(a[i][(j, k)], a[i][j][k]);
    }

    a[(1, 2, 3)] = -1;
    assert_eq!(a.flat()[23], -1);
}

#[test]
fn flat_construction() {
    let m = Matrix::<u8, 2, 3>::from_flat(&[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(m, Matrix::from([[1, 2, 3], [4, 5, 6]]));
    assert_eq!(
        Matrix::<u8, 2, 3>::from_flat(&[1, 2, 3]),
        Err(ConstructionError::WrongFlatLength { expected: 6, actual: 3 }),
    );
}

#[test]
fn promoting_functions() {
    let a = Matrix::<u8, 2, 2>::from([[1, 2], [3, 4]]);
    let b = Matrix::<f32, 2, 2>::from([[0.5, 0.5], [1.0, -1.0]]);

    assert_eq!(numarr::add(&a, &b), Matrix::<f32, 2, 2>::from([[1.5, 2.5], [4.0, 3.0]]));
    assert_eq!(numarr::sub(&a, &b), Matrix::<f32, 2, 2>::from([[0.5, 1.5], [2.0, 5.0]]));
    assert_eq!(numarr::mul_scalar(&a, -3i16), Matrix::<i32, 2, 2>::from([[-3, -6], [-9, -12]]));
    assert_eq!(numarr::add_scalar(&a, 0.25f64), Matrix::<f64, 2, 2>::from([[1.25, 2.25], [3.25, 4.25]]));
    assert_eq!(numarr::div_scalar(&a, 2u8), Matrix::<u8, 2, 2>::from([[0, 1], [1, 2]]));
    assert_eq!(numarr::sub_scalar(&a, 1u32), Matrix::<u32, 2, 2>::from([[0, 1], [2, 3]]));

    // narrow mixed-sign operands meet in i32
    let neg = Vector::<i8, 2>::new([-2, 5]);
    let pos = Vector::<u8, 2>::new([3, 250]);
    assert_eq!(numarr::vee::dot_product(&neg, &pos), 1244i32);
    assert_eq!(numarr::sub(&pos, &neg), Vector::<i32, 2>::new([5, 245]));
}

#[test]
fn promoting_equality() {
    let v = Vector::<i32, 3>::new([1, 2, 3]);
    assert!(numarr::eq(&v, &Vector::<f64, 3>::new([1.0, 2.0, 3.0])));
    assert!(numarr::ne(&v, &Vector::<f64, 3>::new([1.0, 2.0, 3.25])));

    let m = Matrix::<u8, 2, 2>::splat(2);
    assert!(numarr::eq_scalar(&m, 2.0f32));
    assert!(numarr::ne_scalar(&m, -2i8));
}

#[test]
fn display() {
    let m = Matrix::<i32, 2, 2>::from([[1, 2], [3, 4]]);
    assert_eq!(m.to_string(), "{ { 1, 2 }, { 3, 4 } }");
    assert_eq!(format!("{:?}", m), "[[1, 2], [3, 4]]");
}
