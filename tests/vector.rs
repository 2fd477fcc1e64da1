#[macro_use]
extern crate numarr_assert_close;

use numarr::{vee, NumArray, Vec2, Vec3, Vector};

use pretty_assertions::assert_eq;

#[test]
fn unit_dot_products() {
    let x = Vec3::<i32>::axis_unit(0);
    let y = Vec3::<i32>::axis_unit(1);
    let z = Vec3::<i32>::axis_unit(2);

    assert_eq!(vee::dot(&x, &y), 0);
    assert_eq!(vee::dot(&x, &x), 1);
    assert_eq!(x.cross(&y), z);
    assert_eq!(y.cross(&x), -z);
    assert_eq!(vee::triple_product(&x, &y, &z), 1);
}

#[test]
fn magnitude() {
    assert_eq!(vee::magnitude(&Vec2::<i32>::new([3, 4])), 5.0);
    assert_eq!(vee::magnitude(&Vec2::<f32>::new([3.0, 4.0])), 5.0f32);
    assert_eq!(vee::sqnorm(&Vec2::<u8>::new([3, 4])), 25);
    assert_eq!(Vec3::<f64>::zero().norm(), 0.0);
}

#[test]
fn outer_product() {
    let v = Vec3::<i32>::new([3, 4, 5]);
    let w = Vec2::<i32>::new([1, 2]);
    assert_eq!(vee::outer_product(&v, &w), NumArray([[3, 6], [4, 8], [5, 10]]).map(NumArray));
    assert_eq!(vee::outer_product(&w, &v), NumArray([[3, 4, 5], [6, 8, 10]]).map(NumArray));

    // mixed scalar types
    let half = Vec2::<f32>::new([0.5, 1.0]);
    let out = vee::outer_product(&v, &half);
    assert_eq!(out[2], NumArray([2.5f32, 5.0]));
}

#[test]
fn mixed_dot_and_cross() {
    let v = Vec3::<i16>::new([1, 2, 3]);
    let w = Vec3::<f64>::new([0.5, 0.5, 0.5]);
    assert_eq!(vee::dot_product(&v, &w), 3.0);
    assert_eq!(vee::cross_product(&v, &w), Vec3::<f64>::new([-0.5, 1.0, -0.5]));
}

#[test]
fn directions_and_angles() {
    let v = Vec3::<f64>::new([0.0, 3.0, 4.0]);
    assert_close!(vee::dir(&v).0, [0.0, 0.6, 0.8]);
    assert_close!(vee::magnitude(&vee::dir(&v)), 1.0);

    let right = vee::angle_between(&Vec2::<i32>::new([1, 0]), &Vec2::<i32>::new([0, 7]));
    assert_close!(right, std::f64::consts::FRAC_PI_2);

    // rounding must not push the cosine out of acos's domain
    let u = Vec3::<f64>::new([0.1, 0.2, 0.3]);
    assert_close!(abs=1e-7, u.angle_to(&(u * 3.0f64)), 0.0);
    assert_close!(abs=1e-7, u.angle_to(&-u), std::f64::consts::PI);
}

#[test]
fn zero_vector_direction_is_nan() {
    let d = vee::dir(&Vec3::<f64>::zero());
    assert!(d.iter().all(|x| x.is_nan()));

    let p = vee::projection(&Vec2::<f64>::zero(), &Vec2::<f64>::new([1.0, 1.0]));
    assert!(p.iter().all(|x| x.is_nan()));
}

#[test]
#[should_panic]
fn zero_vector_integer_projection_panics() {
    vee::projection(&Vec2::<i32>::zero(), &Vec2::<i32>::new([1, 1]));
}

#[test]
fn par_and_perp_decompose() {
    let v = Vector::<f64, 4>::new([1.0, -2.0, 0.5, 3.0]);
    let r = Vector::<f64, 4>::new([0.0, 1.0, 1.0, 0.0]);
    let (par, perp) = (v.par(&r), v.perp(&r));
    assert_close!((par + perp).0, v.0);
    assert_close!(abs=1e-12, vee::dot(&perp, &r), 0.0);
    assert_close!(vee::projection(&r, &v).0, par.0);
}

#[test]
fn sums() {
    let vs = vec![Vec3::<i32>::new([1, 2, 3]); 4];
    assert_eq!(vs.iter().sum::<Vec3<i32>>(), Vec3::<i32>::new([4, 8, 12]));
    assert_eq!(vs.into_iter().sum::<Vec3<i32>>().sum(), 24);
}
