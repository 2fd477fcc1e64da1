/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The arithmetic common type of two scalar types.
//!
//! Infix operators on `NumArray` only accept operands that share an element
//! type.  Everything that mixes element types goes through this table instead.
//!
//! The rules are:
//!
//! * a type combined with itself is unchanged;
//! * two different types that are both narrower than 32 bits produce `i32`,
//!   the way C integer promotion does;
//! * if either side is a float, the result is `f64` if either side is `f64`,
//!   else `f32`;
//! * two integers of the same signedness produce the wider one
//!   (`isize` and `usize` count as 64 bits and lose ties to `i64`/`u64`);
//! * a signed and an unsigned integer produce the unsigned type if it is at
//!   least as wide as the signed one, and the signed type otherwise.

use crate::Number;

/// Implemented for every pair of `Number` types.
pub trait CommonType<Rhs: Number>: Number {
    type Output: Number;

    /// Convert the left operand.
    fn promote(self) -> <Self as CommonType<Rhs>>::Output;

    /// Convert the right operand.
    fn promote_rhs(rhs: Rhs) -> <Self as CommonType<Rhs>>::Output;
}

/// The common type of `A` and `B`.
pub type Promoted<A, B> = <A as CommonType<B>>::Output;

macro_rules! impl_common_type {
    ($A:ty => [$($B:ty: $C:ty),+ $(,)*]) => {$(
        impl CommonType<$B> for $A {
            type Output = $C;

            #[inline(always)]
            fn promote(self) -> $C { self as $C }

            #[inline(always)]
            fn promote_rhs(rhs: $B) -> $C { rhs as $C }
        }
    )+};
}

impl_common_type!{f32 => [
    f32: f32, f64: f64,
    i8: f32, i16: f32, i32: f32, i64: f32, isize: f32,
    u8: f32, u16: f32, u32: f32, u64: f32, usize: f32,
]}
impl_common_type!{f64 => [
    f32: f64, f64: f64,
    i8: f64, i16: f64, i32: f64, i64: f64, isize: f64,
    u8: f64, u16: f64, u32: f64, u64: f64, usize: f64,
]}

impl_common_type!{i8 => [
    f32: f32, f64: f64,
    i8: i8, i16: i32, i32: i32, i64: i64, isize: isize,
    u8: i32, u16: i32, u32: u32, u64: u64, usize: usize,
]}
impl_common_type!{i16 => [
    f32: f32, f64: f64,
    i8: i32, i16: i16, i32: i32, i64: i64, isize: isize,
    u8: i32, u16: i32, u32: u32, u64: u64, usize: usize,
]}
impl_common_type!{i32 => [
    f32: f32, f64: f64,
    i8: i32, i16: i32, i32: i32, i64: i64, isize: isize,
    u8: i32, u16: i32, u32: u32, u64: u64, usize: usize,
]}
impl_common_type!{i64 => [
    f32: f32, f64: f64,
    i8: i64, i16: i64, i32: i64, i64: i64, isize: i64,
    u8: i64, u16: i64, u32: i64, u64: u64, usize: usize,
]}
impl_common_type!{isize => [
    f32: f32, f64: f64,
    i8: isize, i16: isize, i32: isize, i64: i64, isize: isize,
    u8: isize, u16: isize, u32: isize, u64: u64, usize: usize,
]}

impl_common_type!{u8 => [
    f32: f32, f64: f64,
    i8: i32, i16: i32, i32: i32, i64: i64, isize: isize,
    u8: u8, u16: i32, u32: u32, u64: u64, usize: usize,
]}
impl_common_type!{u16 => [
    f32: f32, f64: f64,
    i8: i32, i16: i32, i32: i32, i64: i64, isize: isize,
    u8: i32, u16: u16, u32: u32, u64: u64, usize: usize,
]}
impl_common_type!{u32 => [
    f32: f32, f64: f64,
    i8: u32, i16: u32, i32: u32, i64: i64, isize: isize,
    u8: u32, u16: u32, u32: u32, u64: u64, usize: usize,
]}
impl_common_type!{u64 => [
    f32: f32, f64: f64,
    i8: u64, i16: u64, i32: u64, i64: u64, isize: u64,
    u8: u64, u16: u64, u32: u64, u64: u64, usize: u64,
]}
impl_common_type!{usize => [
    f32: f32, f64: f64,
    i8: usize, i16: usize, i32: usize, i64: usize, isize: usize,
    u8: usize, u16: usize, u32: usize, u64: u64, usize: usize,
]}
