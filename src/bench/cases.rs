/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::timer::benchmark;
use crate::FailResult;

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use std::time::Duration;

use numarr_array::{mat, vee, Mat3, Mat4, Matrix, NumArray, Vec3, Vec4, Vector};

/// A named workload for the benchmark driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Case {
    MatMul3,
    MatVec4,
    Cross,
    Dot16,
    /// Outer product of an `f64` vector with an `f32` vector.
    Outer,
    Transpose,
}

impl Case {
    pub const NAMES: &'static [&'static str] = &[
        "matmul3", "matvec4", "cross", "dot16", "outer", "transpose",
    ];

    pub fn all() -> Vec<Case> {
        vec![
            Case::MatMul3, Case::MatVec4, Case::Cross,
            Case::Dot16, Case::Outer, Case::Transpose,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Case::MatMul3 => "matmul3",
            Case::MatVec4 => "matvec4",
            Case::Cross => "cross",
            Case::Dot16 => "dot16",
            Case::Outer => "outer",
            Case::Transpose => "transpose",
        }
    }

    /// Run the case `reps` times and return the total time.
    pub fn run(self, reps: usize) -> Duration {
        match self {
            Case::MatMul3 => {
                let a: Mat3 = seeded_matrix(1.0);
                let b: Mat3 = seeded_matrix(2.0);
                benchmark(|| { black_box(black_box(a) * black_box(b)); }, reps)
            },
            Case::MatVec4 => {
                let a: Mat4 = seeded_matrix(3.0);
                let v: Vec4 = seeded_vector(4.0);
                benchmark(|| { black_box(black_box(a) * black_box(v)); }, reps)
            },
            Case::Cross => {
                let v: Vec3 = seeded_vector(5.0);
                let w: Vec3 = seeded_vector(6.0);
                benchmark(|| { black_box(black_box(v).cross(&black_box(w))); }, reps)
            },
            Case::Dot16 => {
                let v: Vector<f64, 16> = seeded_vector(7.0);
                let w: Vector<f64, 16> = seeded_vector(8.0);
                benchmark(|| { black_box(vee::dot(&black_box(v), &black_box(w))); }, reps)
            },
            Case::Outer => {
                let v: Vec4<f64> = seeded_vector(9.0);
                let w: Vec4<f32> = seeded_vector::<4>(10.0).cast::<f32>();
                benchmark(|| { black_box(vee::outer_product(&black_box(v), &black_box(w))); }, reps)
            },
            Case::Transpose => {
                let a: Matrix<f64, 4, 3> = seeded_matrix(11.0);
                benchmark(|| { black_box(mat::transpose(&black_box(a))); }, reps)
            },
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.write_str(self.name()) }
}

impl FromStr for Case {
    type Err = failure::Error;

    fn from_str(s: &str) -> FailResult<Case> {
        Case::all().into_iter()
            .find(|case| case.name() == s)
            .ok_or_else(|| failure::format_err!("unknown benchmark case: {:?}", s))
    }
}

fn seeded_vector<const N: usize>(seed: f64) -> Vector<f64, N>
{ NumArray::from_fn(|i| (seed + i as f64).sin()) }

fn seeded_matrix<const M: usize, const N: usize>(seed: f64) -> Matrix<f64, M, N>
{ mat::from_fn(|r, c| (seed + (r * N + c) as f64).cos()) }
