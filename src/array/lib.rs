/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size numeric arrays of any rank, with vector and matrix algebra.
//!
//! The single container type [`NumArray`] nests to build vectors
//! ([`Vector`]), matrices ([`Matrix`]) and higher-rank arrays.  Shapes are
//! part of the type, so mismatched operands do not compile.
//!
//! ```
//! use numarr_array::{mat, vee, Matrix, NumArray};
//!
//! let a = Matrix::<i32, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
//! assert_eq!(a * a.t(), Matrix::from([[14, 32], [32, 77]]));
//! assert_eq!(mat::det(&(a * a.t())), 54);
//! assert_eq!(vee::magnitude(&NumArray([3, 4])), 5.0);
//! ```

#[macro_use]
mod macros;

mod traits;
mod promote;
mod types;
mod ops;
mod error;
mod methods_v;
mod methods_m;
#[cfg(feature = "serde-support")]
mod serde_impls;

pub use crate::traits::{Number, Signed, Real, Element};
pub use crate::promote::{CommonType, Promoted};
pub use crate::types::*;
pub use crate::ops::{add, sub, add_scalar, sub_scalar, mul_scalar, div_scalar};
pub use crate::ops::{eq, ne, eq_scalar, ne_scalar};
pub use crate::error::ConstructionError;
pub use crate::methods_v::vee;
pub use crate::methods_m::{mat, Det};
