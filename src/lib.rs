/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size numeric arrays of any rank, with vector and matrix algebra.
//!
//! Everything lives in `numarr-array`; this crate re-exports it.  See
//! [`NumArray`] for the container and the [`vee`] and [`mat`] modules for
//! the free-function forms of the vector and matrix operations.

pub use numarr_array::*;
