/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use thiserror::Error;

/// Error from constructing a `NumArray` out of a runtime-sized list.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("expected {expected} elements (or a single element to broadcast), got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("expected exactly {expected} scalars, got {actual}")]
    WrongFlatLength { expected: usize, actual: usize },
}
