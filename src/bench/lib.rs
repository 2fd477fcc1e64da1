/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Timing harness for `numarr`, and the `numarr-bench` entry point.

#[macro_use]
extern crate log;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod timer;
pub mod logging;
pub mod cases;
pub mod cli;
mod entry_points;

pub use crate::entry_points::numarr_bench;
