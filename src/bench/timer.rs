/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::time::{Duration, Instant};

/// A stopwatch that accumulates time across `start`/`stop` pairs.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    started: Option<Instant>,
    elapsed: Duration,
}

impl Timer {
    pub fn new() -> Self
    { Self::default() }

    /// Begin a split.  Calling this again before `stop` restarts the split.
    pub fn start(&mut self)
    { self.started = Some(Instant::now()); }

    /// End the current split and add it to the total.
    ///
    /// Does nothing if the timer is not running.
    pub fn stop(&mut self) {
        if let Some(t0) = self.started.take() {
            self.elapsed += t0.elapsed();
        }
    }

    /// Clear the accumulated total.  A running split keeps running.
    pub fn reset(&mut self)
    { self.elapsed = Duration::from_secs(0); }

    /// Total time of all completed splits.
    pub fn elapsed(&self) -> Duration
    { self.elapsed }

    pub fn is_running(&self) -> bool
    { self.started.is_some() }
}

/// Time `reps` consecutive calls to `func`.
pub fn benchmark<F: FnMut()>(mut func: F, reps: usize) -> Duration {
    let mut timer = Timer::new();
    timer.start();
    for _ in 0..reps {
        func();
    }
    timer.stop();
    timer.elapsed()
}
