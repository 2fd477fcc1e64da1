/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::cli::{self, BenchArgs};
use crate::logging::GlobalLogger;
use crate::FailResult;

use std::ffi::OsStr;
use std::time::Duration;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE").as_deref() == Some(OsStr::new("1")) {
            error!("{}", e.backtrace());
        } else {
            error!("(for a backtrace, try again with RUST_BACKTRACE=1)");
        }
        std::process::exit(1);
    });
}

/// Average time of one repetition, in nanoseconds.
pub(crate) fn nanos_per_rep(total: Duration, reps: usize) -> f64
{ total.as_secs_f64() * 1e9 / reps as f64 }

pub(crate) fn run(args: &BenchArgs) -> FailResult<()> {
    let cases = args.selected_cases();
    info!("running {} case(s) with {} reps each", cases.len(), args.reps);

    for case in cases {
        debug!("starting {}", case);
        let total = case.run(args.reps);
        info!("{:>10}: {:>10.2} ns/rep ({:.3}s total)",
            case.name(), nanos_per_rep(total, args.reps), total.as_secs_f64());
    }
    Ok(())
}

// %% CRATES: binary: numarr-bench %%
pub fn numarr_bench() {
    wrap_result_main(|| {
        let matches = cli::app().get_matches();
        let args = BenchArgs::from_matches(&matches)?;

        let mut logger = GlobalLogger::default();
        logger.verbosity(args.verbosity);
        if let Some(path) = &args.log {
            logger.path(path);
        }
        logger.apply()?;

        run(&args)
    });
}
