/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::cases::Case;
use crate::FailResult;

use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

pub const DEFAULT_REPS: usize = 100_000;

/// Parsed command line for `numarr-bench`.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchArgs {
    pub reps: usize,
    /// Empty when no `--case` was given; the driver then runs every case.
    pub cases: Vec<Case>,
    pub log: Option<PathBuf>,
    pub verbosity: i32,
}

pub fn app() -> App<'static, 'static> {
    App::new("numarr-bench")
        .about("Time the core numarr array operations.")
        .arg(Arg::with_name("reps")
            .long("reps")
            .takes_value(true)
            .value_name("N")
            .default_value("100000")
            .validator(|s| match s.parse::<usize>() {
                Ok(0) => Err("must be positive".to_string()),
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string()),
            })
            .help("Repetitions of each case."))
        .arg(Arg::with_name("case")
            .long("case")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .possible_values(Case::NAMES)
            .help("Run only this case.  May be given more than once."))
        .arg(Arg::with_name("log")
            .long("log")
            .takes_value(true)
            .value_name("FILE")
            .help("Also write the log to FILE."))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .help("Log more."))
}

impl BenchArgs {
    pub fn from_matches(matches: &ArgMatches<'_>) -> FailResult<BenchArgs> {
        let reps = match matches.value_of("reps") {
            Some(s) => s.parse()?,
            None => DEFAULT_REPS,
        };
        let cases = match matches.values_of("case") {
            Some(values) => values.map(str::parse).collect::<FailResult<_>>()?,
            None => vec![],
        };
        let log = matches.value_of_os("log").map(PathBuf::from);
        let verbosity = matches.occurrences_of("verbose") as i32;
        Ok(BenchArgs { reps, cases, log, verbosity })
    }

    /// The cases to run, in command-line order.
    pub fn selected_cases(&self) -> Vec<Case> {
        match self.cases.is_empty() {
            true => Case::all(),
            false => self.cases.clone(),
        }
    }
}
