//! Activation config resolution: TOML file plus CLI overrides
//!
//! The config file holds one table per day, kebab-case keys, every flag
//! defaulting to false:
//!
//! ```toml
//! [day1]
//! run = true
//! test = true
//! problem-one = false
//! problem-two = true
//! ```
//!
//! A `--day` override on the command line replaces the file selection with
//! a single day.

use crate::cli::Args;
use crate::error::CliError;
use aoc_runner::{DayFlags, MAX_DAY, RunConfig};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One day's table in the config file
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct DayEntry {
    run: bool,
    test: bool,
    problem_one: bool,
    problem_two: bool,
}

impl DayEntry {
    fn into_flags(self) -> DayFlags {
        DayFlags {
            run: self.run,
            test: self.test,
            problem_one: self.problem_one,
            problem_two: self.problem_two,
        }
    }
}

/// Resolve the run configuration from args and the config file
pub fn resolve(args: &Args) -> Result<RunConfig, CliError> {
    match args.day {
        Some(day) => Ok(single_day(day, args)),
        None => load_file(&args.config),
    }
}

/// Build a config running exactly one day, per the CLI sub-flags
///
/// `--day` with neither `--test` nor `--problem` runs everything for that day.
fn single_day(day: u8, args: &Args) -> RunConfig {
    let mut flags = DayFlags {
        run: true,
        test: args.test,
        problem_one: args.problem.contains(&1),
        problem_two: args.problem.contains(&2),
    };
    if flags.enabled_operations() == 0 {
        flags = DayFlags::all();
    }

    let mut config = RunConfig::new();
    config.set(day, flags);
    config
}

/// Load the activation table from a TOML file
///
/// A missing file is not an error; it yields an empty config and nothing runs.
fn load_file(path: &Path) -> Result<RunConfig, CliError> {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(RunConfig::new());
    }
    let raw = fs::read_to_string(path)?;
    parse_config(&raw)
}

fn parse_config(raw: &str) -> Result<RunConfig, CliError> {
    let tables: BTreeMap<String, DayEntry> = toml::from_str(raw)?;

    let mut config = RunConfig::new();
    for (key, entry) in tables {
        config.set(parse_day_key(&key)?, entry.into_flags());
    }
    Ok(config)
}

/// Parse a `day<N>` table key into a day number
fn parse_day_key(key: &str) -> Result<u8, CliError> {
    key.strip_prefix("day")
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|&day| (1..=MAX_DAY).contains(&day))
        .ok_or_else(|| {
            CliError::Config(format!(
                "Invalid day table [{}]: expected day1 through day{}",
                key, MAX_DAY
            ))
        })
}
