//! Activation flags for day modules
//!
//! Day modules run only when explicitly enabled. The startup configuration
//! produces a [`RunConfig`] table of per-day boolean flags which is passed
//! into the registry; nothing is activated implicitly.

use std::collections::BTreeMap;

/// Which operations to run for one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayFlags {
    /// Whether the day module runs at all
    pub run: bool,
    /// Run the test input
    pub test: bool,
    /// Solve the first problem
    pub problem_one: bool,
    /// Solve the second problem
    pub problem_two: bool,
}

impl DayFlags {
    /// Flags enabling every operation for a day
    pub fn all() -> Self {
        Self {
            run: true,
            test: true,
            problem_one: true,
            problem_two: true,
        }
    }

    /// Number of operations these flags enable when the day runs
    pub fn enabled_operations(&self) -> usize {
        [self.test, self.problem_one, self.problem_two]
            .iter()
            .filter(|&&f| f)
            .count()
    }
}

/// Per-day activation table
///
/// Unknown days yield default (all-false) flags, so querying never fails.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    days: BTreeMap<u8, DayFlags>,
}

impl RunConfig {
    /// Create an empty table; nothing runs until flags are set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flags for a day, replacing any previous entry
    pub fn set(&mut self, day: u8, flags: DayFlags) {
        self.days.insert(day, flags);
    }

    /// Flags for a day (all-false for days without an entry)
    pub fn flags(&self, day: u8) -> DayFlags {
        self.days.get(&day).copied().unwrap_or_default()
    }

    /// Whether no day has an entry at all
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
