//! Registry of day modules
//!
//! Mirrors the builder-then-immutable pattern used elsewhere in the
//! workspace: modules are registered (explicitly or through `inventory`
//! plugins) with duplicate detection, then the built registry only runs.

use crate::day::DayContext;
use crate::error::RegistrationError;
use crate::flags::RunConfig;
use crate::solver::DaySolver;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Last day of the Advent of Code calendar
pub const MAX_DAY: u8 = 25;

/// Plugin information for automatic day-module registration
///
/// # Example
///
/// ```no_run
/// use aoc_runner::{Dataset, DayPlugin, DaySolver};
///
/// struct Day7;
///
/// impl DaySolver for Day7 {
///     fn solve_test(&self, data: &Dataset) -> String { data.concat_text() }
///     fn solve_part_one(&self, data: &Dataset) -> String { data.concat_text() }
///     fn solve_part_two(&self, data: &Dataset) -> String { data.concat_text() }
/// }
///
/// inventory::submit! {
///     DayPlugin { day: 7, solver: &Day7 }
/// }
/// ```
pub struct DayPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The day module (type-erased)
    pub solver: &'static dyn DaySolver,
}

// Enable plugin collection via inventory
inventory::collect!(DayPlugin);

/// Builder for constructing a [`DayRegistry`]
///
/// Registration validates the day number and rejects duplicates; the
/// registry is immutable once built.
pub struct RegistryBuilder {
    days: BTreeMap<u8, Box<dyn DaySolver>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Register a day module for a specific day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the module registered, ready for chaining
    /// * `Err(RegistrationError)` - Day out of range or already registered
    pub fn register<S>(mut self, day: u8, solver: S) -> Result<Self, RegistrationError>
    where
        S: DaySolver + 'static,
    {
        if day == 0 || day > MAX_DAY {
            return Err(RegistrationError::InvalidDay(day));
        }
        if self.days.contains_key(&day) {
            return Err(RegistrationError::DuplicateDay(day));
        }
        self.days.insert(day, Box::new(solver));
        Ok(self)
    }

    /// Register all day plugins submitted via `inventory::submit!`
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<DayPlugin>() {
            self = self.register(plugin.day, plugin.solver)?;
        }
        Ok(self)
    }

    /// Register only the plugins matching a filter predicate
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&DayPlugin) -> bool,
    {
        for plugin in inventory::iter::<DayPlugin>() {
            if filter(plugin) {
                self = self.register(plugin.day, plugin.solver)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> DayRegistry {
        DayRegistry { days: self.days }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts from one registry run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Days whose `run` flag was set and whose module executed
    pub days_run: usize,
    /// Individual solve-and-write operations performed
    pub operations: usize,
}

/// Immutable registry of day modules
///
/// Holds one module per day; [`run`](DayRegistry::run) activates the subset
/// enabled by a [`RunConfig`], in ascending day order. The order carries no
/// correctness weight; days are independent.
pub struct DayRegistry {
    days: BTreeMap<u8, Box<dyn DaySolver>>,
}

impl DayRegistry {
    /// Number of registered day modules
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no module is registered
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether a module is registered for the day
    pub fn contains(&self, day: u8) -> bool {
        self.days.contains_key(&day)
    }

    /// Registered day numbers in ascending order
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.days.keys().copied()
    }

    /// Run with the default roots (`inputs/` and the working directory)
    pub fn run(&self, config: &RunConfig) -> RunSummary {
        self.run_with_roots(config, Path::new("inputs"), Path::new("."))
    }

    /// Run every registered day whose `run` flag is set
    ///
    /// Each activated day gets a fresh [`DayContext`] (inputs are loaded at
    /// that point) and performs its flag-enabled operations. Input and
    /// output failures stay inside the pipeline; the summary only counts
    /// what was attempted.
    pub fn run_with_roots(
        &self,
        config: &RunConfig,
        input_root: &Path,
        output_root: &Path,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        for (&day, solver) in &self.days {
            let flags = config.flags(day);
            if !flags.run {
                continue;
            }
            debug!("Activating day {}", day);
            let context = DayContext::with_roots(day, input_root, output_root);
            summary.operations += context.run(solver.as_ref(), &flags);
            summary.days_run += 1;
        }
        summary
    }
}
