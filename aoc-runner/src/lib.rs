//! Advent of Code Day Runner Library
//!
//! A small framework for running daily puzzle modules against packaged input
//! files. Each day owns three input resources (a test input plus one per
//! problem part); the framework loads them eagerly, hands them to the day's
//! solver, and writes the results to deterministically named output files.
//!
//! # Overview
//!
//! This library provides:
//! - Line-oriented input loading with fixed resource naming
//!   (`day<N>/test.input`, `day<N>/problem<P>.input`)
//! - Output writing to `solutions/day<N>/` with automatic directory creation
//! - A per-day orchestrator ([`DayContext`]) that caches the three datasets
//! - A trait-based interface for day modules ([`DaySolver`])
//! - A registry system with plugin-based registration via `inventory`
//! - Flag-driven activation ([`RunConfig`] / [`DayFlags`])
//!
//! Input and output failures never propagate past the loader and writer:
//! a missing input yields an empty dataset, a failed write yields a logged
//! warning and a missing file. The only fatal errors are registration errors.
//!
//! # Quick Example
//!
//! ```
//! use aoc_runner::{Dataset, DaySolver, RegistryBuilder};
//!
//! struct Day3;
//!
//! impl DaySolver for Day3 {
//!     fn solve_test(&self, data: &Dataset) -> String {
//!         data.concat_text()
//!     }
//!
//!     fn solve_part_one(&self, data: &Dataset) -> String {
//!         data.concat_text()
//!     }
//!
//!     fn solve_part_two(&self, data: &Dataset) -> String {
//!         data.concat_text()
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register(3, Day3).unwrap().build();
//! assert!(registry.contains(3));
//! ```
//!
//! # Plugin System
//!
//! Day modules can register themselves at link time:
//!
//! ```ignore
//! inventory::submit! {
//!     DayPlugin { day: 1, solver: &Day1 }
//! }
//!
//! let registry = RegistryBuilder::new().register_all_plugins()?.build();
//! ```

mod dataset;
mod day;
mod error;
mod flags;
mod input;
mod output;
mod registry;
mod solver;

// Re-export public API
pub use dataset::Dataset;
pub use day::{DayContext, problem_resource, test_resource};
pub use error::{RegistrationError, WriteError};
pub use flags::{DayFlags, RunConfig};
pub use input::{InputReader, LoadStatus, LoadedInput};
pub use output::{SolutionWriter, WriteOutcome};
pub use registry::{DayPlugin, DayRegistry, MAX_DAY, RegistryBuilder, RunSummary};
pub use solver::DaySolver;

// Re-export inventory for use by day-module crates
pub use inventory;
