//! Per-day orchestration
//!
//! A [`DayContext`] owns the three datasets for one day and the writer for
//! its output files. Construction loads everything eagerly; afterwards the
//! context is immutable and its write operations only touch external storage.

use crate::dataset::Dataset;
use crate::flags::DayFlags;
use crate::input::{InputReader, LoadStatus, LoadedInput};
use crate::output::SolutionWriter;
use crate::solver::DaySolver;
use std::path::Path;
use tracing::debug;

/// Resource name of a day's test input: `day<N>/test.input`
pub fn test_resource(day_number: u8) -> String {
    format!("day{}/test.input", day_number)
}

/// Resource name of a day's problem input: `day<N>/problem<P>.input`
pub fn problem_resource(day_number: u8, problem_number: u8) -> String {
    format!("day{}/problem{}.input", day_number, problem_number)
}

/// Orchestrator for one day's inputs and outputs
///
/// Reads the day's three canonical resources at construction and caches the
/// datasets. Datasets are exposed as read-only views; writes delegate to a
/// [`SolutionWriter`] and never report failure upward.
pub struct DayContext {
    day_number: u8,
    test: LoadedInput,
    problem1: LoadedInput,
    problem2: LoadedInput,
    writer: SolutionWriter,
}

impl DayContext {
    /// Build a context with the default roots: inputs under `inputs/`,
    /// outputs under the process working directory
    pub fn new(day_number: u8) -> Self {
        Self::with_roots(day_number, Path::new("inputs"), Path::new("."))
    }

    /// Build a context with explicit input and output roots
    pub fn with_roots(day_number: u8, input_root: &Path, output_root: &Path) -> Self {
        let reader = InputReader::new(
            input_root,
            &problem_resource(day_number, 1),
            &problem_resource(day_number, 2),
            &test_resource(day_number),
        );
        let (problem1, problem2, test) = reader.into_parts();
        Self {
            day_number,
            test,
            problem1,
            problem2,
            writer: SolutionWriter::new(output_root),
        }
    }

    /// The day this context belongs to
    pub fn day_number(&self) -> u8 {
        self.day_number
    }

    /// The cached test dataset
    pub fn test_data(&self) -> &Dataset {
        &self.test.dataset
    }

    /// The cached dataset for the first problem
    pub fn problem1_data(&self) -> &Dataset {
        &self.problem1.dataset
    }

    /// The cached dataset for the second problem
    pub fn problem2_data(&self) -> &Dataset {
        &self.problem2.dataset
    }

    /// Load status of the test resource
    pub fn test_status(&self) -> &LoadStatus {
        &self.test.status
    }

    /// Load status of the first problem resource
    pub fn problem1_status(&self) -> &LoadStatus {
        &self.problem1.status
    }

    /// Load status of the second problem resource
    pub fn problem2_status(&self) -> &LoadStatus {
        &self.problem2.status
    }

    /// Write the test solution (`test.output`)
    pub fn write_test_solution(&self, data: &str) {
        self.writer.write_solution(self.day_number, 0, data);
    }

    /// Write the solution for a problem (`solution<P>.output`)
    pub fn write_solution(&self, problem_number: u8, data: &str) {
        self.writer.write_solution(self.day_number, problem_number, data);
    }

    /// Run the flag-enabled operations of a solver against this context
    ///
    /// Each enabled flag triggers one solve-and-write; the `run` flag itself
    /// is the registry's concern and is not consulted here. Returns the
    /// number of operations performed.
    pub fn run(&self, solver: &dyn DaySolver, flags: &DayFlags) -> usize {
        let mut operations = 0;
        if flags.test {
            debug!("Running day {} test", self.day_number);
            self.write_test_solution(&solver.solve_test(self.test_data()));
            operations += 1;
        }
        if flags.problem_one {
            debug!("Running day {} problem one", self.day_number);
            self.write_solution(1, &solver.solve_part_one(self.problem1_data()));
            operations += 1;
        }
        if flags.problem_two {
            debug!("Running day {} problem two", self.day_number);
            self.write_solution(2, &solver.solve_part_two(self.problem2_data()));
            operations += 1;
        }
        operations
    }
}
