//! Day-module solver trait

use crate::dataset::Dataset;

/// Interface implemented by each day module
///
/// One method per operation: the test run and the two problem parts. Each
/// receives the matching dataset and returns the text to write out. For now
/// every day module just echoes its input back (see
/// [`Dataset::concat_text`]); real puzzle logic slots in here later.
///
/// # Example
///
/// ```
/// use aoc_runner::{Dataset, DaySolver};
///
/// struct Day4;
///
/// impl DaySolver for Day4 {
///     fn solve_test(&self, data: &Dataset) -> String {
///         data.concat_text()
///     }
///
///     fn solve_part_one(&self, data: &Dataset) -> String {
///         data.concat_text()
///     }
///
///     fn solve_part_two(&self, data: &Dataset) -> String {
///         data.concat_text()
///     }
/// }
/// ```
pub trait DaySolver: Sync {
    /// Produce the test output from the test dataset
    fn solve_test(&self, data: &Dataset) -> String;

    /// Solve the first problem
    fn solve_part_one(&self, data: &Dataset) -> String;

    /// Solve the second problem
    fn solve_part_two(&self, data: &Dataset) -> String;
}

/// Allow `&'static dyn DaySolver` plugin references to be registered directly
impl<T> DaySolver for &T
where
    T: DaySolver + ?Sized,
{
    fn solve_test(&self, data: &Dataset) -> String {
        (**self).solve_test(data)
    }

    fn solve_part_one(&self, data: &Dataset) -> String {
        (**self).solve_part_one(data)
    }

    fn solve_part_two(&self, data: &Dataset) -> String {
        (**self).solve_part_two(data)
    }
}
