//! Day 1

use aoc_runner::{Dataset, DayPlugin, DaySolver};

/// Day 1 module
///
/// Placeholder: the puzzle is not solved yet, so every part echoes its
/// input dataset back as a single blob.
pub struct Day1;

impl DaySolver for Day1 {
    fn solve_test(&self, data: &Dataset) -> String {
        data.concat_text()
    }

    fn solve_part_one(&self, data: &Dataset) -> String {
        data.concat_text()
    }

    fn solve_part_two(&self, data: &Dataset) -> String {
        data.concat_text()
    }
}

inventory::submit! {
    DayPlugin {
        day: 1,
        solver: &Day1,
    }
}
