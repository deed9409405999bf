//! Day 2

use aoc_runner::{Dataset, DayPlugin, DaySolver};

/// Day 2 module
///
/// Placeholder: the puzzle is not solved yet, so every part echoes its
/// input dataset back as a single blob.
pub struct Day2;

impl DaySolver for Day2 {
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
        day: 2,
        solver: &Day2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::RegistryBuilder;

    #[test]
    fn echo_covers_all_three_operations() {
        let data: Dataset = [b"42".to_vec()].into_iter().collect();
        assert_eq!(Day2.solve_test(&data), "42");
        assert_eq!(Day2.solve_part_one(&data), "42");
        assert_eq!(Day2.solve_part_two(&data), "42");
    }

    #[test]
    fn plugins_register_both_days() {
        let registry = RegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build();
        assert!(registry.contains(1));
        assert!(registry.contains(2));
    }

    #[test]
    fn plugin_filter_selects_a_subset() {
        let registry = RegistryBuilder::new()
            .register_plugins(|plugin| plugin.day == 2)
            .unwrap()
            .build();
        assert!(registry.contains(2));
        assert!(!registry.contains(1));
    }
}
