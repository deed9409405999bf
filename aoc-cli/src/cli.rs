//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code day runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code day modules", version)]
pub struct Args {
    /// Day to run, overriding the config file selection
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Run the test input for the selected day (requires --day)
    #[arg(short, long, requires = "day")]
    pub test: bool,

    /// Problem to solve for the selected day (repeatable; requires --day)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2), requires = "day")]
    pub problem: Vec<u8>,

    /// Path to the day activation config file
    #[arg(short, long, default_value = "days.toml")]
    pub config: PathBuf,

    /// Directory containing the packaged input resources
    #[arg(long, default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Directory under which solutions/ is written
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - suppress the run summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_override_with_parts() {
        let args = Args::try_parse_from(["aoc", "--day", "3", "-p", "1", "-p", "2"]).unwrap();
        assert_eq!(args.day, Some(3));
        assert_eq!(args.problem, vec![1, 2]);
        assert!(!args.test);
    }

    #[test]
    fn day_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "0"]).is_err());
    }

    #[test]
    fn test_flag_requires_day() {
        assert!(Args::try_parse_from(["aoc", "--test"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "1", "--test"]).is_ok());
    }

    #[test]
    fn defaults_point_at_conventional_paths() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.config, PathBuf::from("days.toml"));
        assert_eq!(args.input_dir, PathBuf::from("inputs"));
        assert_eq!(args.output_dir, PathBuf::from("."));
    }
}
