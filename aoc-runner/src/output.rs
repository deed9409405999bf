//! Solution writing to structured output files
//!
//! Output files live under `solutions/day<N>/` relative to an output root
//! (the process working directory by default). Directories are created on
//! demand and writes always overwrite; the last write wins. Failures are
//! logged and reported through [`WriteOutcome`], never raised.

use crate::error::WriteError;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Outcome of a single solution write
#[derive(Debug)]
pub enum WriteOutcome {
    /// The solution reached the file
    Written {
        /// Path of the output file
        path: PathBuf,
        /// Whether the day directory had to be created
        created_dir: bool,
        /// Whether the output file did not exist before this write
        created_file: bool,
    },
    /// The write failed; the file may be absent or partially written
    Failed {
        /// Path of the intended output file
        path: PathBuf,
        /// Why the write failed
        reason: WriteError,
    },
}

impl WriteOutcome {
    /// Whether the solution reached the file
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }

    /// Path of the (intended) output file
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written { path, .. } | WriteOutcome::Failed { path, .. } => path,
        }
    }
}

/// Writes solution data to files organized by day and problem number
///
/// File naming is fixed: `solutions/day<N>/test.output` for test output
/// (problem number 0), `solutions/day<N>/solution<P>.output` otherwise.
///
/// # Example
///
/// ```no_run
/// use aoc_runner::SolutionWriter;
///
/// let writer = SolutionWriter::default();
/// writer.write_solution(1, 2, "Some solution data");
/// ```
pub struct SolutionWriter {
    root: PathBuf,
}

impl SolutionWriter {
    /// Create a writer placing `solutions/` under the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Destination path for a day/problem pair
    ///
    /// A problem number of 0 is the sentinel for test output.
    pub fn solution_path(&self, day_number: u8, problem_number: u8) -> PathBuf {
        let file_name = if problem_number == 0 {
            "test.output".to_string()
        } else {
            format!("solution{}.output", problem_number)
        };
        self.day_dir(day_number).join(file_name)
    }

    fn day_dir(&self, day_number: u8) -> PathBuf {
        self.root.join("solutions").join(format!("day{}", day_number))
    }

    /// Write solution data, overwriting any prior content
    ///
    /// The day directory is created if needed. Every failure is logged and
    /// folded into the returned [`WriteOutcome`]; the worst a caller can
    /// observe is a missing or partially written file.
    pub fn write_solution(&self, day_number: u8, problem_number: u8, data: &str) -> WriteOutcome {
        let dir = self.day_dir(day_number);
        let created_dir = if dir.is_dir() {
            trace!("Skipped making directory: day{}", day_number);
            false
        } else {
            match fs::create_dir_all(&dir) {
                Ok(()) => {
                    debug!("Created directory: day{}", day_number);
                    true
                }
                Err(e) => {
                    // Not fatal here; the file open below surfaces the problem
                    debug!("Failed to create directory {}: {}", dir.display(), e);
                    false
                }
            }
        };

        let path = self.solution_path(day_number, problem_number);
        debug!("Formatted filename: {}", path.display());

        let created_file = !path.exists();
        let mut file = match File::create(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Failed to write solution to file. {}", e);
                return WriteOutcome::Failed {
                    reason: WriteError::Open { path: path.clone(), source: e },
                    path,
                };
            }
        };
        if created_file {
            info!("Created new file: {}", path.display());
        }

        debug!("Writing solution to file: {}", data);
        if let Err(e) = file.write_all(data.as_bytes()) {
            warn!("Failed to write solution to file. {}", e);
            return WriteOutcome::Failed {
                reason: WriteError::Write { path: path.clone(), source: e },
                path,
            };
        }

        WriteOutcome::Written {
            path,
            created_dir,
            created_file,
        }
    }
}

impl Default for SolutionWriter {
    /// Writer rooted at the process working directory
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn solution_path_uses_test_output_for_problem_zero() {
        let writer = SolutionWriter::new("/tmp/out");
        let path = writer.solution_path(1, 0);
        assert!(path.ends_with("solutions/day1/test.output"));
    }

    #[test]
    fn solution_path_uses_problem_number_otherwise() {
        let writer = SolutionWriter::new("/tmp/out");
        assert!(writer.solution_path(3, 1).ends_with("solutions/day3/solution1.output"));
        assert!(writer.solution_path(3, 2).ends_with("solutions/day3/solution2.output"));
    }

    #[test]
    fn write_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let writer = SolutionWriter::new(temp.path());

        let outcome = writer.write_solution(5, 0, "hello");
        match outcome {
            WriteOutcome::Written {
                path,
                created_dir,
                created_file,
            } => {
                assert!(created_dir);
                assert!(created_file);
                assert_eq!(fs::read_to_string(path).unwrap(), "hello");
            }
            other => panic!("expected Written, got {:?}", other),
        }
        assert!(temp.path().join("solutions/day5").is_dir());
    }

    #[test]
    fn write_roundtrips_text_verbatim() {
        let temp = TempDir::new().unwrap();
        let writer = SolutionWriter::new(temp.path());

        writer.write_solution(1, 0, "abcdef");
        let content = fs::read_to_string(temp.path().join("solutions/day1/test.output")).unwrap();
        assert_eq!(content, "abcdef");
    }

    #[test]
    fn second_write_overwrites_first() {
        let temp = TempDir::new().unwrap();
        let writer = SolutionWriter::new(temp.path());

        writer.write_solution(2, 1, "first first first");
        let outcome = writer.write_solution(2, 1, "second");
        match outcome {
            WriteOutcome::Written {
                created_dir,
                created_file,
                ..
            } => {
                assert!(!created_dir);
                assert!(!created_file);
            }
            other => panic!("expected Written, got {:?}", other),
        }

        let content =
            fs::read_to_string(temp.path().join("solutions/day2/solution1.output")).unwrap();
        assert_eq!(content, "second");
    }

    #[test]
    fn empty_text_writes_empty_file() {
        let temp = TempDir::new().unwrap();
        let writer = SolutionWriter::new(temp.path());

        let outcome = writer.write_solution(2, 1, "");
        assert!(outcome.is_written());
        let content =
            fs::read_to_string(temp.path().join("solutions/day2/solution1.output")).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn failed_write_reports_outcome_instead_of_erroring() {
        let temp = TempDir::new().unwrap();
        let writer = SolutionWriter::new(temp.path());

        // A regular file where the day directory should be makes both the
        // directory creation and the file open fail
        fs::create_dir_all(temp.path().join("solutions")).unwrap();
        fs::write(temp.path().join("solutions/day9"), b"not a dir").unwrap();

        let outcome = writer.write_solution(9, 1, "data");
        assert!(!outcome.is_written());
        assert!(matches!(
            outcome,
            WriteOutcome::Failed {
                reason: WriteError::Open { .. },
                ..
            }
        ));
    }
}
