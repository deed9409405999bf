//! Input loading for day resources
//!
//! Resources live under a fixed root directory and are read eagerly, one
//! dataset per resource. Loading never fails outward: a missing resource
//! yields an empty dataset, a mid-stream read error yields whatever lines
//! were collected before it. Both are logged and reported through
//! [`LoadStatus`] for observability.

use crate::dataset::Dataset;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::error;

/// How loading one input resource ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The resource was read to the end
    Loaded,
    /// The resource does not exist; the dataset is empty
    Missing,
    /// An I/O error interrupted reading; the dataset holds the lines read so far
    Truncated {
        /// Lines collected before the error
        lines_read: usize,
        /// Display form of the underlying I/O error
        reason: String,
    },
}

/// One loaded resource: the dataset plus how the load went
#[derive(Debug)]
pub struct LoadedInput {
    /// The lines read from the resource (possibly empty or partial)
    pub dataset: Dataset,
    /// Outcome of the load
    pub status: LoadStatus,
}

/// Eagerly reads the three input resources for a day
///
/// Constructed with a root directory and the three resource names. Each
/// resource is loaded exactly once at construction; there is no caching
/// across reader instances.
///
/// # Example
///
/// ```no_run
/// use aoc_runner::InputReader;
/// use std::path::Path;
///
/// let reader = InputReader::new(
///     Path::new("inputs"),
///     "day1/problem1.input",
///     "day1/problem2.input",
///     "day1/test.input",
/// );
/// for line in reader.test_data().lines() {
///     println!("{}", String::from_utf8_lossy(line));
/// }
/// ```
pub struct InputReader {
    problem1: LoadedInput,
    problem2: LoadedInput,
    test: LoadedInput,
}

impl InputReader {
    /// Load the three resources from `root`, in problem-1, problem-2, test order
    pub fn new(root: &Path, problem1_file: &str, problem2_file: &str, test_file: &str) -> Self {
        Self {
            problem1: load_resource(root, problem1_file),
            problem2: load_resource(root, problem2_file),
            test: load_resource(root, test_file),
        }
    }

    /// The test dataset
    pub fn test_data(&self) -> &Dataset {
        &self.test.dataset
    }

    /// The dataset from the first problem input file
    pub fn problem1_data(&self) -> &Dataset {
        &self.problem1.dataset
    }

    /// The dataset from the second problem input file
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

    /// Consume the reader, yielding (problem-1, problem-2, test) loads
    pub fn into_parts(self) -> (LoadedInput, LoadedInput, LoadedInput) {
        (self.problem1, self.problem2, self.test)
    }
}

/// Load a single resource, mapping every failure to a status instead of an error
fn load_resource(root: &Path, name: &str) -> LoadedInput {
    let path = root.join(name);
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            error!("Input file not found: {}", name);
            return LoadedInput {
                dataset: Dataset::default(),
                status: LoadStatus::Missing,
            };
        }
        Err(e) => {
            error!("Failed to read input file {}: {}", name, e);
            return LoadedInput {
                dataset: Dataset::default(),
                status: LoadStatus::Truncated {
                    lines_read: 0,
                    reason: e.to_string(),
                },
            };
        }
    };

    let (lines, status) = read_lines(BufReader::new(file), name);
    LoadedInput {
        dataset: Dataset::new(lines),
        status,
    }
}

/// Read lines until EOF or the first I/O error, stripping terminators
///
/// Both `\n` and `\r\n` terminators are handled; a final line without a
/// terminator is still kept.
fn read_lines(mut reader: impl BufRead, name: &str) -> (Vec<Vec<u8>>, LoadStatus) {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return (lines, LoadStatus::Loaded),
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                lines.push(buf.clone());
            }
            Err(e) => {
                error!("Failed to read input file {}: {}", name, e);
                let status = LoadStatus::Truncated {
                    lines_read: lines.len(),
                    reason: e.to_string(),
                };
                return (lines, status);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{self, Read};
    use tempfile::TempDir;

    fn write_input(root: &Path, name: &str, contents: &[u8]) {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn missing_resource_yields_empty_dataset() {
        let temp = TempDir::new().unwrap();
        let reader = InputReader::new(
            temp.path(),
            "day2/problem1.input",
            "day2/problem2.input",
            "day2/test.input",
        );

        assert!(reader.problem1_data().is_empty());
        assert_eq!(*reader.problem1_status(), LoadStatus::Missing);
        assert_eq!(*reader.problem2_status(), LoadStatus::Missing);
        assert_eq!(*reader.test_status(), LoadStatus::Missing);
    }

    #[test]
    fn lines_are_read_in_file_order_with_terminators_stripped() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), "day1/test.input", b"abc\ndef\n");
        let reader = InputReader::new(
            temp.path(),
            "day1/problem1.input",
            "day1/problem2.input",
            "day1/test.input",
        );

        let lines: Vec<&[u8]> = reader.test_data().lines().collect();
        assert_eq!(lines, vec![b"abc" as &[u8], b"def"]);
        assert_eq!(*reader.test_status(), LoadStatus::Loaded);
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), "day1/problem1.input", b"abc\r\ndef\r\n");
        let reader = InputReader::new(
            temp.path(),
            "day1/problem1.input",
            "day1/problem2.input",
            "day1/test.input",
        );

        let lines: Vec<&[u8]> = reader.problem1_data().lines().collect();
        assert_eq!(lines, vec![b"abc" as &[u8], b"def"]);
    }

    #[test]
    fn final_line_without_terminator_is_kept() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), "day1/problem2.input", b"abc\ndef");
        let reader = InputReader::new(
            temp.path(),
            "day1/problem1.input",
            "day1/problem2.input",
            "day1/test.input",
        );

        assert_eq!(reader.problem2_data().len(), 2);
        assert_eq!(reader.problem2_data().concat_text(), "abcdef");
    }

    #[test]
    fn one_missing_resource_does_not_affect_siblings() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), "day1/problem1.input", b"only\n");
        let reader = InputReader::new(
            temp.path(),
            "day1/problem1.input",
            "day1/problem2.input",
            "day1/test.input",
        );

        assert_eq!(reader.problem1_data().len(), 1);
        assert_eq!(*reader.problem1_status(), LoadStatus::Loaded);
        assert!(reader.problem2_data().is_empty());
        assert_eq!(*reader.problem2_status(), LoadStatus::Missing);
    }

    #[test]
    fn empty_resource_yields_empty_loaded_dataset() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), "day1/test.input", b"");
        let reader = InputReader::new(
            temp.path(),
            "day1/problem1.input",
            "day1/problem2.input",
            "day1/test.input",
        );

        assert!(reader.test_data().is_empty());
        assert_eq!(*reader.test_status(), LoadStatus::Loaded);
    }

    /// Reader that fails after yielding some bytes
    struct FailAfter {
        data: io::Cursor<Vec<u8>>,
        remaining: usize,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::other("disk on fire"));
            }
            let take = buf.len().min(self.remaining);
            let n = self.data.read(&mut buf[..take])?;
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn read_failure_keeps_lines_collected_so_far() {
        let failing = FailAfter {
            data: io::Cursor::new(b"abc\ndef\nghi\n".to_vec()),
            remaining: 8, // "abc\ndef\n"
        };
        let (lines, status) = read_lines(BufReader::new(failing), "day1/test.input");

        assert_eq!(lines, vec![b"abc".to_vec(), b"def".to_vec()]);
        match status {
            LoadStatus::Truncated { lines_read, reason } => {
                assert_eq!(lines_read, 2);
                assert!(reason.contains("disk on fire"));
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }
}
