//! Line-oriented datasets read from input resources

/// An ordered, read-only collection of input lines
///
/// Each line is stored as the raw bytes between line terminators, with the
/// terminator itself stripped. Insertion order matches file order. Datasets
/// are built once by the input loader and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    lines: Vec<Vec<u8>>,
}

impl Dataset {
    pub(crate) fn new(lines: Vec<Vec<u8>>) -> Self {
        Self { lines }
    }

    /// Number of lines in the dataset
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the dataset holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the raw lines in file order
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Decode every line as UTF-8 (lossily) and concatenate with no separator
    ///
    /// This is the placeholder "solve" used by the day modules while the real
    /// puzzle logic is absent: the input is echoed back as one blob.
    pub fn concat_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| String::from_utf8_lossy(line))
            .collect()
    }
}

impl FromIterator<Vec<u8>> for Dataset {
    fn from_iter<I: IntoIterator<Item = Vec<u8>>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
