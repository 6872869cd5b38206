//! Per-run results.
//!
//! The [`Summary`] collects one [`SummaryEntry`] per work path, in the order
//! the paths were given on the command line.

use crate::size::SizeResult;

/// Total of one requested work path.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryEntry {
    path: String,
    bytes: u64,
    size: SizeResult,
}

impl SummaryEntry {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    pub fn size(&self) -> SizeResult {
        self.size
    }
}

/// Append-only list of work path totals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    entries: Vec<SummaryEntry>,
}

impl Summary {
    pub fn push(&mut self, path: impl Into<String>, bytes: u64, size: SizeResult) {
        self.entries.push(SummaryEntry {
            path: path.into(),
            bytes,
            size,
        });
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all entries. Repeated work paths count once per occurrence.
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.bytes).sum()
    }
}
