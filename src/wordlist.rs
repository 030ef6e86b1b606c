use std::collections::HashSet;
use std::fs;
use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};

/// Positions in the common-word list mined for anagram clues. The head of the
/// list is mostly function words that make poor puzzles.
pub const ANAGRAM_SLICE: Range<usize> = 100..500;

/// The common-word allow-list: an ordered list (slice positions matter for the
/// anagram pass) doubling as a membership set for the puzzle gate.
#[derive(Debug)]
pub struct CommonWords {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl CommonWords {
    /// Load from a one-word-per-line file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read common-words file at {}", path.display()))?;
        Ok(Self::from_lines(&raw))
    }

    pub fn from_lines(raw: &str) -> Self {
        let entries: Vec<String> = raw
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        let index = entries.iter().cloned().collect();
        Self { entries, index }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The slice of entries eligible for anagram clues, clamped to the list
    /// length so a short list yields fewer (or zero) candidates.
    pub fn anagram_candidates(&self) -> &[String] {
        let start = ANAGRAM_SLICE.start.min(self.entries.len());
        let end = ANAGRAM_SLICE.end.min(self.entries.len());
        &self.entries[start..end]
    }
}
