use serde::Deserialize;
use thiserror::Error;

/// One decoded corpus line: a word paired with its listed synonyms.
///
/// The corpus is pre-sorted so that identical words arrive in consecutive
/// runs; the merge stage relies on that ordering.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub word: String,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("corpus line {line} is not a valid record: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl Record {
    /// Decode a single corpus line. `line_no` is 1-based and only used for
    /// error reporting.
    pub fn parse(raw: &str, line_no: usize) -> Result<Self, RecordError> {
        serde_json::from_str(raw).map_err(|source| RecordError::Decode {
            line: line_no,
            source,
        })
    }

    /// True when the word appears (case-insensitively) in its own synonym
    /// list. Such records are thesaurus noise and get dropped whole.
    pub fn lists_itself(&self) -> bool {
        let lowered = self.word.to_lowercase();
        self.synonyms.iter().any(|syn| syn.to_lowercase() == lowered)
    }
}
