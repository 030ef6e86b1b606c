use crate::record::Record;
use crate::wordlist::CommonWords;

/// Words at or below this length carry too little signal to keep.
const MIN_WORD_LEN: usize = 3;

/// Longest word the puzzle grid can hold.
const PUZZLE_MAX_WORD_LEN: usize = 10;

/// Why a record was dropped before it reached the merge stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    ContainsPeriod,
    ContainsHyphen,
    MultiWord,
    TooShort,
    Capitalized,
    LeadingDigit,
    SelfSynonym,
    NotCommon,
    TooLong,
}

impl RejectReason {
    pub fn label(self) -> &'static str {
        match self {
            RejectReason::ContainsPeriod => "contains_period",
            RejectReason::ContainsHyphen => "contains_hyphen",
            RejectReason::MultiWord => "multi_word",
            RejectReason::TooShort => "too_short",
            RejectReason::Capitalized => "capitalized",
            RejectReason::LeadingDigit => "leading_digit",
            RejectReason::SelfSynonym => "self_synonym",
            RejectReason::NotCommon => "not_common",
            RejectReason::TooLong => "too_long",
        }
    }
}

/// The per-record acceptance gate for one pass.
///
/// The basic pass applies the seven noise heuristics; the puzzle pass
/// additionally requires membership in the common-word allow-list and caps
/// word length to fit the grid.
#[derive(Debug, Clone, Copy)]
pub struct FilterRules<'a> {
    max_word_len: Option<usize>,
    allow_list: Option<&'a CommonWords>,
}

impl<'a> FilterRules<'a> {
    pub fn basic() -> Self {
        Self {
            max_word_len: None,
            allow_list: None,
        }
    }

    pub fn gated(allow_list: &'a CommonWords) -> Self {
        Self {
            max_word_len: Some(PUZZLE_MAX_WORD_LEN),
            allow_list: Some(allow_list),
        }
    }

    /// Returns the first matching rejection, or `None` when the record is
    /// accepted. Abbreviations, hyphenations, phrases, short words, proper
    /// nouns, and numeric tokens all fall out here.
    pub fn rejects(&self, record: &Record) -> Option<RejectReason> {
        let word = record.word.as_str();
        if word.contains('.') {
            return Some(RejectReason::ContainsPeriod);
        }
        if word.contains('-') {
            return Some(RejectReason::ContainsHyphen);
        }
        if word.contains(' ') {
            return Some(RejectReason::MultiWord);
        }
        let len = word.chars().count();
        if len <= MIN_WORD_LEN {
            return Some(RejectReason::TooShort);
        }
        match word.chars().next() {
            Some(first) if first.is_uppercase() => return Some(RejectReason::Capitalized),
            Some(first) if first.is_ascii_digit() => return Some(RejectReason::LeadingDigit),
            _ => {}
        }
        if record.lists_itself() {
            return Some(RejectReason::SelfSynonym);
        }
        if let Some(allow_list) = self.allow_list {
            if !allow_list.contains(word) {
                return Some(RejectReason::NotCommon);
            }
        }
        if let Some(max_len) = self.max_word_len {
            if len > max_len {
                return Some(RejectReason::TooLong);
            }
        }
        None
    }
}
