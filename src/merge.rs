/// What to do with the final run when input ends, since no later word arrives
/// to trigger its flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailPolicy {
    /// Flush the last run like any other.
    #[default]
    Emit,
    /// Drop it, matching the historical corpus builds.
    Drop,
}

/// Accumulates consecutive records sharing a word and flushes each completed
/// run as one pipe-joined line.
///
/// A run only flushes once the next differing word arrives, and only when it
/// collected strictly more synonyms than the threshold. Callers feed accepted
/// records only; rejected records must stay invisible to the accumulator.
#[derive(Debug)]
pub struct RunMerger {
    threshold: usize,
    tail: TailPolicy,
    last_word: Option<String>,
    collected: Vec<String>,
}

impl RunMerger {
    pub fn new(threshold: usize, tail: TailPolicy) -> Self {
        Self {
            threshold,
            tail,
            last_word: None,
            collected: Vec::new(),
        }
    }

    /// Feed one accepted record. When the word differs from the current run,
    /// returns the previous run's output line if it cleared the threshold.
    pub fn push(&mut self, word: &str, synonyms: Vec<String>) -> Option<String> {
        if self.last_word.as_deref() == Some(word) {
            self.collected.extend(synonyms);
            return None;
        }
        let flushed = self.take_line();
        self.last_word = Some(word.to_string());
        self.collected = synonyms;
        flushed
    }

    /// Signal end of input. Under `TailPolicy::Emit` the final run gets the
    /// same threshold check as any other.
    pub fn finish(mut self) -> Option<String> {
        match self.tail {
            TailPolicy::Emit => self.take_line(),
            TailPolicy::Drop => None,
        }
    }

    fn take_line(&mut self) -> Option<String> {
        let word = self.last_word.as_ref()?;
        if self.collected.len() <= self.threshold {
            return None;
        }
        let mut line = word.clone();
        for synonym in self.collected.drain(..) {
            line.push('|');
            line.push_str(&synonym);
        }
        Some(line)
    }
}
