use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::filter::FilterRules;
use crate::merge::{RunMerger, TailPolicy};
use crate::record::Record;

#[derive(Debug, Clone, Copy)]
pub struct PassOptions {
    /// A run is emitted only when it collects strictly more synonyms than this.
    pub threshold: usize,
    /// Stop after reading this many records; `None` reads to end of input.
    pub limit: Option<usize>,
    pub tail: TailPolicy,
}

/// Counters for one pass, reported at the end of the run.
#[derive(Debug, Default, Clone)]
pub struct PassStats {
    pub records_read: usize,
    pub records_rejected: usize,
    pub lines_emitted: usize,
    pub rejects_by_reason: BTreeMap<&'static str, usize>,
}

/// Run one filter-and-merge pass: decode records line by line, drop the ones
/// the rules reject, merge consecutive same-word runs, and write each flushed
/// run as a pipe-delimited line.
///
/// A stream shorter than the corpus's nominal size is normal termination, not
/// an error; blank lines are skipped. Any malformed line aborts the pass.
pub fn run_pass<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    rules: &FilterRules<'_>,
    options: PassOptions,
) -> Result<PassStats> {
    let mut stats = PassStats::default();
    let mut merger = RunMerger::new(options.threshold, options.tail);

    for (idx, line) in reader.lines().enumerate() {
        if let Some(limit) = options.limit {
            if stats.records_read >= limit {
                break;
            }
        }

        let line = line.with_context(|| format!("failed to read corpus line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let record = Record::parse(&line, idx + 1)?;
        stats.records_read += 1;

        if let Some(reason) = rules.rejects(&record) {
            stats.records_rejected += 1;
            *stats.rejects_by_reason.entry(reason.label()).or_insert(0) += 1;
            tracing::debug!(
                "rejected '{}' at line {}: {}",
                record.word,
                idx + 1,
                reason.label()
            );
            continue;
        }

        if let Some(flushed) = merger.push(&record.word, record.synonyms) {
            writeln!(writer, "{flushed}").context("failed to write output line")?;
            stats.lines_emitted += 1;
        }
    }

    if let Some(flushed) = merger.finish() {
        writeln!(writer, "{flushed}").context("failed to write output line")?;
        stats.lines_emitted += 1;
    }

    Ok(stats)
}
