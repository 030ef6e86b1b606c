use std::io::Write;

use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::wordlist::CommonWords;

/// Words at or below this length make trivial anagrams and are skipped.
const MIN_PUZZLE_LEN: usize = 4;

/// Append one `word|anagram of: <shuffled>` line per eligible common word.
///
/// Runs after the synonym pass so anagram lines always follow synonym lines
/// in the output file. The RNG is injected so callers can seed it for
/// reproducible output. Returns the number of lines written.
pub fn append_anagrams<W: Write, R: Rng + ?Sized>(
    common: &CommonWords,
    rng: &mut R,
    writer: &mut W,
) -> Result<usize> {
    let mut written = 0;
    for word in common.anagram_candidates() {
        if word.chars().count() <= MIN_PUZZLE_LEN {
            continue;
        }
        let mut letters: Vec<char> = word.chars().collect();
        letters.shuffle(rng);
        let shuffled: String = letters.into_iter().collect();
        writeln!(writer, "{word}|anagram of: {shuffled}")
            .context("failed to write anagram line")?;
        written += 1;
    }
    Ok(written)
}
