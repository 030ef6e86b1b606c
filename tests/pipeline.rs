use std::io::{Cursor, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

use synprep::anagram::append_anagrams;
use synprep::filter::FilterRules;
use synprep::merge::TailPolicy;
use synprep::pipeline::{PassOptions, run_pass};
use synprep::wordlist::CommonWords;

fn corpus_line(word: &str, synonyms: &[&str]) -> String {
    let synonyms: Vec<String> = synonyms.iter().map(|s| format!("\"{s}\"")).collect();
    format!(
        "{{\"word\":\"{word}\",\"synonyms\":[{}]}}\n",
        synonyms.join(",")
    )
}

fn options(threshold: usize) -> PassOptions {
    PassOptions {
        threshold,
        limit: None,
        tail: TailPolicy::Emit,
    }
}

#[test]
fn basic_pass_filters_noise_and_merges_runs() {
    let mut corpus = String::new();
    corpus.push_str(&corpus_line("cat", &["feline", "kitty"]));
    corpus.push_str(&corpus_line("e.g.", &["for example", "such as", "like"]));
    corpus.push_str(&corpus_line("well-to-do", &["rich", "wealthy", "loaded"]));
    corpus.push_str(&corpus_line("give up", &["quit", "surrender", "yield"]));
    corpus.push_str(&corpus_line("London", &["capital", "city", "metropolis"]));
    corpus.push_str(&corpus_line("7eleven", &["shop", "store", "kiosk"]));
    corpus.push_str(&corpus_line("mirth", &["Mirth", "glee", "joy"]));
    corpus.push_str(&corpus_line("happy", &["glad", "cheerful"]));
    corpus.push_str(&corpus_line("happy", &["joyful", "merry"]));
    corpus.push_str(&corpus_line("quiet", &["silent", "hushed", "still"]));

    let mut out = Vec::new();
    let stats = run_pass(
        Cursor::new(corpus),
        &mut out,
        &FilterRules::basic(),
        options(2),
    )
    .expect("pass over in-memory corpus");

    let text = String::from_utf8(out).expect("utf8 output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec!["happy|glad|cheerful|joyful|merry", "quiet|silent|hushed|still"]
    );
    assert_eq!(stats.records_read, 10);
    assert_eq!(stats.records_rejected, 7);
    assert_eq!(stats.lines_emitted, 2);

    // Every emitted word satisfies the acceptance predicates.
    for line in &lines {
        let word = line.split('|').next().expect("word field");
        assert!(!word.contains('.') && !word.contains('-') && !word.contains(' '));
        assert!(word.chars().count() > 3);
        let first = word.chars().next().expect("non-empty word");
        assert!(first.is_lowercase() && !first.is_ascii_digit());
    }
}

#[test]
fn puzzle_pass_gates_on_common_words_and_appends_anagrams() {
    let mut common_raw: String = (0..100).map(|i| format!("the{i}\n")).collect();
    common_raw.push_str("happy\nsprocket\nlamp\n");
    let common = CommonWords::from_lines(&common_raw);

    let mut corpus = String::new();
    corpus.push_str(&corpus_line("happy", &["glad", "cheerful"]));
    corpus.push_str(&corpus_line("happy", &["joyful", "merry"]));
    corpus.push_str(&corpus_line("quiet", &["silent", "hushed", "still", "calm"]));
    corpus.push_str(&corpus_line("lamp", &["light", "lantern", "torch", "sconce"]));

    let mut out = Vec::new();
    let stats = run_pass(
        Cursor::new(corpus),
        &mut out,
        &FilterRules::gated(&common),
        options(3),
    )
    .expect("gated pass");
    let mut rng = StdRng::seed_from_u64(1234);
    let anagram_lines = append_anagrams(&common, &mut rng, &mut out).expect("anagram pass");

    let text = String::from_utf8(out).expect("utf8 output");
    let lines: Vec<&str> = text.lines().collect();

    // "quiet" is not in the common list; "happy" and "lamp" are. All synonym
    // lines precede all anagram lines.
    assert_eq!(lines[0], "happy|glad|cheerful|joyful|merry");
    assert_eq!(lines[1], "lamp|light|lantern|torch|sconce");
    assert!(!text.contains("quiet"));
    assert_eq!(stats.lines_emitted, 2);

    // Candidates are positions [100, 500): "happy" and "sprocket"; "lamp" is
    // four letters and skipped.
    assert_eq!(anagram_lines, 2);
    assert_eq!(lines.len(), 4);
    for line in &lines[2..] {
        let (word, rest) = line.split_once('|').expect("pipe-delimited line");
        let shuffled = rest.strip_prefix("anagram of: ").expect("anagram prefix");
        let mut expected: Vec<char> = word.chars().collect();
        let mut actual: Vec<char> = shuffled.chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(expected, actual);
    }
}

#[test]
fn seeded_puzzle_output_is_reproducible() {
    let mut common_raw: String = (0..100).map(|i| format!("the{i}\n")).collect();
    common_raw.push_str("sprocket\nwhistle\n");
    let common = CommonWords::from_lines(&common_raw);

    let render = || {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(42);
        append_anagrams(&common, &mut rng, &mut out).expect("anagram pass");
        out
    };

    assert_eq!(render(), render());
}

#[test]
fn corpus_files_round_trip_through_the_loaders() {
    let mut common_file = NamedTempFile::new().expect("temp common file");
    write!(common_file, "happy\nquiet\n").expect("write common file");

    let common = CommonWords::load(common_file.path()).expect("load common words");
    assert_eq!(common.len(), 2);
    assert!(common.contains("happy"));

    let missing = CommonWords::load(std::path::Path::new("/definitely/not/here.txt"));
    assert!(missing.is_err());
}
