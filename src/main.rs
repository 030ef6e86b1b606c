use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Level;

use synprep::anagram::append_anagrams;
use synprep::config::{Config, ConfigOverrides};
use synprep::filter::FilterRules;
use synprep::merge::TailPolicy;
use synprep::pipeline::{PassOptions, PassStats, run_pass};
use synprep::wordlist::CommonWords;

/// Flush threshold for the basic pass.
const FILTER_THRESHOLD: usize = 2;

/// Flush threshold for the common-word-gated puzzle pass.
const PUZZLE_THRESHOLD: usize = 3;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Filter and merge a synonym corpus into pipe-delimited puzzle data"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Optional path to a configuration TOML file overriding defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter noise records and merge consecutive duplicate-word runs
    Filter(PassArgs),
    /// Filter against a common-words list and append anagram puzzle lines
    Puzzle(PuzzleArgs),
}

#[derive(Debug, Args)]
struct PassArgs {
    /// Path to the newline-delimited JSON corpus
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path the pipe-delimited output file is written to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop after reading this many records
    #[arg(long)]
    limit: Option<usize>,

    /// Emit a run only when it collects strictly more synonyms than this
    #[arg(long)]
    threshold: Option<usize>,

    /// Drop the final run instead of flushing it at end of input
    #[arg(long)]
    drop_last_run: bool,
}

#[derive(Debug, Args)]
struct PuzzleArgs {
    #[command(flatten)]
    pass: PassArgs,

    /// Path to the common-words allow-list (one word per line)
    #[arg(long)]
    common: Option<PathBuf>,

    /// Seed for the anagram shuffle; omit for OS randomness
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Filter(args) => run_filter(args, cli.config),
        Command::Puzzle(args) => run_puzzle(args, cli.config),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| verbosity_filter(verbose));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| anyhow::anyhow!("Failed to set tracing subscriber: {err}"))
}

/// Filter used when `RUST_LOG` is not set.
fn verbosity_filter(verbose: bool) -> tracing_subscriber::EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::EnvFilter::new(level.to_string())
}

fn run_filter(args: PassArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(&args, None, config_path)?;
    let options = pass_options(&args, FILTER_THRESHOLD);

    let stats = with_corpus_io(&config, |reader, writer| {
        run_pass(reader, writer, &FilterRules::basic(), options)
    })?;

    report_stats(&stats, &config.output_path, 0);
    Ok(())
}

fn run_puzzle(args: PuzzleArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(&args.pass, Some(&args), config_path)?;
    let options = pass_options(&args.pass, PUZZLE_THRESHOLD);

    let common_path = config
        .common_path
        .clone()
        .context("the puzzle pass requires a common-words file; pass --common or set common_path")?;
    let common = CommonWords::load(&common_path)?;
    tracing::info!(
        "loaded {} common words from {}",
        common.len(),
        common_path.display()
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (stats, anagram_lines) = with_corpus_io(&config, |reader, writer| {
        let stats = run_pass(reader, writer, &FilterRules::gated(&common), options)?;
        let anagram_lines = append_anagrams(&common, &mut rng, writer)?;
        Ok((stats, anagram_lines))
    })?;

    report_stats(&stats, &config.output_path, anagram_lines);
    Ok(())
}

fn load_config(
    pass: &PassArgs,
    puzzle: Option<&PuzzleArgs>,
    config_path: Option<PathBuf>,
) -> Result<Config> {
    let overrides = ConfigOverrides {
        input: pass.input.clone(),
        output: pass.output.clone(),
        common: puzzle.and_then(|p| p.common.clone()),
        seed: puzzle.and_then(|p| p.seed),
    };
    Config::load(config_path, overrides)
}

fn pass_options(args: &PassArgs, default_threshold: usize) -> PassOptions {
    PassOptions {
        threshold: args.threshold.unwrap_or(default_threshold),
        limit: args.limit,
        tail: if args.drop_last_run {
            TailPolicy::Drop
        } else {
            TailPolicy::Emit
        },
    }
}

/// Open the corpus for reading and the output file for writing (truncating
/// any previous run), hand both to `body`, and flush the writer afterwards.
fn with_corpus_io<T>(
    config: &Config,
    body: impl FnOnce(BufReader<File>, &mut BufWriter<File>) -> Result<T>,
) -> Result<T> {
    let input = File::open(&config.input_path)
        .with_context(|| format!("failed to open corpus at {}", config.input_path.display()))?;
    let output = File::create(&config.output_path).with_context(|| {
        format!(
            "failed to create output file at {}",
            config.output_path.display()
        )
    })?;

    let mut writer = BufWriter::new(output);
    let result = body(BufReader::new(input), &mut writer)?;
    writer.flush().context("failed to flush output file")?;
    Ok(result)
}

fn report_stats(stats: &PassStats, output_path: &Path, anagram_lines: usize) {
    tracing::info!(
        "read {} records, rejected {}, wrote {} synonym lines to {}",
        stats.records_read,
        stats.records_rejected,
        stats.lines_emitted,
        output_path.display()
    );
    for (reason, count) in &stats.rejects_by_reason {
        tracing::debug!("  rejected {}: {}", reason, count);
    }
    if anagram_lines > 0 {
        tracing::info!("appended {} anagram lines", anagram_lines);
    }
}
