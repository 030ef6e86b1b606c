use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

/// Resolved run configuration. Precedence: CLI override, then config file,
/// then environment variable, then built-in default.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub common_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    common_path: Option<PathBuf>,
    seed: Option<u64>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub common: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>, overrides: ConfigOverrides) -> Result<Self> {
        let file_config = load_file_config(config_path.as_ref())?;

        let input_path = overrides
            .input
            .or(file_config.input_path)
            .or_else(|| env::var("SYNPREP_INPUT").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("raw.txt"));

        let output_path = overrides
            .output
            .or(file_config.output_path)
            .or_else(|| env::var("SYNPREP_OUTPUT").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("output.txt"));

        let common_path = overrides
            .common
            .or(file_config.common_path)
            .or_else(|| env::var("SYNPREP_COMMON").ok().map(PathBuf::from));

        let seed = overrides.seed.or(file_config.seed);

        Ok(Self {
            input_path,
            output_path,
            common_path,
            seed,
        })
    }
}

fn load_file_config(path: Option<&PathBuf>) -> Result<FileConfig> {
    if let Some(path) = path {
        if path.exists() {
            return read_config_from_path(path);
        }
        anyhow::bail!("config path {:?} does not exist", path);
    }

    if let Some(default_path) = default_config_path() {
        if default_path.exists() {
            return read_config_from_path(&default_path);
        }
    }

    Ok(FileConfig::default())
}

fn read_config_from_path(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file at {}", path.display()))
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "synprep", "synprep")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
