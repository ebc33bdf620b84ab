use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_OUTPUT: &str = "output.txt";

/// A run configuration as stored on disk. Every field is optional so that a
/// file can be completed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub generations: Option<usize>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl ConfigFile {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }
}

/// A fully resolved run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub height: usize,
    pub width: usize,
    pub generations: usize,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path)
                .with_context(|| format!("Couldn't load config {}", path.display()))?,
            None => ConfigFile::default(),
        };

        Self::resolve(cli, file)
    }

    fn resolve(cli: &Cli, file: ConfigFile) -> anyhow::Result<Self> {
        let (Some(height), Some(width), Some(generations)) = (
            cli.height.or(file.height),
            cli.width.or(file.width),
            cli.generations.or(file.generations),
        ) else {
            bail!("Height, width and generation count are all required");
        };

        Ok(Self {
            height,
            width,
            generations,
            output: cli
                .output
                .clone()
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            seed: cli.seed.or(file.seed),
        })
    }
}
