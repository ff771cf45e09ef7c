use crate::model::ItemId;
use crate::stats::{TargetError, TargetSpec};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_ITEM_COUNT: ItemId = 21;
pub const DEFAULT_ATTRIBUTE: &str = "dot";
pub const DEFAULT_VALUE: &str = "no-dot";
pub const DEFAULT_RATIO: f64 = 0.6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Target(#[from] TargetError),
}

/// Command line flags. Flags override values from `--config`.
#[derive(Debug, Default, Parser)]
#[command(name = "ratio-picker", about = "Pick items until the selection hits a target ratio")]
pub struct Cli {
    /// Number of items in the grid
    #[arg(long = "items")]
    pub item_count: Option<ItemId>,

    /// Seed for item generation; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target attribute: dot, color or size
    #[arg(long)]
    pub attribute: Option<String>,

    /// Target attribute value, e.g. no-dot, green, small
    #[arg(long)]
    pub value: Option<String>,

    /// Desired share of matching items, between 0 and 1
    #[arg(long)]
    pub ratio: Option<f64>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub items: Option<ItemId>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub target: FileTarget,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileTarget {
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub ratio: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub item_count: ItemId,
    pub seed: Option<u64>,
    pub target: TargetSpec,
}

pub fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let data = fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl AppConfig {
    /// Loads the optional config file named by `cli` and merges the flags over it.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => read_config_file(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    pub fn merge(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let attribute = cli
            .attribute
            .as_deref()
            .or(file.target.attribute.as_deref())
            .unwrap_or(DEFAULT_ATTRIBUTE);
        let value = cli
            .value
            .as_deref()
            .or(file.target.value.as_deref())
            .unwrap_or(DEFAULT_VALUE);
        let ratio = cli.ratio.or(file.target.ratio).unwrap_or(DEFAULT_RATIO);

        Ok(Self {
            item_count: cli.item_count.or(file.items).unwrap_or(DEFAULT_ITEM_COUNT),
            seed: cli.seed.or(file.seed),
            target: TargetSpec::parse(attribute, value, ratio)?,
        })
    }
}
