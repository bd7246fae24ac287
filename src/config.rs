use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tokio::fs;
use tracing::info;

use crate::names::{NameGenerator, DEFAULT_ALPHABET, DEFAULT_NAME_LENGTH};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub port: u16,
    pub storage: Storage,
    pub limits: Limits,
    pub names: Names,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_upload_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Names {
    pub alphabet: String,
    pub length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "http://127.0.0.1:8080".to_owned(),
            port: 8080,
            storage: Storage::default(),
            limits: Limits::default(),
            names: Names::default(),
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Storage {
            dir: PathBuf::from("pastes"),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_upload_size: 4 * 1024 * 1024,
        }
    }
}

impl Default for Names {
    fn default() -> Self {
        Names {
            alphabet: DEFAULT_ALPHABET.to_owned(),
            length: DEFAULT_NAME_LENGTH,
        }
    }
}

impl Names {
    pub fn generator(&self) -> anyhow::Result<NameGenerator> {
        NameGenerator::new(&self.alphabet, self.length).context("invalid name configuration")
    }
}

impl Config {
    /// Load the config file at `path`, falling back to defaults if it doesn't exist.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let source = match fs::read_to_string(path).await {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no config file at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read config file {}", path.display()))
            }
        };

        Config::parse(&source)
    }

    pub fn parse(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("failed to deserialize config")
    }
}
