use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use directories_next::ProjectDirs;
use serde::Deserialize;

pub const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: String,
    pub timeouts: Timeouts,
}

/// Per-request timeouts, in seconds.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    pub health_secs: u64,
    pub create_secs: u64,
    pub fetch_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: DEFAULT_SERVER.to_owned(),
            timeouts: Timeouts::default(),
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Timeouts {
            health_secs: 5,
            create_secs: 10,
            fetch_secs: 5,
        }
    }
}

impl Timeouts {
    pub fn health(&self) -> Duration {
        Duration::from_secs(self.health_secs)
    }

    pub fn create(&self) -> Duration {
        Duration::from_secs(self.create_secs)
    }

    pub fn fetch(&self) -> Duration {
        Duration::from_secs(self.fetch_secs)
    }
}

impl Config {
    /// Read a config file from an explicit path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents).context("failed to deserialize config")
    }

    /// Load from `path` if given, else from the platform config dir if a file
    /// exists there, else fall back to defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Config::from_file(path);
        }

        match default_path() {
            Some(path) if path.is_file() => Config::from_file(path),
            _ => Ok(Config::default()),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pastebox-healthcheck")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
