//! Command-line configuration.
//!
//! A TOML file may set the session identity and point at a JSON seed tree:
//!
//! ```toml
//! seed = "tree.json"
//!
//! [session]
//! user = "root"
//! host = "box"
//! home = "srv/www"
//! max_command_history = 50
//! ```
//!
//! A relative `seed` path is resolved against the directory holding the
//! config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use terminalx_core::{SeedError, SessionConfig, VirtualFs};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid seed {}: {source}", path.display())]
    Seed {
        path: PathBuf,
        #[source]
        source: SeedError,
    },
}

/// Settings read from `--config`, before flags are applied.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub session: SessionConfig,
    /// JSON seed tree replacing the built-in file system
    pub seed: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = read(path)?;
        let mut config = Self::from_toml_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(seed) = config.seed.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.seed = Some(base.join(seed));
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Build the file system: the seed file if one is set, otherwise the
    /// built-in tree.
    pub fn file_system(&self) -> Result<VirtualFs, ConfigError> {
        match &self.seed {
            Some(path) => load_seed(path),
            None => Ok(VirtualFs::seeded()),
        }
    }
}

/// Read a JSON seed tree.
pub fn load_seed(path: &Path) -> Result<VirtualFs, ConfigError> {
    let json = read(path)?;
    VirtualFs::from_json(&json).map_err(|source| ConfigError::Seed {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}
