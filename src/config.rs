//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled default: the per-user data directory
//! 2. Global config: `$XDG_CONFIG_HOME/ally/ally.toml`
//! 3. Environment variables: `ALLY_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("config error: {0}")]
    Env(#[from] config::ConfigError),

    #[error("cannot determine a home directory for this user")]
    NoHome,
}

/// Resolved settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding one `.cmd` script per alias
    pub data_dir: PathBuf,
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", which falls back to the compiled default).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    data_dir: Option<String>,
}

impl Settings {
    /// Load settings from the global config file and `ALLY_*` env vars.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(global_config_path().as_deref(), "ALLY")
    }

    /// Load from an explicit config file and env prefix. The file may be
    /// absent; env vars replace file values.
    pub fn load_from(config_file: Option<&Path>, env_prefix: &str) -> Result<Self, ConfigError> {
        let mut raw = match config_file {
            Some(path) if path.exists() => load_raw_settings(path)?,
            _ => RawSettings::default(),
        };

        // Env vars replace file values - the config crate is used just
        // for env var parsing
        let env = Config::builder()
            .add_source(Environment::with_prefix(env_prefix))
            .build()?;
        if let Ok(val) = env.get_string("data_dir") {
            raw.data_dir = Some(val);
        }

        let data_dir = match raw.data_dir {
            // Expand ~ in path-like fields
            Some(dir) => PathBuf::from(shellexpand::tilde(&dir).into_owned()),
            None => default_data_dir().ok_or(ConfigError::NoHome)?,
        };

        Ok(Self { data_dir })
    }
}

fn load_raw_settings(path: &Path) -> Result<RawSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Path to the global config file, if a config directory can be resolved.
pub fn global_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("ally.toml"))
}

fn default_data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "ally")
}
