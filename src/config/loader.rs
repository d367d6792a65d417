//! Locating and reading the configuration file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::store::{ConfigFormat, ConfigStore};

/// Configuration compiled into the binary, used when no file is given.
pub const BUNDLED_CONFIG: &str = include_str!("../../resources/application.properties");

/// Errors from reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("unsupported config file format '.{0}' (expected .properties, .toml, .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// Read from the given file.
    Loaded(PathBuf),
    /// No file was requested.
    Bundled,
    /// The requested file does not exist; the bundled configuration is used.
    FallbackToBundled(PathBuf),
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub store: ConfigStore,
    pub outcome: ConfigOutcome,
}

/// The bundled configuration as a store.
pub fn bundled() -> ConfigStore {
    ConfigStore::from_properties(BUNDLED_CONFIG)
}

/// Load configuration from `path`, or the bundled configuration if `path` is
/// `None` or names a file that does not exist.
pub fn load(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using bundled configuration");
        return Ok(LoadedConfig {
            store: bundled(),
            outcome: ConfigOutcome::Bundled,
        });
    };

    let format = format_for(path)?;
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(
                "Config file {} not found, falling back to bundled configuration",
                path.display()
            );
            return Ok(LoadedConfig {
                store: bundled(),
                outcome: ConfigOutcome::FallbackToBundled(path.to_path_buf()),
            });
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let store = ConfigStore::parse(&text, format).map_err(|reason| ConfigError::Malformed {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::debug!(
        "Loaded {} keys from {} ({})",
        store.len(),
        path.display(),
        format.as_str()
    );

    Ok(LoadedConfig {
        store,
        outcome: ConfigOutcome::Loaded(path.to_path_buf()),
    })
}

/// Files without an extension are read as `.properties`.
fn format_for(path: &Path) -> Result<ConfigFormat, ConfigError> {
    match path.extension().and_then(|e| e.to_str()) {
        None => Ok(ConfigFormat::Properties),
        Some(ext) => {
            ConfigFormat::from_extension(ext).ok_or_else(|| ConfigError::UnsupportedFormat(ext.to_string()))
        }
    }
}
