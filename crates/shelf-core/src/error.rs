//! Error types for Shelf Core

use std::path::PathBuf;

/// Main shelf error type
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File-backed store requested without a directory
    #[error("no data directory configured")]
    MissingDataDir,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file unreadable
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file not valid TOML for this schema
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Field value out of range
    #[error("invalid value: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
