//! Controller configuration
//!
//! Every field has a default, so an empty TOML document is a valid config.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use shelf_catalog::DEFAULT_CURRENCY_SUFFIX;
use shelf_storage::DEFAULT_STORAGE_KEY;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default fade-out before a filtered item leaves layout
pub const DEFAULT_FADE_OUT_MS: u64 = 250;

/// Shelf configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    /// Key the catalog is persisted under
    pub storage_key: String,
    /// Fade-out duration in milliseconds
    pub fade_out_ms: u64,
    /// Animate closing the add-product form
    pub animate_form: bool,
    /// Suffix appended to formatted prices
    pub currency_suffix: String,
    /// Directory for the file-backed store
    pub data_dir: Option<PathBuf>,
}

impl ShelfConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error on malformed TOML, unknown fields or invalid values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Check field values
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` for an empty storage key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".to_string()));
        }
        Ok(())
    }

    /// With storage key
    #[inline]
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// With fade-out duration
    #[inline]
    #[must_use]
    pub fn with_fade_out_ms(mut self, ms: u64) -> Self {
        self.fade_out_ms = ms;
        self
    }

    /// With or without form close animation
    #[inline]
    #[must_use]
    pub fn with_animate_form(mut self, animate: bool) -> Self {
        self.animate_form = animate;
        self
    }

    /// With data directory
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Fade-out as a duration
    #[inline]
    #[must_use]
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fade_out_ms: DEFAULT_FADE_OUT_MS,
            animate_form: true,
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ShelfConfig::from_toml_str("").unwrap(), ShelfConfig::default());
    }

    #[test]
    fn defaults() {
        let config = ShelfConfig::default();
        assert_eq!(config.storage_key, "products");
        assert_eq!(config.fade_out(), Duration::from_millis(250));
        assert!(config.animate_form);
        assert_eq!(config.currency_suffix, "₫");
    }

    #[test]
    fn partial_override() {
        let config = ShelfConfig::from_toml_str(
            r#"
            fade_out_ms = 0
            animate_form = false
            data_dir = "/var/lib/shelf"
            "#,
        )
        .unwrap();
        assert_eq!(config.fade_out_ms, 0);
        assert!(!config.animate_form);
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/shelf")));
        assert_eq!(config.storage_key, "products");
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            ShelfConfig::from_toml_str("fade_ms = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_empty_storage_key() {
        assert!(matches!(
            ShelfConfig::from_toml_str(r#"storage_key = " ""#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.toml");
        std::fs::write(&path, "storage_key = \"shop\"\n").unwrap();

        assert_eq!(ShelfConfig::load(&path).unwrap().storage_key, "shop");
        assert!(matches!(
            ShelfConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
