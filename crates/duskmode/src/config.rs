//! Store configuration.
//!
//! The defaults reproduce the stock behavior: key `"theme"`, classes
//! `light-mode` / `dark-mode`, and light when nothing is persisted.
//! Configuration files are YAML:
//!
//! ```yaml
//! storage_key: ui-theme
//! dark_class: theme-dark
//! fallback: system
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::detect::ModeDetector;
use crate::error::ConfigError;
use crate::mode::DisplayMode;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme";
/// Class applied to the root element for every value other than `dark`.
pub const DEFAULT_LIGHT_CLASS: &str = "light-mode";
/// Class applied to the root element for exactly `dark`.
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";

/// Mode used by `initialize` when storage holds nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    #[default]
    Light,
    Dark,
    /// Ask the host's color scheme.
    System,
}

impl Fallback {
    pub fn resolve(self, detector: ModeDetector) -> DisplayMode {
        match self {
            Fallback::Light => DisplayMode::Light,
            Fallback::Dark => DisplayMode::Dark,
            Fallback::System => detector(),
        }
    }
}

/// Settings for a [`ThemePreferenceStore`](crate::ThemePreferenceStore).
///
/// # Example
///
/// ```rust
/// use duskmode::{Fallback, StoreConfig};
///
/// let config = StoreConfig::new()
///     .with_storage_key("ui-theme")
///     .with_fallback(Fallback::Dark);
/// assert_eq!(config.dark_class, "dark-mode");
///
/// let parsed = StoreConfig::from_yaml_str("storage_key: ui-theme\nfallback: dark\n").unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub storage_key: String,
    pub light_class: String,
    pub dark_class: String,
    pub fallback: Fallback,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.storage_key = key.to_string();
        self
    }

    pub fn with_classes(mut self, light: &str, dark: &str) -> Self {
        self.light_class = light.to_string();
        self.dark_class = dark.to_string();
        self
    }

    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns the class applied for `mode`.
    pub fn class_for(&self, mode: DisplayMode) -> &str {
        match mode {
            DisplayMode::Light => &self.light_class,
            DisplayMode::Dark => &self.dark_class,
        }
    }

    /// Parses YAML; absent fields keep their defaults.
    pub fn from_yaml_str(source: &str) -> Result<Self, serde_yaml::Error> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source)
    }

    /// Loads YAML configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            light_class: DEFAULT_LIGHT_CLASS.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            fallback: Fallback::Light,
        }
    }
}
