//! Export configuration
//!
//! Defines the `layoutlua.toml` format. Every option defaults to off, and the
//! defaults reproduce the plain exporter output exactly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "layoutlua.toml";

/// Options controlling how a layout is turned into a script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Suffix identifiers that collide with an earlier one (`Title`, `Title_2`, ...)
    #[serde(default)]
    pub unique_names: bool,

    /// Pick a long-bracket level that keeps `text` intact
    #[serde(default)]
    pub escape_long_strings: bool,

    /// Prefix `_` onto identifiers starting with a digit or equal to a keyword
    #[serde(default)]
    pub safe_identifiers: bool,
}

impl ExportConfig {
    /// Every safety option enabled
    pub fn strict() -> Self {
        Self {
            unique_names: true,
            escape_long_strings: true,
            safe_identifiers: true,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: ExportConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load the first config found by [`find_config`], or defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        match find_config(dir) {
            Some(path) => Self::from_config_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Render as TOML, for writing a starter config
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Find a config file
///
/// Searches for:
/// 1. `layoutlua.toml` in `dir`
/// 2. `layoutlua/config.toml` in the user config directory
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let local = dir.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    user_config_path().filter(|p| p.exists())
}

/// `layoutlua/config.toml` under the platform config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("layoutlua").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert!(!config.unique_names);
        assert!(!config.escape_long_strings);
        assert!(!config.safe_identifiers);
    }

    #[test]
    fn test_partial_config_file() {
        let config: ExportConfig = toml::from_str("unique_names = true").unwrap();
        assert!(config.unique_names);
        assert!(!config.escape_long_strings);
    }

    #[test]
    fn test_config_serialization() {
        let config = ExportConfig::strict();
        let text = config.to_toml_string().unwrap();
        let deserialized: ExportConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_find_local_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "escape_long_strings = true\n",
        )
        .unwrap();

        let found = find_config(temp_dir.path()).unwrap();
        assert!(found.ends_with(CONFIG_FILE_NAME));

        let config = ExportConfig::discover(temp_dir.path()).unwrap();
        assert!(config.escape_long_strings);
    }

    #[test]
    fn test_bad_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "unique_names = \"sometimes\"").unwrap();

        let err = ExportConfig::from_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
