//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the default location if present)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default staging behaviour.
    pub scaffold: ScaffoldDefaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScaffoldDefaults {
    /// Symlink scaffold files instead of copying them.
    pub symlink: bool,
    /// Vendor directory used for the autoload require path.
    pub vendor_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to probe the default location).  A missing default file is fine;
    /// an explicitly passed file that cannot be read is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, explicit) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("config file {} is not valid", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stagehand.json` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stagehand", "stagehand")
            .map(|d| d.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from(".stagehand.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_do_not_symlink() {
        let cfg = AppConfig::default();
        assert!(!cfg.scaffold.symlink);
        assert!(cfg.scaffold.vendor_dir.is_none());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/stagehand.json");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"scaffold": {"symlink": true}}"#).unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.scaffold.symlink);
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
