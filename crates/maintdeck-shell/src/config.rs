//! Shell configuration parsing
//!
//! Reads `config.toml` from the platform config directory
//! (`~/.config/maintdeck/` on Linux). The default-path load is lenient:
//! a missing or unparseable file falls back to defaults with a log line,
//! never an error. An explicitly requested file is strict.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use maintdeck_core::prelude::*;
use maintdeck_core::ViewId;

const CONFIG_FILENAME: &str = "config.toml";
const MAINTDECK_DIR: &str = "maintdeck";

/// Hosting shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// View shown at startup, and the fallback when a navigation targets a
    /// view with no mounted screen.
    pub default_view: ViewId,

    /// Log each committed navigation at info level.
    pub log_navigation: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_view: ViewId::Dashboard,
            log_navigation: true,
        }
    }
}

/// Load configuration from the default location, falling back to defaults.
pub fn load_config() -> ShellConfig {
    match default_config_path() {
        Some(path) => load_config_at(&path),
        None => {
            debug!("no config directory on this platform, using defaults");
            ShellConfig::default()
        }
    }
}

/// Lenient load: missing file or bad content never fails.
pub fn load_config_at(path: &Path) -> ShellConfig {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return ShellConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                debug!("Loaded shell config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                ShellConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            ShellConfig::default()
        }
    }
}

/// Strict load for an explicitly requested file.
pub fn load_config_file(path: &Path) -> Result<ShellConfig> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(MAINTDECK_DIR).join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_defaults_when_missing() {
        let temp = tempfile::tempdir().unwrap();
        let config = load_config_at(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.default_view, ViewId::Dashboard);
        assert!(config.log_navigation);
    }

    #[test]
    fn test_load_config_custom() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "default_view = \"equipment\"\nlog_navigation = false\n",
        )
        .unwrap();

        let config = load_config_at(&path);
        assert_eq!(config.default_view, ViewId::Equipment);
        assert!(!config.log_navigation);
    }

    #[test]
    fn test_load_config_partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "default_view = \"teams\"\n").unwrap();

        let config = load_config_at(&path);
        assert_eq!(config.default_view, ViewId::Teams);
        assert!(config.log_navigation);
    }

    #[test]
    fn test_load_config_invalid_toml_falls_back() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "default_view = [not toml").unwrap();

        let config = load_config_at(&path);
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_load_config_file_strict_errors() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = load_config_file(&missing).unwrap_err();
        assert!(err.is_fatal());

        let bad = temp.path().join("bad.toml");
        std::fs::write(&bad, "default_view = 7").unwrap();
        let err = load_config_file(&bad).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
