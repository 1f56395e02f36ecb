//! TOML Configuration File Support
//!
//! Optional configuration for the session, loaded from
//! `~/.config/tally/config.toml` (XDG config dir) with environment-variable
//! overrides.
//!
//! # Configuration Priority
//!
//! Highest first:
//! 1. Environment variables (`TALLY_AVATAR_BASE`, `TALLY_CURRENCY`,
//!    `TALLY_SEED`)
//! 2. TOML configuration file (`TALLY_CONFIG` overrides the path)
//! 3. Default values
//!
//! A missing config file is not an error; defaults apply.
//!
//! # Example Configuration
//!
//! ```toml
//! avatar_base = "https://i.pravatar.cc/48"
//! currency_symbol = "€"
//! seed_demo_roster = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forms::DEFAULT_AVATAR_BASE;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Session configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Avatar base URL for newly added friends
    pub avatar_base: String,
    /// Currency symbol used when rendering balances
    pub currency_symbol: String,
    /// Whether to start with the three demo friends
    pub seed_demo_roster: bool,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            avatar_base: DEFAULT_AVATAR_BASE.to_string(),
            currency_symbol: "€".to_string(),
            seed_demo_roster: true,
        }
    }
}

/// Overrides applied on top of file/default values
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Override the avatar base URL
    pub avatar_base: Option<String>,
    /// Override the currency symbol
    pub currency_symbol: Option<String>,
    /// Override demo-roster seeding
    pub seed_demo_roster: Option<bool>,
}

impl ConfigOverrides {
    /// Collect overrides from `TALLY_*` environment variables
    pub fn from_env() -> Self {
        Self {
            avatar_base: std::env::var("TALLY_AVATAR_BASE").ok(),
            currency_symbol: std::env::var("TALLY_CURRENCY").ok(),
            seed_demo_roster: std::env::var("TALLY_SEED").ok().map(|v| parse_flag(&v)),
        }
    }
}

/// Interpret a `TALLY_SEED`-style flag; anything but an explicit "off"
/// value counts as enabled
fn parse_flag(value: &str) -> bool {
    !matches!(value.trim(), "0" | "false" | "no")
}

impl TallyConfig {
    /// Apply overrides, consuming self
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(avatar_base) = overrides.avatar_base {
            self.avatar_base = avatar_base;
        }
        if let Some(currency_symbol) = overrides.currency_symbol {
            self.currency_symbol = currency_symbol;
        }
        if let Some(seed) = overrides.seed_demo_roster {
            self.seed_demo_roster = seed;
        }
        self
    }
}

/// Default config file location (`~/.config/tally/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"))
}

/// Load configuration from the default location with env overrides
///
/// The path itself can be redirected with `TALLY_CONFIG`. A missing file
/// yields defaults; a present-but-invalid file is an error.
pub fn load_config() -> Result<TallyConfig, ConfigError> {
    let path = std::env::var("TALLY_CONFIG")
        .ok()
        .map(PathBuf::from)
        .or_else(default_config_path);

    let config = match path {
        Some(path) if path.exists() => load_config_from_path(&path)?,
        _ => TallyConfig::default(),
    };

    Ok(config.with_overrides(ConfigOverrides::from_env()))
}

/// Load configuration from a specific file (no env overrides)
pub fn load_config_from_path(path: &Path) -> Result<TallyConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&contents)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = TallyConfig::default();
        assert_eq!(config.avatar_base, DEFAULT_AVATAR_BASE);
        assert_eq!(config.currency_symbol, "€");
        assert!(config.seed_demo_roster);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "currency_symbol = \"$\"").unwrap();
        writeln!(file, "seed_demo_roster = false").unwrap();

        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.seed_demo_roster);
        // Unspecified keys keep their defaults
        assert_eq!(config.avatar_base, DEFAULT_AVATAR_BASE);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "currency_symbol = [not toml").unwrap();

        assert!(matches!(
            load_config_from_path(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_flag_off_values() {
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("no"));
        assert!(!parse_flag(" false "));
    }

    #[test]
    fn test_parse_flag_on_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("yes"));
        // Unrecognized values count as enabled
        assert!(parse_flag("anything"));
    }

    #[test]
    fn test_overrides_beat_file_values() {
        let config = TallyConfig {
            currency_symbol: "$".to_string(),
            ..TallyConfig::default()
        };
        let overridden = config.with_overrides(ConfigOverrides {
            currency_symbol: Some("kr".to_string()),
            seed_demo_roster: Some(false),
            ..ConfigOverrides::default()
        });

        assert_eq!(overridden.currency_symbol, "kr");
        assert!(!overridden.seed_demo_roster);
    }
}
