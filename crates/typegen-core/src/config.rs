//! Generator configuration.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/typegen/config.toml`
//! - macOS: `~/Library/Application Support/typegen/config.toml`
//! - Windows: `%APPDATA%\typegen\config.toml`
//!
//! Every key is optional; missing keys take their default values.
//!
//! # Examples
//!
//! ```
//! use typegen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_toml_str(
//!     r#"
//!     [fetch]
//!     max_concurrent_requests = 4
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.fetch.max_concurrent_requests, 4);
//! assert_eq!(config.fetch.timeout_seconds, 30);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Top-level generator configuration.
///
/// ```toml
/// [fetch]
/// timeout_seconds = 30
/// max_concurrent_requests = 16
///
/// [output]
/// directory = "."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Inventory retrieval settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Inventory retrieval settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Maximum number of item documents fetched at once
    pub max_concurrent_requests: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            max_concurrent_requests: 16,
        }
    }
}

impl FetchConfig {
    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Output file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the generated module is written to
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML or a value
    /// is out of range.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::ConfigError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::ConfigError`] if it is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Loads the configuration from `path`, or from the default location when
    /// `path` is `None`.
    ///
    /// A missing file at the default location yields the defaults. A missing
    /// file at an explicit path is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if a value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.timeout_seconds == 0 {
            return Err(Error::ConfigError {
                message: "fetch.timeout_seconds must be greater than 0".to_string(),
            });
        }

        if self.fetch.max_concurrent_requests == 0 {
            return Err(Error::ConfigError {
                message: "fetch.max_concurrent_requests must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Serializes the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigError {
            message: e.to_string(),
        })
    }

    /// Returns the platform-specific default configuration path.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("typegen").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.fetch.timeout_seconds, 30);
        assert_eq!(config.fetch.max_concurrent_requests, 16);
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = GeneratorConfig::from_toml_str("[fetch]\nmax_concurrent_requests = 0\n")
            .unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("max_concurrent_requests"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = GeneratorConfig::from_toml_str("[fetch]\ntimeout_seconds = 0\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = GeneratorConfig::from_toml_str("[fetch\n").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndirectory = \"generated\"").unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.output.directory, PathBuf::from("generated"));
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = GeneratorConfig::load_or_default(Some(&missing)).unwrap_err();
        assert!(err.is_io_error());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GeneratorConfig::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[fetch]"));
        assert_eq!(GeneratorConfig::from_toml_str(&text).unwrap(), config);
    }
}
