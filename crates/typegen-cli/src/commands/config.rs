//! Config command implementation.
//!
//! Configuration is stored in TOML format at `--config <path>` or, by
//! default:
//! - Linux: `~/.config/typegen/config.toml`
//! - macOS: `~/Library/Application Support/typegen/config.toml`
//! - Windows: `%APPDATA%\typegen\config.toml`

use super::common::load_config;
use crate::actions::ConfigAction;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use typegen_core::GeneratorConfig;
use typegen_core::cli::{ExitCode, OutputFormat};

/// Location of the configuration file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathReport {
    /// Configuration file path
    pub path: String,
    /// Whether the file exists
    pub exists: bool,
}

/// Result of `config init`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitReport {
    /// Whether a file was written
    pub written: bool,
    /// Status message
    pub message: String,
    /// Configuration file path
    pub path: String,
}

/// Runs the config command.
///
/// # Errors
///
/// Returns an error if the configuration path cannot be determined, or the
/// file cannot be read or written.
pub async fn run(
    action: ConfigAction,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    debug!("Config action: {action:?}");

    match action {
        ConfigAction::Show => {
            let config = load_config(config_path.as_deref())?;
            print_report(&config, output_format)?;
        }
        ConfigAction::Path => {
            let path = resolve_path(config_path)?;
            print_report(
                &PathReport {
                    exists: path.exists(),
                    path: path.display().to_string(),
                },
                output_format,
            )?;
        }
        ConfigAction::Init { force } => {
            let path = resolve_path(config_path)?;
            print_report(&init_config(&path, force)?, output_format)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Returns the explicit path, or the platform default.
fn resolve_path(config_path: Option<PathBuf>) -> Result<PathBuf> {
    config_path
        .or_else(GeneratorConfig::default_path)
        .ok_or_else(|| anyhow!("cannot determine the configuration directory; pass --config"))
}

/// Writes the default configuration to `path`.
///
/// An existing file is left untouched unless `force` is set.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn init_config(path: &Path, force: bool) -> Result<InitReport> {
    if path.exists() && !force {
        return Ok(InitReport {
            written: false,
            message: "configuration file already exists".to_string(),
            path: path.display().to_string(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let text = GeneratorConfig::default().to_toml_string()?;
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote default configuration to {}", path.display());

    Ok(InitReport {
        written: true,
        message: "configuration file created with default values".to_string(),
        path: path.display().to_string(),
    })
}

fn print_report<T: Serialize>(report: &T, output_format: OutputFormat) -> Result<()> {
    let formatted = crate::formatters::format_output(report, output_format)
        .context("failed to format configuration")?;
    println!("{formatted}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("typegen").join("config.toml");

        let report = init_config(&path, false).unwrap();
        assert!(report.written);
        assert_eq!(GeneratorConfig::load(&path).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[fetch]\ntimeout_seconds = 5\n").unwrap();

        let report = init_config(&path, false).unwrap();
        assert!(!report.written);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[fetch]\ntimeout_seconds = 5\n"
        );
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "garbage").unwrap();

        assert!(init_config(&path, true).unwrap().written);
        assert!(GeneratorConfig::load(&path).is_ok());
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = PathBuf::from("/tmp/custom.toml");
        assert_eq!(resolve_path(Some(path.clone())).unwrap(), path);
    }

    #[tokio::test]
    async fn test_show_with_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ndirectory = \"out\"\n").unwrap();

        let code = run(ConfigAction::Show, Some(path), OutputFormat::Json)
            .await
            .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
