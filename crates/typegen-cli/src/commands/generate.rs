//! Generate command implementation.
//!
//! Loads an inventory, compiles it to a TypeScript module, and writes
//! `v<version>.ts` into the output directory (or prints it with `--stdout`).

use super::common::{load_config, load_inventory};
use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Confirm;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};
use typegen_codegen::{GenerationStats, Generator};
use typegen_core::cli::{ExitCode, OutputFormat};

/// Arguments of the generate command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Inventory URL or directory
    pub inventory: String,
    /// Output directory, overriding the configuration
    pub output: Option<PathBuf>,
    /// Overwrite an existing module without asking
    pub yes: bool,
    /// Print the module instead of writing it
    pub stdout: bool,
}

/// Result of writing a generated module.
#[derive(Debug, Serialize)]
struct GenerationReport {
    /// Inventory version
    version: String,
    /// Path of the written module
    path: String,
    /// Output size in bytes
    bytes: usize,
    /// Declaration counts
    stats: GenerationStats,
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if the configuration or inventory cannot be loaded,
/// the schema cannot be compiled, or the module cannot be written.
///
/// # Examples
///
/// ```no_run
/// use typegen_cli::commands::generate::{self, GenerateArgs};
/// use typegen_core::cli::{ExitCode, OutputFormat};
///
/// # async fn example() -> Result<(), anyhow::Error> {
/// let args = GenerateArgs {
///     inventory: "https://example.com/inventory".to_string(),
///     yes: true,
///     ..GenerateArgs::default()
/// };
/// let code = generate::run(args, None, OutputFormat::Pretty).await?;
/// assert_eq!(code, ExitCode::SUCCESS);
/// # Ok(())
/// # }
/// ```
pub async fn run(
    args: GenerateArgs,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = load_config(config_path.as_deref())?;
    let inventory = load_inventory(&args.inventory, &config).await?;

    let generator = Generator::new().context("failed to initialize generator")?;
    let module = generator
        .generate(&inventory)
        .with_context(|| format!("failed to generate module for v{}", inventory.version))?;

    if args.stdout {
        print!("{}", module.content);
        return Ok(ExitCode::SUCCESS);
    }

    let directory = args.output.unwrap_or(config.output.directory);
    let path = directory.join(&module.file_name);

    if !should_write(&path, args.yes, confirm_overwrite) {
        warn!("Not overwriting {}", path.display());
        eprintln!("{}", "Aborted.".yellow());
        return Ok(ExitCode::ABORTED);
    }

    write_atomic(&directory, &path, &module.content)?;
    info!("Wrote {}", path.display());

    let report = GenerationReport {
        version: module.version,
        path: path.display().to_string(),
        bytes: module.content.len(),
        stats: module.stats,
    };
    let formatted = crate::formatters::format_output(&report, output_format)
        .context("failed to format generation report")?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

/// Decides whether the module at `path` may be written.
///
/// A new file is always written. An existing one is overwritten only with
/// `yes` or when `confirm` returns `true`.
#[must_use]
pub fn should_write<F>(path: &Path, yes: bool, confirm: F) -> bool
where
    F: FnOnce(&Path) -> bool,
{
    if yes || !path.exists() {
        return true;
    }
    confirm(path)
}

/// Asks the user whether to overwrite `path`.
///
/// Declining, dismissing the prompt, or having no terminal all count as no.
fn confirm_overwrite(path: &Path) -> bool {
    Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact_opt()
        .unwrap_or_else(|e| {
            warn!("Cannot prompt for confirmation: {e}");
            None
        })
        .unwrap_or(false)
}

/// Writes `content` to `path` through a temporary file in `directory`.
///
/// Readers of `path` see either the old file or the complete new one.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written or renamed into place.
pub fn write_atomic(directory: &Path, path: &Path, content: &str) -> Result<()> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("failed to create {}", directory.display()))?;

    let mut file = NamedTempFile::new_in(directory)
        .with_context(|| format!("failed to create temporary file in {}", directory.display()))?;
    file.write_all(content.as_bytes())
        .context("failed to write module")?;
    file.as_file()
        .sync_all()
        .context("failed to flush module")?;
    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
