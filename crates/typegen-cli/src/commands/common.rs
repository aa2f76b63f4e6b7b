//! Helpers shared by the commands.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use typegen_core::cli::ExitCode;
use typegen_core::{GeneratorConfig, Inventory};
use typegen_inventory::{InventoryLoader, source_for};

/// Loads the configuration from `path`, or the default location.
///
/// # Errors
///
/// Returns an error if the file exists but is unreadable or invalid.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    GeneratorConfig::load_or_default(path).context("failed to load configuration")
}

/// Creates a steady-ticking spinner on stderr.
#[must_use]
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(message.to_string());
    spinner
}

/// Loads the inventory named by `argument`, showing fetch progress.
///
/// `argument` is an `http://` or `https://` URL, or a directory path.
///
/// # Errors
///
/// Returns an error if any document cannot be fetched or decoded.
pub async fn load_inventory(argument: &str, config: &GeneratorConfig) -> Result<Inventory> {
    let source = source_for(argument, &config.fetch)?;
    let loader = InventoryLoader::with_config(source, &config.fetch);

    let progress = spinner(&format!("Fetching inventory from {argument}"));
    let mut fetched = 0usize;
    let result = loader
        .load_with(|item| {
            fetched += 1;
            progress.set_message(format!("Fetched {fetched} items ({})", item.name));
        })
        .await;
    progress.finish_and_clear();

    let inventory = result.with_context(|| format!("failed to load inventory from {argument}"))?;
    debug!(
        "Loaded inventory v{} with {} items",
        inventory.version,
        inventory.items.len()
    );
    Ok(inventory)
}

/// Maps a command error onto the process exit code.
///
/// The first library error in the cause chain decides the code; errors
/// without one are general errors.
///
/// # Examples
///
/// ```
/// use typegen_cli::exit_code_for;
/// use typegen_core::{Error, cli::ExitCode};
///
/// let err = anyhow::Error::new(Error::InvalidArgument("bad".into())).context("while parsing");
/// assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
/// assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), ExitCode::ERROR);
/// ```
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<typegen_core::Error>())
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
