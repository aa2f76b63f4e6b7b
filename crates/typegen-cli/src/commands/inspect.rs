//! Inspect command implementation.
//!
//! Summarizes an inventory without generating anything.

use super::common::{load_config, load_inventory};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use typegen_core::cli::{ExitCode, OutputFormat};
use typegen_core::{Inventory, Item};

/// Item counts per kind.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KindCounts {
    /// Struct items
    pub structs: usize,
    /// Enum items
    pub enums: usize,
    /// Route items
    pub routes: usize,
    /// Items of a kind the generator skips
    pub unknown: usize,
}

/// One inventory item in the summary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemSummary {
    /// Item name
    pub name: String,
    /// Item kind
    pub kind: &'static str,
    /// Category assigned by the schema source
    pub category: String,
    /// Whether the schema source hides the item
    pub hidden: bool,
    /// `METHOD /path` for routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Summary of an inventory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InventoryReport {
    /// Inventory version
    pub version: String,
    /// Name of the module `generate` would write
    pub file_name: String,
    /// Item counts per kind
    pub counts: KindCounts,
    /// Items in inventory order
    pub items: Vec<ItemSummary>,
}

impl From<&Inventory> for InventoryReport {
    fn from(inventory: &Inventory) -> Self {
        let (structs, enums, routes, unknown) = inventory.kind_counts();
        let items = inventory
            .items
            .iter()
            .map(|info| ItemSummary {
                name: info.name.clone(),
                kind: info.item.kind(),
                category: info.category.clone(),
                hidden: info.hidden,
                endpoint: match &info.item {
                    Item::Route(route) => Some(format!("{} {}", route.method, route.route)),
                    _ => None,
                },
            })
            .collect();

        Self {
            version: inventory.version.clone(),
            file_name: inventory.file_name(),
            counts: KindCounts {
                structs,
                enums,
                routes,
                unknown,
            },
            items,
        }
    }
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the configuration or inventory cannot be loaded.
pub async fn run(
    inventory: String,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = load_config(config_path.as_deref())?;
    let inventory = load_inventory(&inventory, &config).await?;

    let report = InventoryReport::from(&inventory);
    let formatted = crate::formatters::format_output(&report, output_format)
        .context("failed to format inventory report")?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}
