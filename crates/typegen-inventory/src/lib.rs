//! Schema inventory retrieval.
//!
//! Reads an inventory (an `index.json` document plus one document per item)
//! from a web server or a local directory and decodes it into the
//! [`typegen_core::Inventory`] model.
//!
//! # Examples
//!
//! ```no_run
//! use typegen_core::FetchConfig;
//! use typegen_inventory::{InventoryLoader, source_for};
//!
//! # async fn example() -> typegen_core::Result<()> {
//! let config = FetchConfig::default();
//! let source = source_for("https://example.com/inventory", &config)?;
//! let inventory = InventoryLoader::with_config(source, &config).load().await?;
//! println!("loaded v{}", inventory.version);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod loader;
pub mod source;

pub use loader::InventoryLoader;
pub use source::{DirectorySource, HttpSource, INDEX_DOCUMENT, InventorySource, source_for};
