//! Core types and errors for typegen.
//!
//! This crate provides the foundational types shared by every crate in the
//! typegen workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The schema inventory model (`ItemInfo`, `StructInfo`, `EnumInfo`, `RouteInfo`)
//! - Error hierarchy with contextual information
//! - CLI value types (`OutputFormat`, `ExitCode`)
//! - Generator configuration loaded from TOML

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;

pub mod cli;
pub mod config;
pub mod schema;

pub use config::{FetchConfig, GeneratorConfig, OutputConfig};
pub use error::{Error, Result};
pub use schema::{
    EnumInfo, EnumVariant, FieldInfo, Inventory, InventoryIndex, Item, ItemInfo, PathParamInfo,
    QueryParamInfo, RenameRule, RouteInfo, StructInfo, VariantKind,
};
