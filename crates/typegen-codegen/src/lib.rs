//! TypeScript code generation for schema inventories.
//!
//! Turns the structs, enums and routes of a [`typegen_core::Inventory`] into
//! one TypeScript module: an interface per struct, a discriminated union per
//! enum, a URL-building function per route and a `ROUTES` registry.
//!
//! # Architecture
//!
//! - [`mapper`]: schema type expression to [`ast::TsType`]
//! - [`compile`]: per-item compilers producing IR values
//! - [`emit`]: the [`emit::Emit`] trait rendering IR to source text
//! - [`generator`]: the [`Generator`] orchestrating a whole inventory
//!
//! # Examples
//!
//! ```
//! use typegen_codegen::Generator;
//! use typegen_core::Inventory;
//!
//! let inventory: Inventory = serde_json::from_str(r#"{
//!     "version": "0.1.0",
//!     "items": [{
//!         "name": "Status",
//!         "doc": "",
//!         "category": "",
//!         "hidden": false,
//!         "package": "todel",
//!         "item": {
//!             "type": "enum",
//!             "tag": "type",
//!             "untagged": false,
//!             "content": null,
//!             "rename_all": "SCREAMING_SNAKE_CASE",
//!             "variants": [{"type": "unit", "name": "Online", "doc": null}]
//!         }
//!     }]
//! }"#).unwrap();
//!
//! let module = Generator::new().unwrap().generate(&inventory).unwrap();
//! assert!(module.content.contains("export type Status = StatusOnline;"));
//! assert!(module.content.contains("  type: \"ONLINE\";"));
//! ```

#![deny(unsafe_code)]
#![allow(clippy::format_push_string)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod ast;
pub mod compile;
pub mod docs;
pub mod emit;
pub mod generator;
pub mod mapper;
pub mod naming;
pub mod template_engine;
pub mod validate;

pub use ast::{GeneratedModule, GenerationStats};
pub use generator::{GENERATED_HEADER, Generator};
pub use mapper::map_type;
