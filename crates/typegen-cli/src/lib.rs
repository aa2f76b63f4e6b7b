//! Typegen CLI library.
//!
//! Exposes the command implementations and formatters behind the `typegen`
//! binary so they can be tested.

#![allow(clippy::format_push_string)]
#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

pub mod actions;
pub mod commands;
pub mod formatters;

pub use actions::ConfigAction;
pub use commands::common::exit_code_for;
