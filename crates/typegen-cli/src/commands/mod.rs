//! Command implementations for the typegen CLI.
//!
//! Each command loads what it needs, runs the operation, and prints a report
//! in the requested output format.

pub mod common;
pub mod completions;
pub mod config;
pub mod generate;
pub mod inspect;
