//! Mdcheck core library.
//!
//! This crate exposes programmatic APIs for validating Markdown
//! documentation trees and repairing unclosed code fences.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `checks`: Pure document checks (headers, fences, metadata).
//! - `validate`: File discovery, per-file validation, and aggregation.
//! - `repair`: Fence-closing repair for a single file.
//! - `models`: Finding, per-file report, and summary structs.
//! - `output`: Human/JSON printers for check/fix results.
//! - `utils`: Supporting helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod repair;
pub mod utils;
pub mod validate;
