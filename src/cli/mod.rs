//! CLI module
//!
//! Command-line interface over the resource layer.
//!
//! # Commands
//!
//! - `clients list|create|update|delete`
//! - `jobs list|create|update|delete`
//! - `invoices list|create|update|delete`

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, ResourceAction};
pub use runner::Runner;
