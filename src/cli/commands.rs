//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// JobDesk API command-line client
#[derive(Parser, Debug)]
#[command(name = "jobdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands, one per remote resource
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage clients
    Clients {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Manage jobs
    Jobs {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Manage invoices
    Invoices {
        #[command(subcommand)]
        action: ResourceAction,
    },
}

/// Actions shared by every resource
#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// List all records
    List,

    /// Create a record from a JSON payload
    Create {
        /// Record payload as JSON
        #[arg(long)]
        data: String,
    },

    /// Update a record from a JSON payload
    Update {
        /// Record id
        id: String,

        /// Record payload as JSON
        #[arg(long)]
        data: String,
    },

    /// Delete a record
    Delete {
        /// Record id
        id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
