//! CLI argument definitions for the querygen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// querygen - AI query stub generator
#[derive(Parser)]
#[command(name = "querygen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a C++ stub pair for every non-system query
    Generate {
        /// Path to the AI definition document (YAML)
        aidef: String,

        /// Directory the stub pairs are written into (created if absent)
        #[arg(long, default_value = "src/Game/AI/Query")]
        out_dir: String,

        /// Also print the union of record field names seen across processed
        /// queries
        #[arg(long)]
        verbose: bool,
    },

    /// Check an AI definition document without writing any stubs
    Validate {
        /// Path to the AI definition document (YAML)
        aidef: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List generatable queries and their parameter counts
    List {
        /// Path to the AI definition document (YAML)
        aidef: String,
    },
}
