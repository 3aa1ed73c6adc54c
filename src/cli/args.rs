//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI.
#[derive(Parser)]
#[command(name = "typeahead")]
#[command(about = "Trigger matching and inline token suggestions for text buffers")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Engine options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct EngineOptions {
    /// Trigger character
    #[arg(short, long, default_value_t = '{')]
    pub trigger: char,

    /// Minimum query length after the trigger
    #[arg(long, default_value_t = 0)]
    pub min_length: usize,

    /// Maximum query length after the trigger
    #[arg(long, default_value_t = 75)]
    pub max_length: usize,

    /// Maximum number of suggestions per query
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Candidate dataset file (JSON array of candidates); sample data if omitted
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive REPL
    Repl {
        /// Shared engine options.
        #[command(flatten)]
        options: EngineOptions,
    },

    /// Run the trigger matcher against a text window
    Match {
        /// Text immediately preceding the cursor
        text: String,

        /// Shared engine options.
        #[command(flatten)]
        options: EngineOptions,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show suggestions for a text window
    Suggest {
        /// Text immediately preceding the cursor
        text: String,

        /// Shared engine options.
        #[command(flatten)]
        options: EngineOptions,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
