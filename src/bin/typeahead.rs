//! typeahead - trigger matching and inline token suggestions
//!
//! Provides one-shot matching/suggestion commands and an interactive REPL.

use clap::Parser;
use colored::Colorize;
use std::process;

use typeahead::cli::args::EngineOptions;
use typeahead::cli::{commands, Cli, Commands};
use typeahead::repl::{self, ReplConfig, ReplState};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repl { options } => run_repl(options),
        command => commands::execute(command),
    };

    if let Err(e) = result {
        eprintln!("{}: {e:#}", "Error".red().bold());
        process::exit(1);
    }
}

fn run_repl(options: EngineOptions) -> anyhow::Result<()> {
    let engine = commands::build_engine(&options)?;
    repl::run(ReplState::new(engine), ReplConfig::default())
}
