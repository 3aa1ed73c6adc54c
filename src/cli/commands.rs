//! One-shot CLI command execution

use crate::cli::args::{Commands, EngineOptions};
use crate::engine::TypeaheadEngine;
use crate::matcher::{MatchConfig, TriggerMatcher};
use crate::source::StaticCandidateSource;
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use std::fs::File;

/// Build an engine from the shared CLI options.
///
/// # Errors
///
/// Fails on a malformed matcher configuration or an unreadable/unparsable
/// dataset file.
pub fn build_engine(options: &EngineOptions) -> Result<TypeaheadEngine<StaticCandidateSource>> {
    let config = MatchConfig::new(options.trigger)
        .with_min_length(options.min_length)
        .with_max_length(options.max_length);
    let matcher = TriggerMatcher::new(config).context("invalid matcher configuration")?;

    let source = match &options.data {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open dataset {}", path.display()))?;
            StaticCandidateSource::from_json_reader(file)
                .with_context(|| format!("failed to parse dataset {}", path.display()))?
        }
        None => StaticCandidateSource::sample(),
    };

    Ok(TypeaheadEngine::new(matcher, source).with_limit(options.limit))
}

/// Execute a one-shot command.
///
/// # Errors
///
/// Propagates engine construction and output failures.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Match {
            text,
            options,
            json,
        } => run_match(&text, &options, json),
        Commands::Suggest {
            text,
            options,
            json,
        } => run_suggest(&text, &options, json),
        // The REPL is launched by the binary, not here.
        Commands::Repl { .. } => Ok(()),
    }
}

fn run_match(text: &str, options: &EngineOptions, as_json: bool) -> Result<()> {
    let engine = build_engine(options)?;

    match engine.matcher().find(text) {
        Some(result) => {
            if as_json {
                let payload = json!({
                    "leadOffset": result.lead_offset,
                    "matchingString": result.matching_string,
                    "replaceableString": result.replaceable_string,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("{} at byte {}", "match".green().bold(), result.lead_offset);
                println!("  matching:    {}", result.matching_string.cyan());
                println!("  replaceable: {}", result.replaceable_string.cyan());
            }
        }
        None => {
            if as_json {
                println!("null");
            } else {
                println!("{}", "no match".yellow());
            }
        }
    }

    Ok(())
}

fn run_suggest(text: &str, options: &EngineOptions, as_json: bool) -> Result<()> {
    let engine = build_engine(options)?;

    match engine.suggest(text) {
        Some(suggestions) => {
            if as_json {
                let payload = json!({
                    "query": suggestions.matched.matching_string,
                    "options": suggestions.options,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!(
                    "{} option(s) for query {}",
                    suggestions.options.len(),
                    format!("{:?}", suggestions.matched.matching_string).cyan()
                );
                for (index, option) in suggestions.options.iter().enumerate() {
                    match &option.details {
                        Some(details) => println!(
                            "  {:>2}. {}  {}",
                            index + 1,
                            option.key.bold(),
                            details.to_string().dimmed()
                        ),
                        None => println!("  {:>2}. {}", index + 1, option.key.bold()),
                    }
                }
            }
        }
        None => {
            if as_json {
                println!("null");
            } else {
                println!("{}", "no match".yellow());
            }
        }
    }

    Ok(())
}
