//! Command parsing and execution
//!
//! Defines all REPL commands and their execution logic. Buffer text is taken
//! verbatim after the command word, so windows containing spaces need no
//! quoting.

use super::state::ReplState;
use anyhow::{anyhow, bail, Context, Result};
use colored::Colorize;
use serde_json::Value;

/// REPL command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the matcher: `match <text>`
    Match {
        /// Text window ending at the cursor
        text: String,
    },
    /// Show suggestions: `suggest <text>`
    Suggest {
        /// Text window ending at the cursor
        text: String,
    },
    /// Accept option N for a window: `accept <n> <text>`
    Accept {
        /// 1-based option index
        index: usize,
        /// Text window ending at the cursor
        text: String,
    },
    /// Add a candidate: `add <key> [details-json]`
    Add {
        /// Candidate key
        key: String,
        /// Optional details payload
        details: Option<Value>,
    },
    /// Remove a candidate: `remove <key>`
    Remove {
        /// Candidate key
        key: String,
    },
    /// List the dataset: `list`
    List,
    /// Change the trigger character: `trigger <char>`
    Trigger {
        /// New trigger character
        trigger: char,
    },
    /// Change the minimum query length: `min <n>`
    MinLength {
        /// New minimum
        min_length: usize,
    },
    /// Change the maximum query length: `max <n>`
    MaxLength {
        /// New maximum
        max_length: usize,
    },
    /// Change the option limit: `limit <n>`
    Limit {
        /// New limit
        limit: usize,
    },
    /// Show the current configuration: `config`
    Config,
    /// Show help: `help`
    Help,
    /// Leave the REPL: `quit` / `exit`
    Quit,
}

/// Outcome of executing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Keep reading commands.
    Continue,
    /// Leave the REPL.
    Quit,
}

impl Command {
    /// Parse a REPL input line.
    ///
    /// # Errors
    ///
    /// Unknown commands and malformed arguments fail with a usage message.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.splitn(2, char::is_whitespace);
        let word = parts.next().unwrap_or_default().to_lowercase();
        let rest = parts.next().unwrap_or_default().trim_start();

        match word.as_str() {
            "match" => {
                require_text(rest, "match <text>")?;
                Ok(Self::Match {
                    text: rest.to_string(),
                })
            }
            "suggest" => {
                require_text(rest, "suggest <text>")?;
                Ok(Self::Suggest {
                    text: rest.to_string(),
                })
            }
            "accept" => {
                let mut args = rest.splitn(2, char::is_whitespace);
                let index = args
                    .next()
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| anyhow!("usage: accept <n> <text>"))?
                    .parse::<usize>()
                    .context("option index must be a number")?;
                let text = args.next().unwrap_or_default().trim_start();
                require_text(text, "accept <n> <text>")?;
                Ok(Self::Accept {
                    index,
                    text: text.to_string(),
                })
            }
            "add" => {
                let mut args = rest.splitn(2, char::is_whitespace);
                let key = args
                    .next()
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| anyhow!("usage: add <key> [details-json]"))?
                    .to_string();
                let details = match args.next().map(str::trim) {
                    Some(json) if !json.is_empty() => {
                        Some(serde_json::from_str(json).context("invalid details JSON")?)
                    }
                    _ => None,
                };
                Ok(Self::Add { key, details })
            }
            "remove" => {
                require_text(rest, "remove <key>")?;
                Ok(Self::Remove {
                    key: rest.to_string(),
                })
            }
            "list" => Ok(Self::List),
            "trigger" => {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(trigger), None) => Ok(Self::Trigger { trigger }),
                    _ => bail!("usage: trigger <single character>"),
                }
            }
            "min" => Ok(Self::MinLength {
                min_length: parse_number(rest, "min <n>")?,
            }),
            "max" => Ok(Self::MaxLength {
                max_length: parse_number(rest, "max <n>")?,
            }),
            "limit" => Ok(Self::Limit {
                limit: parse_number(rest, "limit <n>")?,
            }),
            "config" => Ok(Self::Config),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => bail!("unknown command {word:?} (try 'help')"),
        }
    }

    /// Execute the command against the session state.
    ///
    /// # Errors
    ///
    /// Serialization failures while printing propagate; configuration
    /// rejections are printed and leave the state untouched.
    pub fn execute(self, state: &mut ReplState) -> Result<CommandResult> {
        match self {
            Self::Match { text } => {
                match state.engine().matcher().find(&text) {
                    Some(result) => {
                        println!(
                            "{} at byte {}",
                            "match".green().bold(),
                            result.lead_offset
                        );
                        println!("  matching:    {}", result.matching_string.cyan());
                        println!("  replaceable: {}", result.replaceable_string.cyan());
                    }
                    None => println!("{}", "no match".yellow()),
                }
                Ok(CommandResult::Continue)
            }
            Self::Suggest { text } => {
                match state.engine().suggest(&text) {
                    Some(suggestions) => {
                        if suggestions.options.is_empty() {
                            println!(
                                "no options for query {}",
                                format!("{:?}", suggestions.matched.matching_string).cyan()
                            );
                        }
                        for (index, option) in suggestions.options.iter().enumerate() {
                            print_option(index, option);
                        }
                    }
                    None => println!("{}", "no match".yellow()),
                }
                Ok(CommandResult::Continue)
            }
            Self::Accept { index, text } => {
                let Some(suggestions) = state.engine().suggest(&text) else {
                    println!("{}", "no match".yellow());
                    return Ok(CommandResult::Continue);
                };
                let Some(option) = index
                    .checked_sub(1)
                    .and_then(|i| suggestions.options.get(i))
                else {
                    println!(
                        "{}",
                        format!(
                            "no option {index}; {} available",
                            suggestions.options.len()
                        )
                        .red()
                    );
                    return Ok(CommandResult::Continue);
                };

                let insertion = state.engine().accept(&suggestions.matched, option);
                println!("{}", insertion.apply_to(&text).green());
                println!("{}", insertion.node.to_json_string()?.dimmed());
                Ok(CommandResult::Continue)
            }
            Self::Add { key, details } => {
                let mut candidate = crate::source::Candidate::new(key);
                candidate.details = details;
                state.engine_mut().source_mut().insert(candidate);
                println!("{} entries", state.engine().source().len());
                Ok(CommandResult::Continue)
            }
            Self::Remove { key } => {
                match state.engine_mut().source_mut().remove(&key) {
                    Some(_) => println!("removed {}", key.bold()),
                    None => println!("{}", format!("no entry {key:?}").yellow()),
                }
                Ok(CommandResult::Continue)
            }
            Self::List => {
                if state.engine().source().is_empty() {
                    println!("{}", "dataset is empty".yellow());
                }
                for (index, option) in state.engine().source().iter().enumerate() {
                    print_option(index, option);
                }
                Ok(CommandResult::Continue)
            }
            Self::Trigger { trigger } => {
                report_config_change(state.set_trigger(trigger));
                Ok(CommandResult::Continue)
            }
            Self::MinLength { min_length } => {
                report_config_change(state.set_min_length(min_length));
                Ok(CommandResult::Continue)
            }
            Self::MaxLength { max_length } => {
                report_config_change(state.set_max_length(max_length));
                Ok(CommandResult::Continue)
            }
            Self::Limit { limit } => {
                state.engine_mut().set_limit(limit);
                Ok(CommandResult::Continue)
            }
            Self::Config => {
                let config = state.config();
                println!("trigger:    {}", config.trigger().to_string().cyan());
                println!("min length: {}", config.min_length());
                println!("max length: {}", config.max_length());
                println!("limit:      {}", state.engine().limit());
                println!("dataset:    {} entries", state.engine().source().len());
                Ok(CommandResult::Continue)
            }
            Self::Help => {
                print_help();
                Ok(CommandResult::Continue)
            }
            Self::Quit => Ok(CommandResult::Quit),
        }
    }
}

fn require_text(text: &str, usage: &str) -> Result<()> {
    if text.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(())
}

fn parse_number(text: &str, usage: &str) -> Result<usize> {
    if text.is_empty() {
        bail!("usage: {usage}");
    }
    text.parse::<usize>()
        .with_context(|| format!("usage: {usage}"))
}

fn print_option(index: usize, option: &crate::source::Candidate) {
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

fn report_config_change(result: Result<(), crate::matcher::ConfigError>) {
    match result {
        Ok(()) => {}
        Err(e) => println!("{}: {e}", "rejected".red()),
    }
}

fn print_help() {
    let entries: &[(&str, &str)] = &[
        ("match <text>", "run the matcher on a text window"),
        ("suggest <text>", "show suggestions for a text window"),
        ("accept <n> <text>", "accept option n and show the edit"),
        ("add <key> [json]", "add a candidate (optional details JSON)"),
        ("remove <key>", "remove a candidate"),
        ("list", "list the dataset"),
        ("trigger <char>", "change the trigger character"),
        ("min <n>", "change the minimum query length"),
        ("max <n>", "change the maximum query length"),
        ("limit <n>", "change the option limit"),
        ("config", "show the current configuration"),
        ("help", "show this help"),
        ("quit / exit", "leave the REPL"),
    ];
    for (usage, description) in entries {
        println!("  {:<20} {}", usage.cyan(), description);
    }
}
