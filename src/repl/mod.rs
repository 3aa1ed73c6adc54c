//! Interactive REPL for exploring trigger matching and suggestions
//!
//! The REPL treats each `match`/`suggest`/`accept` argument as the text
//! window ending at the cursor, so the full keystroke-to-insertion flow can
//! be exercised from a terminal against a configurable dataset.

pub mod command;
pub mod helper;
pub mod state;

pub use command::{Command, CommandResult};
pub use helper::TypeaheadHelper;
pub use state::ReplState;

use anyhow::{Context as _, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<std::path::PathBuf>,
    /// Maximum history entries
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "typeahead> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
                    .join(".typeahead_history"),
            ),
            max_history: 1000,
        }
    }
}

/// Run the REPL until the user quits.
///
/// # Errors
///
/// Fails on line-editor initialization problems; command errors are printed
/// and the loop continues.
pub fn run(mut state: ReplState, config: ReplConfig) -> Result<()> {
    let editor_config = Config::builder()
        .max_history_size(config.max_history)
        .context("invalid history size")?
        .build();
    let mut editor: Editor<TypeaheadHelper, DefaultHistory> =
        Editor::with_config(editor_config).context("failed to initialize line editor")?;
    editor.set_helper(Some(TypeaheadHelper::new()));

    if let Some(path) = &config.history_file {
        let _ = editor.load_history(path);
    }

    println!(
        "Type {} for commands; trigger is {}.",
        "help".cyan(),
        state.config().trigger().to_string().cyan()
    );

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match Command::parse(line).and_then(|command| command.execute(&mut state)) {
                    Ok(CommandResult::Continue) => {}
                    Ok(CommandResult::Quit) => break,
                    Err(e) => eprintln!("{}: {e:#}", "Error".red().bold()),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("readline failure"),
        }
    }

    if let Some(path) = &config.history_file {
        let _ = editor.save_history(path);
    }

    Ok(())
}
