//! Rustyline helper integration
//!
//! Provides command-name completion, history hints, and hint dimming for the
//! REPL.

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;

/// REPL helper
pub struct TypeaheadHelper {
    hinter: HistoryHinter,
    commands: Vec<String>,
}

impl TypeaheadHelper {
    /// Create a new helper instance
    pub fn new() -> Self {
        Self {
            hinter: HistoryHinter::new(),
            commands: vec![
                "match", "suggest", "accept", "add", "remove", "list", "trigger", "min", "max",
                "limit", "config", "help", "quit", "exit",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl Default for TypeaheadHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for TypeaheadHelper {}

impl Completer for TypeaheadHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let line = &line[..pos];

        // Only the command word completes; everything after it is buffer
        // text or keys.
        if line.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let prefix = line.to_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|command| command.starts_with(&prefix))
            .map(|command| Pair {
                display: command.clone(),
                replacement: format!("{command} "),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for TypeaheadHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for TypeaheadHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }
}

impl Validator for TypeaheadHelper {}
