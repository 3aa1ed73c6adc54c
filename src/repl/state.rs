//! REPL session state

use crate::engine::TypeaheadEngine;
use crate::matcher::{ConfigError, MatchConfig, TriggerMatcher};
use crate::source::StaticCandidateSource;

/// Mutable state of a REPL session: the engine plus reconfiguration helpers.
///
/// Reconfiguration rebuilds the matcher; a rejected configuration leaves the
/// previous matcher in place.
pub struct ReplState {
    engine: TypeaheadEngine<StaticCandidateSource>,
}

impl ReplState {
    /// Wrap an engine.
    pub fn new(engine: TypeaheadEngine<StaticCandidateSource>) -> Self {
        Self { engine }
    }

    /// The underlying engine.
    pub fn engine(&self) -> &TypeaheadEngine<StaticCandidateSource> {
        &self.engine
    }

    /// Mutable access to the underlying engine.
    pub fn engine_mut(&mut self) -> &mut TypeaheadEngine<StaticCandidateSource> {
        &mut self.engine
    }

    /// The current matcher configuration.
    pub fn config(&self) -> &MatchConfig {
        self.engine.matcher().config()
    }

    /// Switch to a different trigger character.
    ///
    /// # Errors
    ///
    /// Rejects malformed triggers; the current matcher is kept.
    pub fn set_trigger(&mut self, trigger: char) -> Result<(), ConfigError> {
        let current = *self.config();
        self.rebuild(
            MatchConfig::new(trigger)
                .with_min_length(current.min_length())
                .with_max_length(current.max_length()),
        )
    }

    /// Change the minimum query length.
    ///
    /// # Errors
    ///
    /// Rejects bounds with `min > max`; the current matcher is kept.
    pub fn set_min_length(&mut self, min_length: usize) -> Result<(), ConfigError> {
        let config = self.config().with_min_length(min_length);
        self.rebuild(config)
    }

    /// Change the maximum query length.
    ///
    /// # Errors
    ///
    /// Rejects bounds with `min > max`; the current matcher is kept.
    pub fn set_max_length(&mut self, max_length: usize) -> Result<(), ConfigError> {
        let config = self.config().with_max_length(max_length);
        self.rebuild(config)
    }

    fn rebuild(&mut self, config: MatchConfig) -> Result<(), ConfigError> {
        self.engine.set_matcher(TriggerMatcher::new(config)?);
        Ok(())
    }
}
