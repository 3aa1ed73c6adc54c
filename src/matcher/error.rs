//! Error types for matcher configuration.

use thiserror::Error;

/// Errors raised when building a [`TriggerMatcher`](crate::matcher::TriggerMatcher).
///
/// All configuration problems surface here, eagerly, at construction time;
/// a successfully built matcher never fails at match time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The trigger character is whitespace.
    ///
    /// Whitespace is excluded from candidate runs, so a whitespace trigger
    /// could never begin a mention.
    #[error("trigger character {0:?} is whitespace")]
    WhitespaceTrigger(char),

    /// The trigger character is a letter or digit.
    ///
    /// Word characters make up the valid-character set of candidate runs; a
    /// word-character trigger would fire inside ordinary prose.
    #[error("trigger character {0:?} is alphanumeric and would match inside words")]
    AlphanumericTrigger(char),

    /// `min_length` exceeds `max_length`, so no run length could ever be
    /// accepted.
    #[error("min_length {min} exceeds max_length {max}")]
    LengthBounds {
        /// Configured minimum run length.
        min: usize,
        /// Configured maximum run length.
        max: usize,
    },

    /// The trigger pattern failed to compile.
    #[error("trigger pattern failed to compile")]
    Pattern(#[from] regex::Error),
}
