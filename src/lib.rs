//! # typeahead
//!
//! Host-independent core of a rich-text-editor "typeahead" suggestion
//! feature: detect a trigger character in the text immediately preceding the
//! cursor, query a candidate source for suggestions, and produce an inline
//! token node plus the span of text it replaces.
//!
//! The host editor owns rendering, focus, undo, and the actual document
//! model; this crate only consumes a text window ending at the cursor and
//! emits match descriptors, candidate lists, and token values.
//!
//! ## Example
//!
//! ```rust
//! use typeahead::prelude::*;
//!
//! let config = MatchConfig::new('{').with_min_length(0);
//! let matcher = TriggerMatcher::new(config).expect("valid configuration");
//! let engine = TypeaheadEngine::new(matcher, StaticCandidateSource::sample());
//!
//! let text = "Search on {go";
//! let suggestions = engine.suggest(text).expect("trigger present");
//! assert_eq!(suggestions.matched.matching_string, "go");
//! assert_eq!(suggestions.options[0].key, "google_domain");
//!
//! let insertion = engine.accept(&suggestions.matched, &suggestions.options[0]);
//! assert_eq!(insertion.apply_to(text), "Search on {google_domain}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod matcher;
pub mod source;
pub mod token;

/// Interactive REPL for exploring trigger matching and suggestions
#[cfg(feature = "cli")]
pub mod repl;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::engine::{Insertion, Suggestions, TypeaheadEngine};
    pub use crate::matcher::{ConfigError, MatchConfig, MatchResult, TriggerMatcher};
    pub use crate::source::{Candidate, CandidateSource, StaticCandidateSource};
    pub use crate::token::{
        InlineTokenNode, MarkerElement, SerializedTokenNode, SpanMode, TextSpan, TokenError,
    };
}
