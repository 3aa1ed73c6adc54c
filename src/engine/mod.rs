//! Per-keystroke suggestion flow: matcher plus candidate source.
//!
//! [`TypeaheadEngine`] owns a [`TriggerMatcher`] and an injected
//! [`CandidateSource`] and exposes the two operations a host wires to its
//! editor events: [`suggest`](TypeaheadEngine::suggest) on every text-change
//! notification, and [`accept`](TypeaheadEngine::accept) when the user picks
//! an option. Both are synchronous and side-effect free; the host applies
//! the returned [`Insertion`] to its own document model (or uses
//! [`Insertion::apply_to`] for plain-text buffers).

use crate::matcher::{MatchResult, TriggerMatcher};
use crate::source::{Candidate, CandidateSource};
use crate::token::InlineTokenNode;
use std::ops::Range;

/// Default cap on the number of options returned per query.
pub const DEFAULT_OPTION_LIMIT: usize = 10;

/// A trigger match together with the options it queried.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions<'t> {
    /// The detected candidate mention.
    pub matched: MatchResult<'t>,
    /// Matching candidates, capped at the engine's limit. May be empty; the
    /// host decides whether to render an empty menu.
    pub options: Vec<Candidate>,
}

/// The edit produced by accepting a suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Insertion {
    /// Byte range of the replaceable span in the scanned text.
    pub range: Range<usize>,
    /// The node to insert in its place.
    pub node: InlineTokenNode,
}

impl Insertion {
    /// Splice the node's display text over the replaceable span.
    ///
    /// A textual simulation of the host's node replacement, for plain-text
    /// hosts, demos, and tests.
    pub fn apply_to(&self, text: &str) -> String {
        let display = self.node.display_text();
        let mut edited =
            String::with_capacity(text.len() - self.range.len() + display.len());
        edited.push_str(&text[..self.range.start]);
        edited.push_str(&display);
        edited.push_str(&text[self.range.end..]);
        edited
    }
}

/// Typeahead suggestion engine.
///
/// Immutable during use: one engine can serve every text-change
/// notification for an editor instance. Reconfiguration (a different
/// trigger, bounds, or limit) swaps in a new matcher or limit via the
/// mutating setters.
#[derive(Debug, Clone)]
pub struct TypeaheadEngine<S> {
    matcher: TriggerMatcher,
    source: S,
    limit: usize,
}

impl<S: CandidateSource> TypeaheadEngine<S> {
    /// Create an engine with the default option limit.
    pub fn new(matcher: TriggerMatcher, source: S) -> Self {
        Self {
            matcher,
            source,
            limit: DEFAULT_OPTION_LIMIT,
        }
    }

    /// Set the option limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The engine's matcher.
    pub fn matcher(&self) -> &TriggerMatcher {
        &self.matcher
    }

    /// Replace the matcher (reconfiguration).
    pub fn set_matcher(&mut self, matcher: TriggerMatcher) {
        self.matcher = matcher;
    }

    /// The engine's candidate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the candidate source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The option limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the option limit.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// Process a text-change notification.
    ///
    /// Runs the matcher over `text` (the window ending at the cursor) and,
    /// on a match, queries the source with the matching string. `None` means
    /// no candidate mention is present and any open menu should close.
    pub fn suggest<'t>(&self, text: &'t str) -> Option<Suggestions<'t>> {
        let matched = self.matcher.find(text)?;
        let options = self.source.candidates(matched.matching_string, self.limit);
        Some(Suggestions { matched, options })
    }

    /// Accept `candidate` for the mention at `matched`.
    ///
    /// Builds the inline token node (value from the candidate key, details
    /// carried over) and pairs it with the byte range the host must replace.
    pub fn accept(&self, matched: &MatchResult<'_>, candidate: &Candidate) -> Insertion {
        let mut node = InlineTokenNode::new(candidate.key.clone());
        node.more_details = candidate.details.clone();
        Insertion {
            range: matched.replace_range(),
            node,
        }
    }
}
