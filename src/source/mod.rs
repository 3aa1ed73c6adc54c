//! Candidate lookup sources for typeahead suggestions.
//!
//! The engine is decoupled from any specific dataset through
//! [`CandidateSource`]: an injected lookup capability from a query string to
//! a bounded list of candidates. A bare closure works as a source, and
//! [`StaticCandidateSource`] provides the in-memory implementation used by
//! the demo surface and tests.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::Read;

/// A suggestion candidate: an opaque key plus an optional structured
/// payload attached to the token node on acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque key; queries match against it.
    pub key: String,
    /// Optional structured payload; omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Candidate {
    /// Create a candidate with no details payload.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            details: None,
        }
    }

    /// Attach a details payload.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Lookup capability from a query string to a bounded candidate list.
///
/// Implementations must return at most `limit` candidates. An empty query
/// is a browse request (the user typed a bare trigger): return the first
/// `limit` candidates rather than nothing.
pub trait CandidateSource {
    /// Look up candidates matching `query`, capped at `limit`.
    fn candidates(&self, query: &str, limit: usize) -> Vec<Candidate>;
}

/// A plain function can serve as a candidate source.
///
/// ```
/// use typeahead::source::{Candidate, CandidateSource};
///
/// let source = |query: &str, limit: usize| -> Vec<Candidate> {
///     std::iter::repeat_with(|| Candidate::new(query))
///         .take(limit.min(1))
///         .collect()
/// };
/// assert_eq!(source.candidates("echo", 10).len(), 1);
/// ```
impl<F> CandidateSource for F
where
    F: Fn(&str, usize) -> Vec<Candidate>,
{
    fn candidates(&self, query: &str, limit: usize) -> Vec<Candidate> {
        self(query, limit)
    }
}

/// In-memory candidate source.
///
/// Filtering is a case-insensitive substring match of the query against each
/// candidate key, in insertion order, capped at the requested limit.
#[derive(Debug, Clone, Default)]
pub struct StaticCandidateSource {
    entries: Vec<Candidate>,
}

impl StaticCandidateSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from candidate entries.
    pub fn from_entries(entries: impl IntoIterator<Item = Candidate>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Load a source from a reader holding a JSON array of candidates.
    ///
    /// # Errors
    ///
    /// Propagates JSON parse failures.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let entries: Vec<Candidate> = serde_json::from_reader(reader)?;
        Ok(Self { entries })
    }

    /// The two-entry demo dataset.
    pub fn sample() -> Self {
        Self::from_entries([
            Candidate::new("google_domain")
                .with_details(json!({"id": "1", "name": "Google", "url": "google.com"})),
            Candidate::new("zomato_domain")
                .with_details(json!({"id": "2", "name": "Zomato", "url": "zomato.com"})),
        ])
    }

    /// Insert a candidate, replacing any existing entry with the same key.
    pub fn insert(&mut self, candidate: Candidate) {
        match self.entries.iter_mut().find(|c| c.key == candidate.key) {
            Some(existing) => *existing = candidate,
            None => self.entries.push(candidate),
        }
    }

    /// Remove the candidate with `key`, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<Candidate> {
        let index = self.entries.iter().position(|c| c.key == key)?;
        Some(self.entries.remove(index))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }
}

impl CandidateSource for StaticCandidateSource {
    fn candidates(&self, query: &str, limit: usize) -> Vec<Candidate> {
        if query.is_empty() {
            return self.entries.iter().take(limit).cloned().collect();
        }

        // Query text is matched literally, not as a pattern.
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build();
        match pattern {
            Ok(re) => self
                .entries
                .iter()
                .filter(|c| re.is_match(&c.key))
                .take(limit)
                .cloned()
                .collect(),
            // A query too large to compile matches nothing.
            Err(_) => Vec::new(),
        }
    }
}
