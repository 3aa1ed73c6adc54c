//! Trigger-match detection over the text preceding the cursor.
//!
//! Given the text window that ends at the cursor and a configured trigger
//! character, [`TriggerMatcher`] decides whether the window ends in a
//! candidate "mention" sequence (the trigger followed by a bounded run of
//! non-punctuation, non-whitespace characters) and, if so, reports the run,
//! its byte offset, and the full replaceable span.
//!
//! The matcher carries no state between calls: editor text can change
//! arbitrarily between keystrokes (paste, undo, programmatic edits), so the
//! full window is re-scanned on every text-change notification. The caller
//! bounds the window, keeping each call cheap.
//!
//! # Example
//!
//! ```rust
//! use typeahead::matcher::{MatchConfig, TriggerMatcher};
//!
//! let matcher = TriggerMatcher::new(MatchConfig::new('{')).unwrap();
//!
//! let result = matcher.find("hello {abc").unwrap();
//! assert_eq!(result.lead_offset, 6);
//! assert_eq!(result.matching_string, "abc");
//! assert_eq!(result.replaceable_string, "{abc");
//!
//! assert!(matcher.find("no trigger here").is_none());
//! ```

mod error;

pub use error::ConfigError;

use regex::Regex;
use std::ops::Range;

/// Punctuation excluded from candidate mention runs.
///
/// A run containing any of these characters cannot be an unfinished mention;
/// this keeps a match local to the word currently being typed instead of
/// reinterpreting a dangling trigger earlier in a paragraph.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '+', '*', '?', '$', '@', '|', '#', '{', '}', '(', ')', '^', '-', '[', ']', '\\',
    '/', '!', '%', '\'', '"', '~', '=', '<', '>', '_', ':', ';',
];

/// Immutable matcher configuration.
///
/// Built once and reused across calls. Length bounds apply to the run of
/// characters *after* the trigger:
///
/// * `min_length`: shortest run reported as a match (default 1; 0 permits a
///   bare trigger to match).
/// * `max_length`: longest run reported as a match (default 75); bounds the
///   suggestion-query size.
///
/// Validation happens at [`TriggerMatcher::new`], not here, so configs can be
/// assembled freely before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    trigger: char,
    min_length: usize,
    max_length: usize,
}

impl MatchConfig {
    /// Default minimum run length.
    pub const DEFAULT_MIN_LENGTH: usize = 1;
    /// Default maximum run length.
    pub const DEFAULT_MAX_LENGTH: usize = 75;

    /// Create a configuration for `trigger` with default length bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeahead::matcher::MatchConfig;
    ///
    /// let config = MatchConfig::new('@');
    /// assert_eq!(config.trigger(), '@');
    /// assert_eq!(config.min_length(), MatchConfig::DEFAULT_MIN_LENGTH);
    /// assert_eq!(config.max_length(), MatchConfig::DEFAULT_MAX_LENGTH);
    /// ```
    pub fn new(trigger: char) -> Self {
        Self {
            trigger,
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
        }
    }

    /// Set the minimum run length required to report a match.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the maximum run length reported after the trigger.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// The configured trigger character.
    pub fn trigger(&self) -> char {
        self.trigger
    }

    /// The configured minimum run length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// The configured maximum run length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger.is_whitespace() {
            return Err(ConfigError::WhitespaceTrigger(self.trigger));
        }
        if self.trigger.is_alphanumeric() {
            return Err(ConfigError::AlphanumericTrigger(self.trigger));
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::LengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

/// A detected candidate mention, borrowing the scanned text.
///
/// Constructed per text-change event and never persisted; offsets are byte
/// indices into the UTF-8 input.
///
/// Invariants when a result is returned:
///
/// * `replaceable_string` starts with exactly one trigger character and
///   equals the trigger followed by `matching_string`;
/// * `matching_string` contains between `min_length` and `max_length`
///   characters, none of them punctuation or whitespace;
/// * unless the run was capped at `max_length`, `replaceable_string` is a
///   suffix of the scanned input ending at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'t> {
    /// Byte index of the trigger character in the scanned text.
    pub lead_offset: usize,
    /// The run after the trigger; used as the suggestion query.
    pub matching_string: &'t str,
    /// Trigger plus run; the span to delete when a suggestion is accepted.
    pub replaceable_string: &'t str,
}

impl MatchResult<'_> {
    /// Byte range of the replaceable span within the scanned text.
    pub fn replace_range(&self) -> Range<usize> {
        self.lead_offset..self.lead_offset + self.replaceable_string.len()
    }
}

/// End-anchored trigger matcher.
///
/// Compiles the trigger pattern once at construction; [`find`](Self::find)
/// is then a pure, total function over the text window. Construction rejects
/// malformed configurations (whitespace or alphanumeric trigger,
/// `min_length > max_length`) rather than producing silently-wrong matches.
#[derive(Debug, Clone)]
pub struct TriggerMatcher {
    config: MatchConfig,
    pattern: Regex,
}

impl TriggerMatcher {
    /// Build a matcher from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed configurations; see the
    /// variant docs for the individual rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeahead::matcher::{ConfigError, MatchConfig, TriggerMatcher};
    ///
    /// assert!(TriggerMatcher::new(MatchConfig::new('{')).is_ok());
    ///
    /// let bad = MatchConfig::new('{').with_min_length(5).with_max_length(2);
    /// assert!(matches!(
    ///     TriggerMatcher::new(bad),
    ///     Err(ConfigError::LengthBounds { min: 5, max: 2 })
    /// ));
    /// ```
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pattern = Regex::new(&trigger_pattern(config.trigger))?;
        Ok(Self { config, pattern })
    }

    /// The configuration this matcher was built from.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Scan `text` (the window ending at the cursor) for a candidate mention.
    ///
    /// The pattern is anchored at the end of the input: every character
    /// between the matched trigger and the cursor must be a valid run
    /// character. Because the trigger is never itself a valid run character,
    /// the matched trigger is always the last one in the window.
    ///
    /// Runs longer than `max_length` are capped: the reported run is the
    /// first `max_length` characters after the trigger. Runs shorter than
    /// `min_length` report no match, letting the caller keep scanning as the
    /// user types.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeahead::matcher::{MatchConfig, TriggerMatcher};
    ///
    /// let matcher = TriggerMatcher::new(MatchConfig::new('{')).unwrap();
    ///
    /// // Punctuation between the run and the cursor breaks the match.
    /// assert!(matcher.find("{abc.def").is_none());
    ///
    /// // A trigger later in the window is matched instead.
    /// let result = matcher.find("a.b {abc").unwrap();
    /// assert_eq!(result.matching_string, "abc");
    /// ```
    pub fn find<'t>(&self, text: &'t str) -> Option<MatchResult<'t>> {
        let captures = self.pattern.captures(text)?;
        let run = captures.get(2)?;
        let lead_offset = captures.get(1)?.start();

        // Cap the run at max_length characters, greedy from the trigger.
        let mut matching_string = run.as_str();
        let mut end = run.end();
        if let Some((cap, _)) = matching_string.char_indices().nth(self.config.max_length) {
            matching_string = &matching_string[..cap];
            end = run.start() + cap;
        }

        if matching_string.chars().count() < self.config.min_length {
            return None;
        }

        Some(MatchResult {
            lead_offset,
            matching_string,
            replaceable_string: &text[lead_offset..end],
        })
    }
}

/// Build the end-anchored trigger pattern for `trigger`.
///
/// Group 1 is the replaceable span (trigger plus run), group 2 the run. The
/// run class excludes the trigger itself, the [`PUNCTUATION`] set, and
/// whitespace.
fn trigger_pattern(trigger: char) -> String {
    let mut valid_class = String::from("[^");
    push_escaped(&mut valid_class, trigger);
    for &ch in PUNCTUATION {
        push_escaped(&mut valid_class, ch);
    }
    valid_class.push_str(r"\s]");

    let mut escaped_trigger = String::new();
    push_escaped(&mut escaped_trigger, trigger);

    format!("({escaped_trigger}({valid_class}*))$")
}

fn push_escaped(pattern: &mut String, ch: char) {
    let mut buf = [0u8; 4];
    pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(config: MatchConfig) -> TriggerMatcher {
        TriggerMatcher::new(config).unwrap()
    }

    #[test]
    fn test_basic_match() {
        let m = matcher(MatchConfig::new('{'));
        let result = m.find("hello {abc").unwrap();
        assert_eq!(result.lead_offset, 6);
        assert_eq!(result.matching_string, "abc");
        assert_eq!(result.replaceable_string, "{abc");
        assert_eq!(result.replace_range(), 6..10);
    }

    #[test]
    fn test_no_trigger_no_match() {
        let m = matcher(MatchConfig::new('{'));
        assert!(m.find("").is_none());
        assert!(m.find("hello world").is_none());
        assert!(m.find("a.b,c").is_none());
    }

    #[test]
    fn test_trigger_at_start_of_input() {
        let m = matcher(MatchConfig::new('{'));
        let result = m.find("{abc").unwrap();
        assert_eq!(result.lead_offset, 0);
        assert_eq!(result.replaceable_string, "{abc");
    }

    #[test]
    fn test_trigger_mid_word_matches() {
        // No whitespace is required before the trigger.
        let m = matcher(MatchConfig::new('{'));
        let result = m.find("foo{bar").unwrap();
        assert_eq!(result.lead_offset, 3);
        assert_eq!(result.matching_string, "bar");
    }

    #[test]
    fn test_open_paren_before_trigger() {
        let m = matcher(MatchConfig::new('{'));
        let result = m.find("({abc").unwrap();
        assert_eq!(result.lead_offset, 1);
        assert_eq!(result.matching_string, "abc");
        assert_eq!(result.replaceable_string, "{abc");
    }

    #[test]
    fn test_bare_trigger_needs_min_length_zero() {
        let m = matcher(MatchConfig::new('{'));
        assert!(m.find("hello {").is_none());

        let m = matcher(MatchConfig::new('{').with_min_length(0));
        let result = m.find("hello {").unwrap();
        assert_eq!(result.matching_string, "");
        assert_eq!(result.replaceable_string, "{");
        assert_eq!(result.lead_offset, 6);
    }

    #[test]
    fn test_min_length_gate() {
        let m = matcher(MatchConfig::new('{').with_min_length(2));
        assert!(m.find("{a").is_none());
        let result = m.find("{ab").unwrap();
        assert_eq!(result.matching_string, "ab");
    }

    #[test]
    fn test_max_length_caps_run() {
        let m = matcher(MatchConfig::new('{').with_max_length(3));
        let result = m.find("{abcdef").unwrap();
        assert_eq!(result.matching_string, "abc");
        assert_eq!(result.replaceable_string, "{abc");
        assert_eq!(result.lead_offset, 0);
    }

    #[test]
    fn test_run_at_exactly_max_length() {
        let m = matcher(MatchConfig::new('{').with_max_length(3));
        let result = m.find("{abc").unwrap();
        assert_eq!(result.matching_string, "abc");
    }

    #[test]
    fn test_punctuation_before_cursor_breaks_match() {
        let m = matcher(MatchConfig::new('{'));
        assert!(m.find("{abc.").is_none());
        assert!(m.find("{abc.def").is_none());
        assert!(m.find("{abc def").is_none());
    }

    #[test]
    fn test_capped_run_followed_by_punctuation_still_no_match() {
        // End anchoring applies before the cap: punctuation anywhere between
        // trigger and cursor kills the match even when the run would be capped.
        let m = matcher(MatchConfig::new('{').with_max_length(3));
        assert!(m.find("{abcdef.gh").is_none());
    }

    #[test]
    fn test_punctuation_earlier_in_window_is_harmless() {
        let m = matcher(MatchConfig::new('{'));
        let result = m.find("a.b {abc").unwrap();
        assert_eq!(result.lead_offset, 4);
        assert_eq!(result.matching_string, "abc");
    }

    #[test]
    fn test_last_trigger_wins() {
        let m = matcher(MatchConfig::new('{'));
        let result = m.find("x{ab {cd").unwrap();
        assert_eq!(result.lead_offset, 5);
        assert_eq!(result.matching_string, "cd");
    }

    #[test]
    fn test_double_trigger() {
        let m = matcher(MatchConfig::new('{').with_min_length(0));
        let result = m.find("{{ab").unwrap();
        assert_eq!(result.lead_offset, 1);
        assert_eq!(result.replaceable_string, "{ab");
    }

    #[test]
    fn test_alternate_trigger_characters() {
        let m = matcher(MatchConfig::new('@'));
        let result = m.find("ping @alice").unwrap();
        assert_eq!(result.matching_string, "alice");
        assert_eq!(result.replaceable_string, "@alice");

        let m = matcher(MatchConfig::new('&'));
        let result = m.find("see &entity").unwrap();
        assert_eq!(result.matching_string, "entity");
    }

    #[test]
    fn test_unicode_run_and_offsets() {
        let m = matcher(MatchConfig::new('{'));
        let result = m.find("héllo {héllo").unwrap();
        // "héllo " is 7 bytes: the accented char takes two.
        assert_eq!(result.lead_offset, 7);
        assert_eq!(result.matching_string, "héllo");
        assert_eq!(result.replaceable_string, "{héllo");
    }

    #[test]
    fn test_max_length_counts_chars_not_bytes() {
        let m = matcher(MatchConfig::new('{').with_max_length(2));
        let result = m.find("{ééé").unwrap();
        assert_eq!(result.matching_string, "éé");
    }

    #[test]
    fn test_newline_is_whitespace() {
        let m = matcher(MatchConfig::new('{'));
        assert!(m.find("{ab\ncd").is_none());
        let result = m.find("ab\n{cd").unwrap();
        assert_eq!(result.matching_string, "cd");
    }

    #[test]
    fn test_rejects_whitespace_trigger() {
        assert!(matches!(
            TriggerMatcher::new(MatchConfig::new(' ')),
            Err(ConfigError::WhitespaceTrigger(' '))
        ));
    }

    #[test]
    fn test_rejects_alphanumeric_trigger() {
        assert!(matches!(
            TriggerMatcher::new(MatchConfig::new('a')),
            Err(ConfigError::AlphanumericTrigger('a'))
        ));
        assert!(matches!(
            TriggerMatcher::new(MatchConfig::new('7')),
            Err(ConfigError::AlphanumericTrigger('7'))
        ));
    }

    #[test]
    fn test_rejects_inverted_length_bounds() {
        let config = MatchConfig::new('{').with_min_length(10).with_max_length(3);
        assert!(matches!(
            TriggerMatcher::new(config),
            Err(ConfigError::LengthBounds { min: 10, max: 3 })
        ));
    }

    #[test]
    fn test_punctuation_triggers_are_well_formed() {
        // Conventional mention triggers all sit in the punctuation set.
        for trigger in ['{', '@', '#', '/'] {
            assert!(TriggerMatcher::new(MatchConfig::new(trigger)).is_ok());
        }
    }

    #[test]
    fn test_config_accessors() {
        let config = MatchConfig::new('#').with_min_length(2).with_max_length(20);
        assert_eq!(config.trigger(), '#');
        assert_eq!(config.min_length(), 2);
        assert_eq!(config.max_length(), 20);

        let m = matcher(config);
        assert_eq!(m.config(), &config);
    }
}
