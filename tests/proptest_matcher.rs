//! Property-based tests for the trigger matcher using proptest
//!
//! These pin down the matcher's invariants over generated windows instead of
//! hand-picked examples: totality, end anchoring, and the length bounds.

use proptest::prelude::*;
use typeahead::matcher::{MatchConfig, TriggerMatcher, PUNCTUATION};

fn matcher(config: MatchConfig) -> TriggerMatcher {
    TriggerMatcher::new(config).unwrap()
}

// Strategy for window text guaranteed not to contain the trigger
fn text_without_trigger() -> impl Strategy<Value = String> {
    "[a-z .,@#]{0,40}"
}

// Strategy for runs of valid characters (may exceed the default cap)
fn run_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{0,100}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: windows without the trigger character never match.
    #[test]
    fn prop_no_trigger_no_match(text in text_without_trigger()) {
        let m = matcher(MatchConfig::new('{').with_min_length(0));
        prop_assert!(m.find(&text).is_none());
    }

    /// Property: the replaceable span is always the trigger followed by the
    /// matching string.
    #[test]
    fn prop_replaceable_is_trigger_plus_matching(
        prefix in text_without_trigger(),
        run in run_strategy()
    ) {
        let m = matcher(MatchConfig::new('{').with_min_length(0));
        let text = format!("{prefix}{{{run}");
        let result = m.find(&text).expect("trigger followed by a valid run");

        let expected = format!("{{{}", result.matching_string);
        prop_assert_eq!(result.replaceable_string, expected.as_str());
        prop_assert_eq!(result.lead_offset, prefix.len());
    }

    /// Property: the reported run never exceeds the cap; under the cap it is
    /// the full run and the replaceable span is a suffix ending at the cursor.
    #[test]
    fn prop_length_bounds(
        prefix in text_without_trigger(),
        run in run_strategy()
    ) {
        let m = matcher(MatchConfig::new('{').with_min_length(0));
        let text = format!("{prefix}{{{run}");
        let result = m.find(&text).expect("trigger followed by a valid run");

        let max = MatchConfig::DEFAULT_MAX_LENGTH;
        prop_assert!(result.matching_string.chars().count() <= max);

        if run.chars().count() <= max {
            prop_assert_eq!(result.matching_string, run.as_str());
            prop_assert!(text.ends_with(result.replaceable_string));
        } else {
            let capped: String = run.chars().take(max).collect();
            prop_assert_eq!(result.matching_string, capped.as_str());
        }
    }

    /// Property: `min_length` gates short runs exactly.
    #[test]
    fn prop_min_length_gate(run in "[a-z]{0,5}", min in 0usize..=6) {
        let m = matcher(MatchConfig::new('{').with_min_length(min));
        let text = format!("hello {{{run}");

        match m.find(&text) {
            Some(result) => {
                prop_assert!(run.chars().count() >= min);
                prop_assert_eq!(result.matching_string, run.as_str());
            }
            None => prop_assert!(run.chars().count() < min),
        }
    }

    /// Property: the matcher is total over arbitrary input, and any result
    /// upholds the structural invariants.
    #[test]
    fn prop_total_over_arbitrary_input(text in any::<String>()) {
        let m = matcher(MatchConfig::new('{').with_min_length(0));

        if let Some(result) = m.find(&text) {
            prop_assert!(
                result.replaceable_string.starts_with('{'),
                "replaceable_string must start with the trigger"
            );
            prop_assert!(
                result.matching_string.chars().all(|c| {
                    c != '{' && !c.is_whitespace() && !PUNCTUATION.contains(&c)
                }),
                "matching_string must contain only valid characters"
            );
            let span = &text[result.lead_offset
                ..result.lead_offset + result.replaceable_string.len()];
            prop_assert_eq!(span, result.replaceable_string);
        }
    }

    /// Property: a different trigger behaves identically.
    #[test]
    fn prop_trigger_is_configurable(run in "[a-z]{1,10}") {
        let m = matcher(MatchConfig::new('@'));
        let text = format!("ping @{run}");
        let result = m.find(&text).expect("valid mention");
        prop_assert_eq!(result.matching_string, run.as_str());
    }
}
