//! Tier ordering and robustness of the full parser pipeline

use cce_parser::{EmptyReason, ParseOutcome, ResponseParser};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn parse(text: &str) -> ParseOutcome {
    ResponseParser::default().parse(text)
}

#[test]
fn array_tier_wins_when_array_present() {
    // Scattered objects and a numbered list are also present; the
    // greedy array must still take priority.
    let text = format!(
        "{}\n\nAlso consider {{\"title\": \"Stray\"}}\n\n1. Title: Listed Control\n   Description: should not be reached by tier three\n",
        cce_test_utils::array_response()
    );

    match parse(&text) {
        ParseOutcome::Extracted { strategy, items } => {
            assert_eq!(strategy, "json-array");
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].get("title"), Some(&json!("Journal Entry Approval")));
        }
        ParseOutcome::Empty(_) => panic!("expected extraction"),
    }
}

#[test]
fn fenced_array_parses_through_tier_one() {
    let outcome = parse(&cce_test_utils::fenced_array_response());
    assert!(outcome.is_extracted());
    match outcome {
        ParseOutcome::Extracted { strategy, items } => {
            assert_eq!(strategy, "json-array");
            assert_eq!(items.len(), 2);
        }
        ParseOutcome::Empty(_) => panic!("expected extraction"),
    }
}

#[test]
fn object_scan_used_when_no_array_parses() {
    match parse(&cce_test_utils::prose_with_objects_response()) {
        ParseOutcome::Extracted { strategy, items } => {
            assert_eq!(strategy, "json-object-scan");
            // The corrupt middle block is skipped
            assert_eq!(items.len(), 2);
            assert_eq!(
                items[0].get("title"),
                Some(&json!("Access Recertification"))
            );
        }
        ParseOutcome::Empty(_) => panic!("expected extraction"),
    }
}

#[test]
fn structured_text_used_as_last_resort() {
    match parse(&cce_test_utils::numbered_list_response()) {
        ParseOutcome::Extracted { strategy, items } => {
            assert_eq!(strategy, "structured-text");
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].get("title"), Some(&json!("Vendor Invoice Matching")));
            assert_eq!(items[0].get("frequency"), Some(&json!("weekly")));
            // "Automated comparison..." in the second section
            assert_eq!(items[1].get("automated"), Some(&json!(true)));
        }
        ParseOutcome::Empty(_) => panic!("expected extraction"),
    }
}

#[test]
fn off_topic_marker_beats_embedded_array() {
    let outcome = parse(&cce_test_utils::off_topic_response());
    assert!(matches!(
        outcome,
        ParseOutcome::Empty(EmptyReason::OffTopic(_))
    ));
}

#[test]
fn garbage_reports_unparseable() {
    assert_eq!(
        parse(&cce_test_utils::garbage_response()),
        ParseOutcome::Empty(EmptyReason::Unparseable)
    );
    assert_eq!(parse(""), ParseOutcome::Empty(EmptyReason::Unparseable));
}

proptest! {
    // The pipeline is total: any input yields an outcome, never a panic,
    // and an Extracted outcome always carries at least one candidate.
    #[test]
    fn pipeline_is_total(text in ".{0,400}") {
        match parse(&text) {
            ParseOutcome::Extracted { items, .. } => prop_assert!(!items.is_empty()),
            ParseOutcome::Empty(_) => {}
        }
    }

    #[test]
    fn pipeline_survives_bracket_noise(text in r"[\[\]{}\x22:,a-z0-9 \n]{0,200}") {
        let _ = parse(&text);
    }
}
