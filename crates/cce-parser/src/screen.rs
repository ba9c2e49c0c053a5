//! Off-topic response screening
//!
//! Providers occasionally answer a different question than asked,
//! returning audit-scoping prose instead of control definitions. Such
//! responses can still contain array-like substrings that would parse
//! into nonsense items, so they are rejected before any tier runs.

use cce_domain::aliases::OFF_TOPIC_MARKERS;

/// First off-topic marker phrase found in the text, if any
///
/// Matching is case-insensitive over the whole response.
#[must_use]
pub fn off_topic_marker(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    OFF_TOPIC_MARKERS
        .iter()
        .copied()
        .find(|marker| lowered.contains(marker))
}
