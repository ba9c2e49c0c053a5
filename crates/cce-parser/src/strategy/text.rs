//! Tier 3: heuristic structured-text extraction
//!
//! The last resort for responses with no parseable JSON at all. The
//! text is split into sections on numbered-list markers, bullets, or
//! blank lines; short sections are noise-filtered; labeled
//! `label: value` lines are resolved against the shared alias tables.
//! Labels outside those tables are ignored as data, never as logic.

use crate::ExtractionStrategy;
use cce_domain::{aliases, CandidateItem};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Sections shorter than this are discarded as noise
const MIN_SECTION_LEN: usize = 20;

/// Hard cap on extracted candidates, bounds pathological inputs
const MAX_SECTIONS: usize = 10;

/// Longest title taken from a section's first line
const TITLE_MAX_LEN: usize = 80;

static SECTION_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:\d+[.)]|[-*•])\s+|\n\s*\n").expect("section split pattern")
});

static LABELED_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:[-*•]\s*)?([A-Za-z][A-Za-z _]{1,30})\s*:\s*(.+)$")
        .expect("labeled field pattern")
});

/// Labeled-text extraction over list/paragraph sections
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredTextStrategy;

impl ExtractionStrategy for StructuredTextStrategy {
    fn name(&self) -> &'static str {
        "structured-text"
    }

    fn extract(&self, text: &str) -> Vec<CandidateItem> {
        SECTION_SPLIT
            .split(text)
            .filter_map(candidate_from_section)
            .take(MAX_SECTIONS)
            .collect()
    }
}

/// Extract one candidate from a section, or nothing if it is noise
fn candidate_from_section(section: &str) -> Option<CandidateItem> {
    let trimmed = section.trim();
    if trimmed.len() < MIN_SECTION_LEN {
        return None;
    }

    // A lone line ending in a colon is a lead-in ("Here are the
    // controls:"), not a control.
    if trimmed.ends_with(':') && trimmed.lines().count() == 1 {
        return None;
    }

    let mut candidate = CandidateItem::new();

    for caps in LABELED_FIELD.captures_iter(trimmed) {
        let label = normalize_label(&caps[1]);
        if known_label(&label) {
            candidate.insert(&label, Value::String(caps[2].trim().to_string()));
        }
    }

    // Sections often open with a bare control name instead of a labeled
    // title line; take the first line's head as the title then.
    if candidate.str_first(aliases::TITLE).is_none() {
        if let Some(first) = trimmed.lines().next() {
            let head = first.split(':').next().unwrap_or(first).trim();
            if !head.is_empty() && !known_label(&normalize_label(head)) {
                let title: String = head.chars().take(TITLE_MAX_LEN).collect();
                candidate.insert("title", Value::String(title));
            }
        }
    }

    if trimmed.to_lowercase().contains("automat") {
        candidate.insert("automated", Value::Bool(true));
    }

    // A section that surfaced neither a title nor a description carries
    // nothing worth turning into a control.
    if candidate.str_first(aliases::TITLE).is_none()
        && candidate.str_first(aliases::DESCRIPTION).is_none()
    {
        return None;
    }

    Some(candidate)
}

/// Lowercase a label and join words with underscores ("Control Type"
/// becomes "control_type", matching the alias tables)
fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Whether a normalized label appears in any alias table
fn known_label(label: &str) -> bool {
    const TABLES: &[&[&str]] = &[
        aliases::TITLE,
        aliases::DESCRIPTION,
        aliases::CATEGORY,
        aliases::FREQUENCY,
        aliases::TESTING_PROCEDURE,
        aliases::EVIDENCE,
        aliases::CODE,
        aliases::AUTOMATED,
        aliases::PROCESS_AREA,
    ];
    TABLES.iter().any(|table| table.contains(&label))
}
