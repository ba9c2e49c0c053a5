//! Untrusted candidate items
//!
//! A [`CandidateItem`] is the opaque key/value mapping an extraction
//! strategy recovers from provider text. Nothing about it is validated;
//! it exists only to carry fields from the parser to the schema
//! normalizer, which is the sole consumer.

use indexmap::IndexMap;
use serde_json::Value;

/// Untrusted field mapping recovered from provider text
///
/// Keys are lowercased on insertion so alias lookups are a plain equality
/// scan against the tables in [`crate::aliases`]. Insertion order is
/// preserved, which keeps `Debug` output and tests deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateItem {
    fields: IndexMap<String, Value>,
}

impl CandidateItem {
    /// Create an empty candidate
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a candidate from a parsed JSON object
    #[must_use]
    pub fn from_object(object: &serde_json::Map<String, Value>) -> Self {
        let mut candidate = Self::new();
        for (key, value) in object {
            candidate.insert(key, value.clone());
        }
        candidate
    }

    /// Insert a field, lowercasing the label
    pub fn insert(&mut self, label: impl AsRef<str>, value: Value) {
        self.fields.insert(label.as_ref().to_lowercase(), value);
    }

    /// Look up a field by exact (lowercase) label
    #[inline]
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.fields.get(label)
    }

    /// First value matching any of the given alias labels
    #[must_use]
    pub fn get_first(&self, aliases: &[&str]) -> Option<&Value> {
        aliases.iter().find_map(|label| self.fields.get(*label))
    }

    /// First non-blank string value matching any of the given aliases
    ///
    /// Returns the trimmed string; blank and non-string values are
    /// skipped so a later alias can still match.
    #[must_use]
    pub fn str_first(&self, aliases: &[&str]) -> Option<&str> {
        aliases
            .iter()
            .filter_map(|label| self.fields.get(*label))
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|s| !s.is_empty())
    }

    /// First boolean-ish value matching any of the given aliases
    ///
    /// Accepts JSON booleans and the strings `"true"`/`"false"`
    /// (case-insensitive), which providers emit interchangeably.
    #[must_use]
    pub fn bool_first(&self, aliases: &[&str]) -> Option<bool> {
        aliases
            .iter()
            .filter_map(|label| self.fields.get(*label))
            .find_map(|value| match value {
                Value::Bool(b) => Some(*b),
                Value::String(s) => match s.trim().to_lowercase().as_str() {
                    "true" => Some(true),
                    "false" => Some(false),
                    _ => None,
                },
                _ => None,
            })
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the candidate carries no fields at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
