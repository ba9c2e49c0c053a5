//! Tier 1: greedy JSON array extraction
//!
//! Takes the slice from the first `[` to the last `]` and parses it as
//! one JSON array. Spanning greedily keeps markdown fences and leading
//! prose out of the way without any fence-specific handling.

use crate::ExtractionStrategy;
use cce_domain::CandidateItem;
use serde_json::Value;

/// Greedy bracketed-array extraction
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonArrayStrategy;

impl ExtractionStrategy for JsonArrayStrategy {
    fn name(&self) -> &'static str {
        "json-array"
    }

    fn extract(&self, text: &str) -> Vec<CandidateItem> {
        let Some(start) = text.find('[') else {
            return Vec::new();
        };
        let Some(end) = text.rfind(']') else {
            return Vec::new();
        };
        if end <= start {
            return Vec::new();
        }

        match serde_json::from_str::<Value>(&text[start..=end]) {
            Ok(Value::Array(elements)) => elements
                .iter()
                .filter_map(Value::as_object)
                .map(CandidateItem::from_object)
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_bare_array() {
        let text = r#"[{"title": "A"}, {"title": "B"}]"#;
        let items = JsonArrayStrategy.extract(text);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("title"), Some(&json!("A")));
    }

    #[test]
    fn extracts_array_with_surrounding_prose() {
        let text = "Here are your controls:\n```json\n[{\"title\": \"A\"}]\n```\nLet me know!";
        let items = JsonArrayStrategy.extract(text);

        assert_eq!(items.len(), 1);
    }

    #[test]
    fn skips_non_object_elements() {
        let text = r#"[{"title": "A"}, "stray", 42, {"title": "B"}]"#;
        let items = JsonArrayStrategy.extract(text);

        assert_eq!(items.len(), 2);
    }

    #[test]
    fn malformed_array_yields_nothing() {
        assert!(JsonArrayStrategy.extract("[{\"title\": }]").is_empty());
        assert!(JsonArrayStrategy.extract("no brackets at all").is_empty());
        assert!(JsonArrayStrategy.extract("] backwards [").is_empty());
        assert!(JsonArrayStrategy.extract("").is_empty());
    }

    #[test]
    fn empty_array_yields_nothing() {
        assert!(JsonArrayStrategy.extract("[]").is_empty());
    }
}
