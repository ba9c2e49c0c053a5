//! Tier 2: independent JSON object scan
//!
//! Used when the response interleaves objects with prose instead of
//! wrapping them in one array. Each balanced brace-delimited block is
//! parsed on its own; blocks that fail to parse are skipped without
//! affecting their neighbors, so one corrupt object never poisons the
//! rest of the response.

use crate::ExtractionStrategy;
use cce_domain::CandidateItem;
use serde_json::Value;

/// Brace-delimited object scan
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObjectScanStrategy;

impl ExtractionStrategy for JsonObjectScanStrategy {
    fn name(&self) -> &'static str {
        "json-object-scan"
    }

    fn extract(&self, text: &str) -> Vec<CandidateItem> {
        scan_blocks(text)
            .into_iter()
            .filter_map(|block| serde_json::from_str::<Value>(block).ok())
            .filter_map(|value| match value {
                Value::Object(map) if !map.is_empty() => Some(CandidateItem::from_object(&map)),
                _ => None,
            })
            .collect()
    }
}

/// Top-level balanced `{...}` blocks in the text
///
/// Brace depth is tracked with string- and escape-awareness so braces
/// inside JSON string values do not break the balance. Only top-level
/// blocks are returned; objects nested inside another block stay part
/// of their parent.
fn scan_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            // Quotes only matter inside a block; prose quotes at depth 0
            // must not desynchronize the scanner.
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        blocks.push(&text[start..=i]);
                    }
                }
            }
            _ => {}
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_objects_between_prose() {
        let text = concat!(
            "First control: {\"title\": \"A\", \"type\": \"preventive\"}\n",
            "And another one: {\"title\": \"B\"} — that's all."
        );
        let items = JsonObjectScanStrategy.extract(text);

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].get("title"), Some(&json!("B")));
    }

    #[test]
    fn corrupt_block_skipped_independently() {
        let text = "{\"title\": \"A\"} {\"title\": broken} {\"title\": \"C\"}";
        let items = JsonObjectScanStrategy.extract(text);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("title"), Some(&json!("A")));
        assert_eq!(items[1].get("title"), Some(&json!("C")));
    }

    #[test]
    fn braces_inside_strings_stay_balanced() {
        let text = r#"{"title": "Uses {placeholders}", "desc": "a \"quoted\" value"}"#;
        let items = JsonObjectScanStrategy.extract(text);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].get("title"), Some(&json!("Uses {placeholders}")));
    }

    #[test]
    fn nested_objects_stay_with_parent() {
        let text = r#"{"title": "A", "meta": {"nested": true}}"#;
        let items = JsonObjectScanStrategy.extract(text);

        assert_eq!(items.len(), 1);
    }

    #[test]
    fn stray_and_empty_braces_yield_nothing() {
        assert!(JsonObjectScanStrategy.extract("} { unclosed").is_empty());
        assert!(JsonObjectScanStrategy.extract("{}").is_empty());
        assert!(JsonObjectScanStrategy.extract("plain prose").is_empty());
    }
}
