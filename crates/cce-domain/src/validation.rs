//! Schema normalization
//!
//! The single chokepoint translating untrusted [`CandidateItem`] mappings
//! into fully-populated [`ControlItem`] records. Normalization is total:
//! it never fails, it substitutes documented defaults instead.

use crate::aliases;
use crate::candidate::CandidateItem;
use crate::types::{
    ControlCategory, ControlFrequency, ControlItem, GenerationConfig, TestingStatus,
};

/// Placeholder testing procedure for candidates that omit one
pub const DEFAULT_TESTING_PROCEDURE: &str = "Manual testing required";

/// Placeholder evidence requirements for candidates that omit them
pub const DEFAULT_EVIDENCE_REQUIREMENTS: &str =
    "Supporting documentation and review records";

/// Maximum letters kept when deriving code initials from a framework name
const INITIALS_MAX_LEN: usize = 4;

/// Initials used when a framework name contains no letters at all
const INITIALS_FALLBACK: &str = "CTL";

/// Derive code initials from a framework name
///
/// Strips non-letters, uppercases, and keeps at most [`INITIALS_MAX_LEN`]
/// characters: "ISO 27001" becomes "ISO", "SOX" stays "SOX". A framework
/// with no letters yields [`INITIALS_FALLBACK`].
#[must_use]
pub fn framework_initials(framework: &str) -> String {
    let initials: String = framework
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .take(INITIALS_MAX_LEN)
        .collect();

    if initials.is_empty() {
        INITIALS_FALLBACK.to_string()
    } else {
        initials
    }
}

/// Synthesize a control code for a batch position
///
/// `index` is the 0-based position within the batch; codes are 1-based
/// and zero-padded to width 3: `control_code("SOX", 1)` is `"SOX-002"`.
#[must_use]
pub fn control_code(framework: &str, index: usize) -> String {
    format!("{}-{:03}", framework_initials(framework), index + 1)
}

/// Normalizes untrusted candidates into schema-valid controls
///
/// Coercion is silent but observable: out-of-range enum tokens are
/// logged at `debug` and replaced with the documented default, never
/// surfaced as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlValidator;

impl ControlValidator {
    /// Create a new validator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Normalize one candidate into a fully-populated control
    ///
    /// # Arguments
    /// * `candidate` - untrusted field mapping from the parser
    /// * `index` - 0-based position within the generation batch
    /// * `config` - the originating configuration, source of defaults
    #[must_use]
    pub fn normalize(
        &self,
        candidate: &CandidateItem,
        index: usize,
        config: &GenerationConfig,
    ) -> ControlItem {
        let title = candidate
            .str_first(aliases::TITLE)
            .map_or_else(|| default_title(config, index), str::to_string);

        let description = candidate
            .str_first(aliases::DESCRIPTION)
            .map_or_else(|| default_description(config), str::to_string);

        let category = match candidate.str_first(aliases::CATEGORY) {
            Some(token) => ControlCategory::parse_exact(token).unwrap_or_else(|| {
                tracing::debug!("unknown category token {:?}, using default", token);
                ControlCategory::default()
            }),
            None => ControlCategory::default(),
        };

        let frequency = match candidate.str_first(aliases::FREQUENCY) {
            Some(token) => ControlFrequency::parse_exact(token).unwrap_or_else(|| {
                tracing::debug!("unknown frequency token {:?}, using default", token);
                ControlFrequency::default()
            }),
            None => ControlFrequency::default(),
        };

        let code = candidate
            .str_first(aliases::CODE)
            .map_or_else(|| control_code(&config.framework, index), str::to_string);

        let process_area = candidate
            .str_first(aliases::PROCESS_AREA)
            .map_or_else(|| config.process_area.clone(), str::to_string);

        let testing_procedure = candidate
            .str_first(aliases::TESTING_PROCEDURE)
            .map_or_else(|| DEFAULT_TESTING_PROCEDURE.to_string(), str::to_string);

        let evidence_requirements = candidate
            .str_first(aliases::EVIDENCE)
            .map_or_else(|| DEFAULT_EVIDENCE_REQUIREMENTS.to_string(), str::to_string);

        let automated = candidate.bool_first(aliases::AUTOMATED).unwrap_or(false);

        ControlItem {
            code,
            title,
            description,
            category,
            frequency,
            process_area,
            testing_procedure,
            evidence_requirements,
            automated,
            status: TestingStatus::NotTested,
        }
    }
}

fn default_title(config: &GenerationConfig, index: usize) -> String {
    format!("{} Control {}", config.process_area, index + 1)
}

fn default_description(config: &GenerationConfig) -> String {
    format!(
        "Supports {} compliance objectives within the {} process area.",
        config.framework, config.process_area
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn candidate(value: serde_json::Value) -> CandidateItem {
        match value {
            serde_json::Value::Object(map) => CandidateItem::from_object(&map),
            _ => panic!("expected object"),
        }
    }

    fn config() -> GenerationConfig {
        GenerationConfig::new("SOX", "Financial Reporting")
    }

    #[test]
    fn initials_strip_and_uppercase() {
        assert_eq!(framework_initials("ISO 27001"), "ISO");
        assert_eq!(framework_initials("SOX"), "SOX");
        assert_eq!(framework_initials("GDPR"), "GDPR");
        assert_eq!(framework_initials("nist csf"), "NIST");
    }

    #[test]
    fn initials_fallback_without_letters() {
        assert_eq!(framework_initials("27001"), "CTL");
        assert_eq!(framework_initials(""), "CTL");
        assert_eq!(framework_initials("---"), "CTL");
    }

    #[test]
    fn code_is_one_based_zero_padded() {
        assert_eq!(control_code("SOX", 0), "SOX-001");
        assert_eq!(control_code("SOX", 1), "SOX-002");
        assert_eq!(control_code("ISO 27001", 11), "ISO-012");
    }

    #[test]
    fn normalize_keeps_exact_enum_tokens() {
        let validator = ControlValidator::new();
        let item = validator.normalize(
            &candidate(json!({
                "title": "Segregation of Duties",
                "control_type": "detective",
                "frequency": "quarterly"
            })),
            0,
            &config(),
        );

        assert_eq!(item.category, ControlCategory::Detective);
        assert_eq!(item.frequency, ControlFrequency::Quarterly);
        assert_eq!(item.title, "Segregation of Duties");
    }

    #[test]
    fn normalize_coerces_invalid_enums() {
        let validator = ControlValidator::new();
        let item = validator.normalize(
            &candidate(json!({"title": "X", "type": "Detective", "freq": "biweekly"})),
            0,
            &config(),
        );

        // Case-sensitive match failed, documented defaults substituted
        assert_eq!(item.category, ControlCategory::Preventive);
        assert_eq!(item.frequency, ControlFrequency::Monthly);
    }

    #[test]
    fn normalize_fills_missing_fields() {
        let validator = ControlValidator::new();
        let item = validator.normalize(&candidate(json!({"title": "Y"})), 1, &config());

        assert_eq!(item.code, "SOX-002");
        assert_eq!(item.process_area, "Financial Reporting");
        assert_eq!(item.testing_procedure, DEFAULT_TESTING_PROCEDURE);
        assert_eq!(item.evidence_requirements, DEFAULT_EVIDENCE_REQUIREMENTS);
        assert!(!item.automated);
        assert_eq!(item.status, TestingStatus::NotTested);
        assert!(!item.description.is_empty());
    }

    #[test]
    fn normalize_empty_candidate_is_fully_populated() {
        let validator = ControlValidator::new();
        let item = validator.normalize(&CandidateItem::new(), 4, &config());

        assert_eq!(item.code, "SOX-005");
        assert_eq!(item.title, "Financial Reporting Control 5");
        assert!(!item.description.is_empty());
        assert_eq!(item.category, ControlCategory::Preventive);
        assert_eq!(item.frequency, ControlFrequency::Monthly);
    }

    #[test]
    fn normalize_keeps_candidate_code_and_flag() {
        let validator = ControlValidator::new();
        let item = validator.normalize(
            &candidate(json!({"title": "Z", "code": "SOX-104", "automated": true})),
            0,
            &config(),
        );

        assert_eq!(item.code, "SOX-104");
        assert!(item.automated);
    }
}
