//! Generation orchestration
//!
//! The one component callers invoke and the one with a side effect (the
//! injected provider call). Owns the end-to-end flow:
//! 1. Validate the configuration (the only loud failure)
//! 2. Build the prompt
//! 3. Invoke the provider once
//! 4. Parse, normalize, dedupe, repair code collisions
//! 5. Fall back to template content on any degradation
//!
//! Provider and parsing failures never reach the caller as errors; they
//! surface as [`ContentSource::Fallback`] so the UI can show a soft
//! notification without blocking the workflow.

use crate::prompt::PromptBuilder;
use crate::provider::{ContentGenerator, ProviderError};
use cce_domain::{control_code, ConfigError, ControlItem, ControlValidator, GenerationConfig};
use cce_fallback::FallbackSynthesizer;
use cce_parser::{EmptyReason, ParseOutcome, ResponseParser};
use std::collections::HashSet;

/// Why a generation degraded to fallback content
#[derive(Debug, Clone, PartialEq)]
pub enum DegradationCause {
    /// The injected capability failed
    Provider(ProviderError),
    /// The provider returned blank text
    EmptyResponse,
    /// The response answered a different question than asked
    OffTopic(&'static str),
    /// No extraction tier recovered a usable candidate
    Unparseable,
}

/// Where the returned items came from
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    /// Parsed out of provider text by the named strategy
    Provider {
        /// Winning extraction strategy
        strategy: &'static str,
    },
    /// Synthesized from templates after a degradation
    Fallback(DegradationCause),
}

/// Result of one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    /// Validated controls, never empty
    pub items: Vec<ControlItem>,
    /// Provenance of the items
    pub source: ContentSource,
}

impl GenerationOutcome {
    /// Whether fallback content was used
    ///
    /// Callers surface a soft "template content" notification when this
    /// is true; it is never an error.
    #[inline]
    #[must_use]
    pub fn degraded(&self) -> bool {
        matches!(self.source, ContentSource::Fallback(_))
    }
}

/// The generation orchestrator
///
/// Stateless between calls; concurrent invocations need no coordination.
#[derive(Debug)]
pub struct GenerationEngine<G> {
    generator: G,
    prompts: PromptBuilder,
    parser: ResponseParser,
    validator: ControlValidator,
    synthesizer: FallbackSynthesizer,
}

impl<G: ContentGenerator> GenerationEngine<G> {
    /// Create an engine around an injected generation capability
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            prompts: PromptBuilder::new(),
            parser: ResponseParser::default(),
            validator: ControlValidator::new(),
            synthesizer: FallbackSynthesizer::new(),
        }
    }

    /// With a custom parser pipeline (tests swap tiers through this)
    #[inline]
    #[must_use]
    pub fn with_parser(mut self, parser: ResponseParser) -> Self {
        self.parser = parser;
        self
    }

    /// Generate a batch of controls for the configuration
    ///
    /// # Errors
    /// Only [`ConfigError`] — a blank framework or process area is a
    /// caller bug. Every provider or parsing failure degrades to
    /// template content instead of erroring.
    pub async fn generate(
        &self,
        config: &GenerationConfig,
    ) -> Result<GenerationOutcome, ConfigError> {
        // 1. Validate the configuration
        config.validate()?;
        tracing::info!(
            "generating {} control(s) for {} / {}",
            config.clamped_item_count(),
            config.framework,
            config.process_area
        );

        // 2. Build the prompt
        let prompt = self.prompts.build(config);

        // 3. One provider call; failure is degradation, not error
        let text = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                return Ok(self.fallback(config, DegradationCause::Provider(e)));
            }
        };
        if text.trim().is_empty() {
            return Ok(self.fallback(config, DegradationCause::EmptyResponse));
        }

        // 4. Parse and normalize
        let (strategy, candidates) = match self.parser.parse(&text) {
            ParseOutcome::Extracted { strategy, items } => (strategy, items),
            ParseOutcome::Empty(EmptyReason::OffTopic(marker)) => {
                return Ok(self.fallback(config, DegradationCause::OffTopic(marker)));
            }
            ParseOutcome::Empty(EmptyReason::Unparseable) => {
                return Ok(self.fallback(config, DegradationCause::Unparseable));
            }
        };

        let items = self.normalize_batch(&candidates, config);
        if items.is_empty() {
            // Everything parsed was a duplicate of existing controls
            return Ok(self.fallback(config, DegradationCause::Unparseable));
        }

        tracing::debug!(
            "strategy {} produced {} control(s) after normalization",
            strategy,
            items.len()
        );
        Ok(GenerationOutcome {
            items,
            source: ContentSource::Provider { strategy },
        })
    }

    /// Normalize candidates, drop duplicates of existing controls, and
    /// repair code collisions within the batch
    fn normalize_batch(
        &self,
        candidates: &[cce_domain::CandidateItem],
        config: &GenerationConfig,
    ) -> Vec<ControlItem> {
        let existing_titles: HashSet<String> = config
            .existing_items
            .iter()
            .map(|item| item.title.to_lowercase())
            .collect();

        let mut used_codes: HashSet<String> = HashSet::new();
        let mut items = Vec::with_capacity(candidates.len());

        for (index, candidate) in candidates.iter().enumerate() {
            let mut item = self.validator.normalize(candidate, index, config);

            if existing_titles.contains(&item.title.to_lowercase()) {
                tracing::debug!("dropping duplicate of existing control {:?}", item.title);
                continue;
            }

            if used_codes.contains(&item.code) {
                let repaired = free_code(config, index, &used_codes);
                tracing::debug!(
                    "code collision on {:?}, reassigned to {}",
                    item.code,
                    repaired
                );
                item.code = repaired;
            }
            used_codes.insert(item.code.clone());
            items.push(item);
        }

        items
    }

    /// Synthesize template content for a degraded generation
    fn fallback(&self, config: &GenerationConfig, cause: DegradationCause) -> GenerationOutcome {
        tracing::warn!(
            "generation degraded ({:?}), synthesizing template content",
            cause
        );
        GenerationOutcome {
            items: self.synthesizer.synthesize(config),
            source: ContentSource::Fallback(cause),
        }
    }
}

/// First synthesized code not yet used in this batch
fn free_code(
    config: &GenerationConfig,
    start_index: usize,
    used_codes: &HashSet<String>,
) -> String {
    let mut index = start_index;
    loop {
        let code = control_code(&config.framework, index);
        if !used_codes.contains(&code) {
            return code;
        }
        index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockContentGenerator;
    use cce_domain::TestingStatus;

    fn engine_returning(text: &str) -> GenerationEngine<MockContentGenerator> {
        let text = text.to_string();
        let mut mock = MockContentGenerator::new();
        mock.expect_generate().returning(move |_| Ok(text.clone()));
        GenerationEngine::new(mock)
    }

    fn engine_failing(error: ProviderError) -> GenerationEngine<MockContentGenerator> {
        let mut mock = MockContentGenerator::new();
        mock.expect_generate()
            .returning(move |_| Err(error.clone()));
        GenerationEngine::new(mock)
    }

    #[tokio::test]
    async fn invalid_config_fails_loudly() {
        let engine = engine_returning("[]");
        let config = GenerationConfig::new("", "Payroll");

        assert_eq!(
            engine.generate(&config).await,
            Err(ConfigError::MissingFramework)
        );
    }

    #[tokio::test]
    async fn parsed_array_wins_over_fallback() {
        let engine =
            engine_returning(r#"[{"title": "X", "control_type": "detective"}, {"title": "Y"}]"#);
        let config = GenerationConfig::new("SOX", "Financial Reporting").with_item_count(3);

        let outcome = engine.generate(&config).await.unwrap();

        assert!(!outcome.degraded());
        assert_eq!(
            outcome.source,
            ContentSource::Provider { strategy: "json-array" }
        );
        // Parser count is authoritative, no padding to item_count
        assert_eq!(outcome.items.len(), 2);
        assert_eq!(outcome.items[1].code, "SOX-002");
        assert_eq!(outcome.items[1].status, TestingStatus::NotTested);
    }

    #[tokio::test]
    async fn provider_error_degrades_to_fallback() {
        let engine = engine_failing(ProviderError::Timeout { duration_secs: 30 });
        let config = GenerationConfig::new("SOX", "Payroll").with_item_count(4);

        let outcome = engine.generate(&config).await.unwrap();

        assert!(outcome.degraded());
        assert_eq!(outcome.items.len(), 4);
        assert!(matches!(
            outcome.source,
            ContentSource::Fallback(DegradationCause::Provider(ProviderError::Timeout { .. }))
        ));
    }

    #[tokio::test]
    async fn blank_response_degrades_to_fallback() {
        let engine = engine_returning("   \n  ");
        let config = GenerationConfig::new("NIST", "Network Operations");

        let outcome = engine.generate(&config).await.unwrap();

        assert!(matches!(
            outcome.source,
            ContentSource::Fallback(DegradationCause::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn duplicates_of_existing_controls_dropped() {
        let engine = engine_returning(r#"[{"title": "Access Review"}, {"title": "Fresh"}]"#);
        let existing = cce_test_utils::control("Access Review");
        let config = GenerationConfig::new("SOX", "Payroll").with_existing_items(vec![existing]);

        let outcome = engine.generate(&config).await.unwrap();

        assert!(!outcome.degraded());
        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].title, "Fresh");
    }

    #[tokio::test]
    async fn all_parsed_items_duplicate_falls_back() {
        let engine = engine_returning(r#"[{"title": "Access Review"}]"#);
        let existing = cce_test_utils::control("access review");
        let config = GenerationConfig::new("SOX", "Payroll")
            .with_existing_items(vec![existing])
            .with_item_count(2);

        let outcome = engine.generate(&config).await.unwrap();

        assert!(outcome.degraded());
        assert_eq!(outcome.items.len(), 2);
    }

    #[tokio::test]
    async fn empty_parser_pipeline_always_falls_back() {
        let engine = engine_returning(r#"[{"title": "X"}]"#)
            .with_parser(cce_parser::ResponseParser::new());
        let config = GenerationConfig::new("SOX", "Payroll");

        let outcome = engine.generate(&config).await.unwrap();

        // No strategies registered: even a perfect array degrades
        assert!(matches!(
            outcome.source,
            ContentSource::Fallback(DegradationCause::Unparseable)
        ));
    }

    #[tokio::test]
    async fn provider_supplied_code_collisions_repaired() {
        let engine = engine_returning(
            r#"[{"title": "A", "code": "SOX-001"}, {"title": "B", "code": "SOX-001"}]"#,
        );
        let config = GenerationConfig::new("SOX", "Payroll");

        let outcome = engine.generate(&config).await.unwrap();

        assert_eq!(outcome.items.len(), 2);
        assert_ne!(outcome.items[0].code, outcome.items[1].code);
        assert_eq!(outcome.items[0].code, "SOX-001");
        assert_eq!(outcome.items[1].code, "SOX-002");
    }
}
