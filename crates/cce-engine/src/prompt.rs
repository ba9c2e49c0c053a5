//! Prompt construction
//!
//! Prompts are deterministic for a given configuration: stable field
//! order, bounded context, no clock or randomness. That keeps prompts
//! snapshot-testable and makes provider-side caching effective.

use cce_domain::GenerationConfig;
use std::fmt::Write as _;

/// Existing controls included as dedupe context, at most
pub const MAX_CONTEXT_ITEMS: usize = 3;

/// Builds the generation prompt from a configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    /// Create a new prompt builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the full prompt text
    #[must_use]
    pub fn build(&self, config: &GenerationConfig) -> String {
        let mut prompt = String::new();

        let _ = writeln!(
            prompt,
            "Generate {} internal controls for the {} compliance framework.",
            config.clamped_item_count(),
            config.framework
        );
        let _ = writeln!(prompt, "Process area: {}.", config.process_area);

        if !config.focus_areas.is_empty() {
            let _ = writeln!(prompt, "Focus areas: {}.", config.focus_areas.join(", "));
        }

        if config.include_automated {
            let _ = writeln!(prompt, "Prefer automated controls where practical.");
        }

        let context: Vec<&str> = config
            .existing_items
            .iter()
            .take(MAX_CONTEXT_ITEMS)
            .map(|item| item.title.as_str())
            .collect();
        if !context.is_empty() {
            let _ = writeln!(
                prompt,
                "Already defined controls, do not repeat them: {}.",
                context.join("; ")
            );
        }

        let _ = writeln!(
            prompt,
            "Each control must be a JSON object with the fields: title, description, \
             control_type (preventive|detective|corrective|directive), frequency \
             (continuous|daily|weekly|monthly|quarterly|annually|adhoc), \
             testing_procedure, evidence_requirements, automated."
        );
        prompt.push_str("Respond with only a JSON array of control objects and no other text.");

        prompt
    }
}
