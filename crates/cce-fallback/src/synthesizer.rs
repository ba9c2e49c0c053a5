//! Fallback batch synthesis
//!
//! Builds the template-derived batch returned when provider content is
//! unavailable. Deterministic by construction: no randomness, no clock,
//! no state between calls.

use crate::templates::{lookup, ControlTemplate, DEFAULT_TEMPLATES};
use cce_domain::{control_code, ControlItem, GenerationConfig, TestingStatus};

/// Deterministic template-driven control synthesis
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSynthesizer;

impl FallbackSynthesizer {
    /// Create a new synthesizer instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Manufacture exactly the configured (clamped) number of controls
    ///
    /// Templates are cycled modulo their count, so any requested size is
    /// filled. For a fixed `(framework, process_area, item_count)` the
    /// output is stable across calls.
    #[must_use]
    pub fn synthesize(&self, config: &GenerationConfig) -> Vec<ControlItem> {
        let templates = lookup(&config.framework).unwrap_or_else(|| {
            tracing::warn!(
                "no template set for framework {:?}, using generic templates",
                config.framework
            );
            DEFAULT_TEMPLATES
        });

        let count = config.clamped_item_count();
        (0..count)
            .map(|index| render(&templates[index % templates.len()], index, config))
            .collect()
    }
}

/// Render one template at a batch position
fn render(template: &ControlTemplate, index: usize, config: &GenerationConfig) -> ControlItem {
    ControlItem {
        code: control_code(&config.framework, index),
        title: template.title.to_string(),
        description: interpolate(template.description, config),
        category: template.category,
        frequency: template.frequency,
        process_area: config.process_area.clone(),
        testing_procedure: interpolate(template.testing, config),
        evidence_requirements: interpolate(template.evidence, config),
        automated: false,
        status: TestingStatus::NotTested,
    }
}

/// Replace `{area}` and `{framework}` markers with configuration values
fn interpolate(skeleton: &str, config: &GenerationConfig) -> String {
    skeleton
        .replace("{area}", &config.process_area)
        .replace("{framework}", &config.framework)
}
