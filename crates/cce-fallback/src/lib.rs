//! CCE Fallback - Deterministic template synthesis
//!
//! When the provider call fails or its response defeats every extraction
//! tier, the pipeline still owes the caller a schema-valid batch. This
//! crate manufactures one from immutable per-framework template tables:
//! - Known frameworks (ISO 27001, SOX, GDPR, NIST) get tailored sets
//! - Everything else falls back to a generic default set
//! - Output is a pure function of the configuration, so retried
//!   failures reproduce byte-for-byte

pub mod synthesizer;
pub mod templates;

pub use synthesizer::FallbackSynthesizer;
pub use templates::{lookup, ControlTemplate, DEFAULT_TEMPLATES};
