//! CCE Engine - Generation Orchestrator
//!
//! The caller-facing entry point of the Compliance Content Engine:
//! - Validates the generation configuration
//! - Builds a deterministic prompt
//! - Invokes the injected provider capability once
//! - Runs the tiered parser and the schema normalizer
//! - Degrades to deterministic template content on any failure
//!
//! # Example
//!
//! ```rust,ignore
//! use cce_domain::GenerationConfig;
//! use cce_engine::GenerationEngine;
//!
//! # async fn example(adapter: impl cce_engine::ContentGenerator) {
//! let engine = GenerationEngine::new(adapter);
//! let config = GenerationConfig::new("SOX", "Financial Reporting").with_item_count(5);
//!
//! let outcome = engine.generate(&config).await.expect("config is valid");
//! if outcome.degraded() {
//!     // surface a soft "using template content" notification
//! }
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod engine;
pub mod prompt;
pub mod provider;

// Re-exports for convenience
pub use engine::{ContentSource, DegradationCause, GenerationEngine, GenerationOutcome};
pub use prompt::{PromptBuilder, MAX_CONTEXT_ITEMS};
pub use provider::{ContentGenerator, ProviderError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the generation engine
    pub use crate::{
        ContentGenerator, ContentSource, GenerationEngine, GenerationOutcome, ProviderError,
    };
    pub use cce_domain::{ControlItem, GenerationConfig};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
