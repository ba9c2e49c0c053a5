//! Error types for the generation pipeline
//!
//! Only configuration errors cross the pipeline boundary as hard
//! failures; provider and parsing failures degrade to the fallback
//! synthesizer instead.

/// Invalid caller-supplied configuration
///
/// Indicates a caller bug, not a provider/parsing failure, so it is
/// surfaced loudly rather than masked by the fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Framework was empty or blank
    #[error("missing framework")]
    MissingFramework,

    /// Process area was empty or blank
    #[error("missing process area")]
    MissingProcessArea,
}
