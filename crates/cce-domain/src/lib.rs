//! CCE Domain - Compliance control domain model
//!
//! Defines the types shared by the generation pipeline:
//! - Generation configuration and its validation
//! - Control enumerations and the validated `ControlItem` record
//! - The untrusted `CandidateItem` mapping produced by parsers
//! - Field alias tables (data, not logic)
//! - The schema normalizer translating candidates into controls
//!
//! Untyped parser output never crosses this crate's boundary: the
//! [`ControlValidator`] is the single chokepoint that turns a
//! [`CandidateItem`] into a fully-populated [`ControlItem`].

pub mod aliases;
pub mod candidate;
pub mod error;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use candidate::CandidateItem;
pub use error::ConfigError;
pub use types::{
    ControlCategory, ControlFrequency, ControlItem, GenerationConfig, TestingStatus,
    DEFAULT_ITEM_COUNT, MAX_ITEM_COUNT, MIN_ITEM_COUNT,
};
pub use validation::{control_code, framework_initials, ControlValidator};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
