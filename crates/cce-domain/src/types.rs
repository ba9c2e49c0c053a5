//! Core types for control generation
//!
//! Defines the fundamental types of the pipeline:
//! - Generation configuration (caller-constructed, immutable per call)
//! - Control enumerations with their wire tokens
//! - The validated control record

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Minimum items per generation batch
pub const MIN_ITEM_COUNT: usize = 1;

/// Maximum items per generation batch
pub const MAX_ITEM_COUNT: usize = 20;

/// Default items per generation batch
pub const DEFAULT_ITEM_COUNT: usize = 5;

/// Control category (wire tokens: lowercase variant names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlCategory {
    /// Stops an issue before it occurs
    Preventive,
    /// Surfaces an issue after it occurs
    Detective,
    /// Remediates a detected issue
    Corrective,
    /// Mandates behavior through policy
    Directive,
}

impl ControlCategory {
    /// Parse a wire token (case-sensitive exact match)
    ///
    /// Anything other than an exact token returns `None`; callers
    /// substitute the documented default instead of failing.
    #[must_use]
    pub fn parse_exact(token: &str) -> Option<Self> {
        match token {
            "preventive" => Some(Self::Preventive),
            "detective" => Some(Self::Detective),
            "corrective" => Some(Self::Corrective),
            "directive" => Some(Self::Directive),
            _ => None,
        }
    }

    /// Wire token for this category
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preventive => "preventive",
            Self::Detective => "detective",
            Self::Corrective => "corrective",
            Self::Directive => "directive",
        }
    }
}

impl Default for ControlCategory {
    fn default() -> Self {
        Self::Preventive
    }
}

impl std::fmt::Display for ControlCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Control execution frequency (wire tokens: lowercase variant names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlFrequency {
    /// Always-on monitoring
    Continuous,
    /// Daily
    Daily,
    /// Weekly
    Weekly,
    /// Monthly
    Monthly,
    /// Quarterly
    Quarterly,
    /// Annually
    Annually,
    /// On demand
    AdHoc,
}

impl ControlFrequency {
    /// Parse a wire token (case-sensitive exact match)
    #[must_use]
    pub fn parse_exact(token: &str) -> Option<Self> {
        match token {
            "continuous" => Some(Self::Continuous),
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "annually" => Some(Self::Annually),
            "adhoc" => Some(Self::AdHoc),
            _ => None,
        }
    }

    /// Wire token for this frequency
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
            Self::AdHoc => "adhoc",
        }
    }
}

impl Default for ControlFrequency {
    fn default() -> Self {
        Self::Monthly
    }
}

impl std::fmt::Display for ControlFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Testing status of a control
///
/// Generated controls always start as `NotTested`; effectiveness is
/// asserted by later audit workflows, never by the generation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestingStatus {
    /// Not yet tested (initial state)
    NotTested,
    /// Tested and operating effectively
    Effective,
    /// Tested and found ineffective
    Ineffective,
    /// Tested, works with reservations
    NeedsImprovement,
}

impl Default for TestingStatus {
    fn default() -> Self {
        Self::NotTested
    }
}

/// Validated control record
///
/// Every field is populated; enum fields hold in-range values and string
/// fields are non-empty. Produced only by
/// [`ControlValidator`](crate::ControlValidator) and
/// the fallback synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlItem {
    /// Control code, `{FRAMEWORK_INITIALS}-{NNN}`
    pub code: String,
    /// Short control title
    pub title: String,
    /// What the control does and why
    pub description: String,
    /// Control category
    pub category: ControlCategory,
    /// Execution frequency
    pub frequency: ControlFrequency,
    /// Business process area the control belongs to
    pub process_area: String,
    /// How the control is tested
    pub testing_procedure: String,
    /// Evidence an auditor collects
    pub evidence_requirements: String,
    /// Whether execution is automated
    pub automated: bool,
    /// Testing status (always `NotTested` on emission)
    pub status: TestingStatus,
}

/// Generation configuration (one orchestration call)
///
/// Constructed by the caller, validated once at the start of generation,
/// then treated as immutable context for the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Compliance framework ("ISO 27001", "SOX", "NIST", "Custom", ...)
    pub framework: String,
    /// Business process area to generate controls for
    pub process_area: String,
    /// Requested item count, clamped to `[MIN_ITEM_COUNT, MAX_ITEM_COUNT]`
    pub item_count: usize,
    /// Non-exclusive focus tags woven into the prompt
    pub focus_areas: Vec<String>,
    /// Whether to ask the provider for automated controls
    pub include_automated: bool,
    /// Previously-created controls, used as dedupe/context hints only
    pub existing_items: Vec<ControlItem>,
}

impl GenerationConfig {
    /// Create a configuration with the documented defaults
    #[inline]
    #[must_use]
    pub fn new(framework: impl Into<String>, process_area: impl Into<String>) -> Self {
        Self {
            framework: framework.into(),
            process_area: process_area.into(),
            item_count: DEFAULT_ITEM_COUNT,
            focus_areas: Vec::new(),
            include_automated: false,
            existing_items: Vec::new(),
        }
    }

    /// With requested item count (clamped later, not here)
    #[inline]
    #[must_use]
    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }

    /// With focus area tags
    #[inline]
    #[must_use]
    pub fn with_focus_areas(mut self, areas: Vec<String>) -> Self {
        self.focus_areas = areas;
        self
    }

    /// With the automated-controls flag
    #[inline]
    #[must_use]
    pub fn with_automated(mut self, include: bool) -> Self {
        self.include_automated = include;
        self
    }

    /// With previously-created controls as dedupe context
    #[inline]
    #[must_use]
    pub fn with_existing_items(mut self, items: Vec<ControlItem>) -> Self {
        self.existing_items = items;
        self
    }

    /// Validate caller-supplied fields
    ///
    /// A blank framework or process area is a caller bug and the one hard
    /// failure of the pipeline. Out-of-range item counts are NOT an error;
    /// they are silently clamped by [`Self::clamped_item_count`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.framework.trim().is_empty() {
            return Err(ConfigError::MissingFramework);
        }
        if self.process_area.trim().is_empty() {
            return Err(ConfigError::MissingProcessArea);
        }
        Ok(())
    }

    /// Item count clamped to the documented bounds
    #[inline]
    #[must_use]
    pub fn clamped_item_count(&self) -> usize {
        self.item_count.clamp(MIN_ITEM_COUNT, MAX_ITEM_COUNT)
    }
}
