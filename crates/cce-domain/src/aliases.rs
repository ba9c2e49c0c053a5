//! Field alias tables
//!
//! Provider responses label fields inconsistently ("title", "name",
//! "control", ...). These tables are the single source of truth for which
//! labels map to which control fields; both the schema normalizer and the
//! structured-text extraction strategy resolve against them.
//!
//! All entries are lowercase. [`CandidateItem`](crate::CandidateItem)
//! lowercases keys on insertion, so lookups stay a plain equality scan.

/// Labels that map to the control title
pub const TITLE: &[&str] = &["title", "name", "control", "control_name", "controlname"];

/// Labels that map to the description
pub const DESCRIPTION: &[&str] = &["description", "desc", "purpose", "objective"];

/// Labels that map to the category
pub const CATEGORY: &[&str] = &["type", "control_type", "controltype", "category"];

/// Labels that map to the frequency
pub const FREQUENCY: &[&str] = &["frequency", "freq"];

/// Labels that map to the testing procedure
pub const TESTING_PROCEDURE: &[&str] = &[
    "testing",
    "test",
    "procedure",
    "testing_procedure",
    "testingprocedure",
    "test_procedure",
];

/// Labels that map to the evidence requirements
pub const EVIDENCE: &[&str] = &[
    "evidence",
    "documentation",
    "evidence_requirements",
    "evidencerequirements",
];

/// Labels that map to the control code
pub const CODE: &[&str] = &["code", "control_code", "controlcode", "id"];

/// Labels that map to the automated flag
pub const AUTOMATED: &[&str] = &["automated", "automation", "is_automated", "isautomated"];

/// Labels that map to the process area
pub const PROCESS_AREA: &[&str] = &["process_area", "processarea", "area", "process"];

/// Marker phrases of an off-topic provider response
///
/// A response containing any of these answered a different question than
/// asked (audit scoping instead of control generation); the parser skips
/// every extraction tier and lets the orchestrator fall back immediately.
pub const OFF_TOPIC_MARKERS: &[&str] = &[
    "purpose of this audit",
    "scope of this audit",
    "assessment of",
    "examination of",
];
