//! Testing utilities for the CCE workspace
//!
//! Shared configuration fixtures, control builders, and canned provider
//! payloads exercising each extraction tier.

#![allow(missing_docs)]

use cce_domain::{
    ControlCategory, ControlFrequency, ControlItem, GenerationConfig, TestingStatus,
};

/// A typical SOX configuration requesting three controls
pub fn sample_config() -> GenerationConfig {
    GenerationConfig::new("SOX", "Financial Reporting").with_item_count(3)
}

/// A fully-populated control with the given title
pub fn control(title: &str) -> ControlItem {
    ControlItem {
        code: "SOX-900".to_string(),
        title: title.to_string(),
        description: format!("{title} (pre-existing)"),
        category: ControlCategory::Preventive,
        frequency: ControlFrequency::Monthly,
        process_area: "Financial Reporting".to_string(),
        testing_procedure: "Manual testing required".to_string(),
        evidence_requirements: "Supporting documentation and review records".to_string(),
        automated: false,
        status: TestingStatus::NotTested,
    }
}

/// Well-formed provider response: a bare JSON array (tier 1)
pub fn array_response() -> String {
    serde_json::json!([
        {
            "title": "Journal Entry Approval",
            "description": "Manual journal entries require documented approval before posting",
            "control_type": "preventive",
            "frequency": "monthly",
            "testing_procedure": "Sample entries and trace to approvals",
            "evidence_requirements": "Approved journal entry forms",
            "automated": false
        },
        {
            "title": "Reconciliation Review",
            "control_type": "detective",
            "frequency": "monthly"
        }
    ])
    .to_string()
}

/// The same array wrapped in chatty prose and a markdown fence (tier 1)
pub fn fenced_array_response() -> String {
    format!(
        "Certainly! Here are the controls you asked for:\n\n```json\n{}\n```\n\nLet me know if you need more.",
        array_response()
    )
}

/// Objects scattered through prose with one corrupt block (tier 2)
pub fn prose_with_objects_response() -> String {
    concat!(
        "The first control is {\"title\": \"Access Recertification\", \"frequency\": \"quarterly\"}.\n",
        "Next we have {\"title\": broken}.\n",
        "Finally {\"title\": \"Change Ticket Review\", \"control_type\": \"detective\"}.\n",
    )
    .to_string()
}

/// Labeled numbered-list response with no JSON at all (tier 3)
pub fn numbered_list_response() -> String {
    concat!(
        "Here are the generated controls:\n\n",
        "1. Title: Vendor Invoice Matching\n",
        "   Description: Invoices are matched to purchase orders before payment\n",
        "   Type: preventive\n",
        "   Frequency: weekly\n",
        "   Testing: Sample invoices and verify three-way match\n\n",
        "2. Title: Payment Run Review\n",
        "   Description: Automated comparison of payment runs against approved batches\n",
        "   Frequency: monthly\n",
    )
    .to_string()
}

/// Off-topic response that still embeds a perfectly valid array
///
/// The embedded array must NOT be extracted; the marker phrase wins.
pub fn off_topic_response() -> String {
    concat!(
        "The scope of this audit covers financial reporting systems. ",
        "Key areas: [{\"title\": \"Should never surface\"}]. ",
        "The assessment of these systems will follow."
    )
    .to_string()
}

/// Response no tier can use
pub fn garbage_response() -> String {
    "asdf qwer zxcv".to_string()
}
