//! Framework template tables
//!
//! Immutable lookup from framework name to a fixed set of control
//! templates, built once at first use. Skeleton strings carry `{area}`
//! and `{framework}` markers interpolated at synthesis time.

use cce_domain::{ControlCategory, ControlFrequency};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One fallback control template
///
/// `description`, `testing`, and `evidence` are skeletons; `{area}` and
/// `{framework}` are replaced with the configuration's values when the
/// template is rendered.
#[derive(Debug, Clone, Copy)]
pub struct ControlTemplate {
    /// Control title
    pub title: &'static str,
    /// Description skeleton
    pub description: &'static str,
    /// Control category
    pub category: ControlCategory,
    /// Execution frequency
    pub frequency: ControlFrequency,
    /// Testing procedure skeleton
    pub testing: &'static str,
    /// Evidence requirements skeleton
    pub evidence: &'static str,
}

const ISO_27001: &[ControlTemplate] = &[
    ControlTemplate {
        title: "Access Control Policy Review",
        description: "The access control policy covering {area} is reviewed, updated, and approved in line with {framework} requirements.",
        category: ControlCategory::Directive,
        frequency: ControlFrequency::Quarterly,
        testing: "Inspect the current policy document for {area} and verify review sign-off within the last quarter.",
        evidence: "Approved policy document with review history and sign-off records.",
    },
    ControlTemplate {
        title: "User Access Provisioning",
        description: "Access to {area} systems is granted only through documented requests approved by the information owner.",
        category: ControlCategory::Preventive,
        frequency: ControlFrequency::Continuous,
        testing: "Select a sample of {area} access grants and trace each to an approved request.",
        evidence: "Access request tickets with approvals and provisioning records.",
    },
    ControlTemplate {
        title: "Security Event Log Review",
        description: "Security event logs for {area} systems are reviewed for anomalies and follow-up actions are recorded.",
        category: ControlCategory::Detective,
        frequency: ControlFrequency::Weekly,
        testing: "Inspect log review records for {area} and verify documented follow-up on flagged events.",
        evidence: "Log review checklists and incident follow-up documentation.",
    },
    ControlTemplate {
        title: "Backup Restoration Test",
        description: "Backups supporting {area} are restored to a test environment to confirm recoverability.",
        category: ControlCategory::Corrective,
        frequency: ControlFrequency::Quarterly,
        testing: "Verify the latest restoration test for {area} completed successfully and deviations were remediated.",
        evidence: "Restoration test reports and remediation records.",
    },
];

const SOX: &[ControlTemplate] = &[
    ControlTemplate {
        title: "Journal Entry Approval",
        description: "Manual journal entries affecting {area} require documented approval before posting.",
        category: ControlCategory::Preventive,
        frequency: ControlFrequency::Monthly,
        testing: "Select a sample of {area} journal entries and verify approval preceded posting.",
        evidence: "Approved journal entry forms with supporting documentation.",
    },
    ControlTemplate {
        title: "Account Reconciliation Review",
        description: "Key accounts within {area} are reconciled and independently reviewed each close cycle.",
        category: ControlCategory::Detective,
        frequency: ControlFrequency::Monthly,
        testing: "Inspect reconciliations for {area} accounts and verify reviewer sign-off and item aging.",
        evidence: "Completed reconciliations with preparer and reviewer signatures.",
    },
    ControlTemplate {
        title: "Segregation of Duties Review",
        description: "Conflicting duties within {area} are identified and access is adjusted or mitigated per {framework} requirements.",
        category: ControlCategory::Preventive,
        frequency: ControlFrequency::Quarterly,
        testing: "Review the {area} conflict matrix and verify remediation of identified conflicts.",
        evidence: "Segregation of duties matrix and remediation tracking records.",
    },
    ControlTemplate {
        title: "System Change Approval",
        description: "Changes to systems supporting {area} reporting require documented authorization and testing before release.",
        category: ControlCategory::Preventive,
        frequency: ControlFrequency::AdHoc,
        testing: "Select a sample of changes to {area} systems and trace each to approval and test evidence.",
        evidence: "Change tickets with approvals, test results, and release records.",
    },
];

const GDPR: &[ControlTemplate] = &[
    ControlTemplate {
        title: "Data Subject Request Handling",
        description: "Requests from data subjects concerning {area} data are logged, actioned, and answered within statutory deadlines.",
        category: ControlCategory::Corrective,
        frequency: ControlFrequency::AdHoc,
        testing: "Select a sample of {area} data subject requests and verify timely, documented responses.",
        evidence: "Request log with timestamps, responses, and closure records.",
    },
    ControlTemplate {
        title: "Processing Activity Record Review",
        description: "Records of processing activities for {area} are kept current and reviewed against actual processing.",
        category: ControlCategory::Detective,
        frequency: ControlFrequency::Quarterly,
        testing: "Compare the {area} processing register to deployed systems and verify review sign-off.",
        evidence: "Processing activity register with review history.",
    },
    ControlTemplate {
        title: "Data Retention Enforcement",
        description: "Personal data within {area} is deleted or anonymized once retention periods expire.",
        category: ControlCategory::Preventive,
        frequency: ControlFrequency::Monthly,
        testing: "Verify {area} deletion runs executed on schedule and sample expired records are gone.",
        evidence: "Deletion job logs and retention schedule documentation.",
    },
];

const NIST: &[ControlTemplate] = &[
    ControlTemplate {
        title: "Vulnerability Scan Review",
        description: "Vulnerability scans covering {area} assets are executed and findings are triaged by severity.",
        category: ControlCategory::Detective,
        frequency: ControlFrequency::Weekly,
        testing: "Inspect recent scan reports for {area} and verify documented triage of high findings.",
        evidence: "Scan reports and remediation tracking entries.",
    },
    ControlTemplate {
        title: "Configuration Baseline Enforcement",
        description: "Systems supporting {area} are hardened to approved baselines and drift is corrected.",
        category: ControlCategory::Preventive,
        frequency: ControlFrequency::Monthly,
        testing: "Compare a sample of {area} systems against the approved baseline and verify drift remediation.",
        evidence: "Baseline definitions and configuration compliance reports.",
    },
    ControlTemplate {
        title: "Incident Response Exercise",
        description: "The incident response plan covering {area} is exercised and lessons learned are incorporated.",
        category: ControlCategory::Corrective,
        frequency: ControlFrequency::Annually,
        testing: "Verify the most recent {area} exercise report and closure of identified improvements.",
        evidence: "Exercise reports and updated response procedures.",
    },
];

/// Generic set used for unknown frameworks; must never be empty
pub const DEFAULT_TEMPLATES: &[ControlTemplate] = &[
    ControlTemplate {
        title: "Policy Compliance Review",
        description: "Activities within {area} are reviewed for compliance with {framework} policies and standards.",
        category: ControlCategory::Directive,
        frequency: ControlFrequency::Quarterly,
        testing: "Inspect the latest {area} compliance review and verify findings were tracked to closure.",
        evidence: "Review reports and finding closure records.",
    },
    ControlTemplate {
        title: "Exception Monitoring",
        description: "Exceptions raised within {area} processes are logged, escalated, and resolved.",
        category: ControlCategory::Detective,
        frequency: ControlFrequency::Monthly,
        testing: "Select a sample of {area} exceptions and verify escalation and resolution.",
        evidence: "Exception log with resolution timestamps.",
    },
    ControlTemplate {
        title: "Management Authorization",
        description: "Key {area} transactions require documented management authorization before execution.",
        category: ControlCategory::Preventive,
        frequency: ControlFrequency::AdHoc,
        testing: "Trace a sample of {area} transactions to documented authorization.",
        evidence: "Authorization records with approver identity and date.",
    },
    ControlTemplate {
        title: "Periodic Reconciliation",
        description: "Data maintained within {area} is reconciled to its authoritative source and differences are investigated.",
        category: ControlCategory::Detective,
        frequency: ControlFrequency::Monthly,
        testing: "Inspect {area} reconciliations and verify investigation of unmatched items.",
        evidence: "Reconciliation worksheets and investigation notes.",
    },
];

static TEMPLATE_SETS: Lazy<HashMap<&'static str, &'static [ControlTemplate]>> = Lazy::new(|| {
    HashMap::from([
        ("ISO27001", ISO_27001),
        ("SOX", SOX),
        ("GDPR", GDPR),
        ("NIST", NIST),
    ])
});

/// Template set for a known framework, `None` for anything else
///
/// Matching strips case, whitespace, and punctuation: "iso-27001" and
/// "ISO 27001" resolve to the same set. Unknown frameworks are not an
/// error; callers use [`DEFAULT_TEMPLATES`].
#[must_use]
pub fn lookup(framework: &str) -> Option<&'static [ControlTemplate]> {
    let canonical: String = framework
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    TEMPLATE_SETS.get(canonical.as_str()).copied()
}
