//! Candidate label sets and the risk level they map to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AdvisoryError;

/// Labels offered to the classifier for project risk.
pub const RISK_LABELS: [&str; 3] = ["high risk", "medium risk", "low risk"];

/// Labels offered to the classifier for task priority.
pub const PRIORITY_LABELS: [&str; 3] = ["high priority", "medium priority", "low priority"];

/// Labels offered to the classifier for task category.
pub const CATEGORY_LABELS: [&str; 5] = [
    "development",
    "design",
    "testing",
    "documentation",
    "planning",
];

// == Risk Level ==
/// Overall project risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Maps a classifier label such as `"medium risk"` to a risk level.
    ///
    /// Matching ignores surrounding whitespace and ASCII case. Any label outside
    /// [`RISK_LABELS`] is rejected.
    pub fn from_label(label: &str) -> Result<Self, AdvisoryError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "high risk" => Ok(RiskLevel::High),
            "medium risk" => Ok(RiskLevel::Medium),
            "low risk" => Ok(RiskLevel::Low),
            _ => Err(AdvisoryError::UnrecognizedLabel(label.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `label` if it is one of `candidates`, compared case-insensitively.
///
/// The canonical candidate spelling is returned.
pub fn match_candidate(label: &str, candidates: &[&str]) -> Result<String, AdvisoryError> {
    let wanted = label.trim();
    candidates
        .iter()
        .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
        .map(|candidate| candidate.to_string())
        .ok_or_else(|| AdvisoryError::UnrecognizedLabel(label.to_string()))
}
