//! Project risk derivation
//!
//! Deterministic rules that turn a project snapshot into a classifier prompt,
//! a list of risk factors and level-specific mitigation advice.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advisory::labels::RiskLevel;

/// Namespace prefix for cached risk analyses.
pub const CACHE_KEY_PREFIX: &str = "risk-analysis-";

/// Status value that marks a task as done.
pub const COMPLETED_STATUS: &str = "completed";

/// Completion rate below which progress is flagged.
pub const LOW_COMPLETION_THRESHOLD: f64 = 0.3;
/// Days until deadline below which the deadline is flagged.
pub const APPROACHING_DEADLINE_DAYS: i64 = 7;
/// Task count above which the project is flagged as large.
pub const HIGH_TASK_COUNT: usize = 20;

pub const LOW_COMPLETION_FACTOR: &str = "Low task completion rate";
pub const APPROACHING_DEADLINE_FACTOR: &str = "Approaching deadline";
pub const HIGH_TASK_COUNT_FACTOR: &str = "High number of tasks";

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

const HIGH_RISK_SUGGESTIONS: &[&str] = &[
    "Consider breaking down complex tasks into smaller, manageable pieces",
    "Schedule daily progress reviews",
    "Allocate additional resources to critical path tasks",
    "Establish contingency plans for high-risk areas",
];

const MEDIUM_RISK_SUGGESTIONS: &[&str] = &[
    "Review task dependencies and optimize workflow",
    "Implement regular checkpoints for task progress",
    "Identify potential bottlenecks early",
];

const LOW_RISK_SUGGESTIONS: &[&str] = &[
    "Maintain current project management practices",
    "Continue monitoring progress regularly",
    "Document successful strategies for future reference",
];

// == Input ==

/// Read-only view of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub description: String,
    pub status: String,
}

impl TaskSnapshot {
    pub fn new(description: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: status.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED_STATUS
    }
}

/// Project snapshot submitted for risk analysis.
///
/// Field order is part of the cache key and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryInput {
    pub description: String,
    /// ISO 8601 date or date-time
    #[serde(alias = "dueDate")]
    pub deadline: String,
    #[serde(default)]
    pub tasks: Vec<TaskSnapshot>,
}

impl AdvisoryInput {
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Share of completed tasks, or `None` when there are no tasks.
    pub fn completion_rate(&self) -> Option<f64> {
        if self.tasks.is_empty() {
            return None;
        }
        Some(self.completed_count() as f64 / self.tasks.len() as f64)
    }

    /// Cache key: namespace prefix plus the JSON encoding of the whole input.
    pub fn cache_key(&self) -> Result<String, serde_json::Error> {
        Ok(format!("{}{}", CACHE_KEY_PREFIX, serde_json::to_string(self)?))
    }

    /// Text submitted to the classifier.
    pub fn summary(&self) -> String {
        let descriptions: Vec<&str> = self
            .tasks
            .iter()
            .map(|task| task.description.as_str())
            .collect();

        format!(
            "Project Description: {}\nDeadline: {}\nNumber of Tasks: {}\nCompleted Tasks: {}\nTask Descriptions: {}",
            self.description,
            self.deadline,
            self.tasks.len(),
            self.completed_count(),
            descriptions.join(". ")
        )
    }
}

// == Result ==

/// Structured risk advice for one project snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAdvisory {
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub mitigation_suggestions: Vec<String>,
}

impl RiskAdvisory {
    /// Combines a classified level with the rule-based factors for `input`.
    pub fn derive(input: &AdvisoryInput, risk_level: RiskLevel, now: DateTime<Utc>) -> Self {
        Self {
            risk_level,
            risk_factors: risk_factors(input, now),
            mitigation_suggestions: mitigation_suggestions(risk_level),
        }
    }
}

// == Rules ==

/// Parses a deadline in RFC 3339, naive date-time or plain date form.
///
/// Naive values are taken as UTC; a plain date means midnight UTC.
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Whole days until `deadline`, rounded up. Negative once the deadline has passed.
pub fn days_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (deadline - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Rule-based risk drivers. Independent of the classifier's verdict.
///
/// An empty task list skips the completion check and an unparseable deadline
/// skips the deadline check.
pub fn risk_factors(input: &AdvisoryInput, now: DateTime<Utc>) -> Vec<String> {
    let mut factors = Vec::new();

    match input.completion_rate() {
        Some(rate) if rate < LOW_COMPLETION_THRESHOLD => {
            factors.push(LOW_COMPLETION_FACTOR.to_string());
        }
        Some(_) => {}
        None => tracing::debug!("No tasks, skipping completion rate check"),
    }

    match parse_deadline(&input.deadline) {
        Some(deadline) if days_until(deadline, now) < APPROACHING_DEADLINE_DAYS => {
            factors.push(APPROACHING_DEADLINE_FACTOR.to_string());
        }
        Some(_) => {}
        None => tracing::debug!(deadline = %input.deadline, "Unparseable deadline, skipping deadline check"),
    }

    if input.tasks.len() > HIGH_TASK_COUNT {
        factors.push(HIGH_TASK_COUNT_FACTOR.to_string());
    }

    factors
}

/// Fixed advice for each risk level.
pub fn mitigation_suggestions(level: RiskLevel) -> Vec<String> {
    let table = match level {
        RiskLevel::High => HIGH_RISK_SUGGESTIONS,
        RiskLevel::Medium => MEDIUM_RISK_SUGGESTIONS,
        RiskLevel::Low => LOW_RISK_SUGGESTIONS,
    };
    table.iter().map(|s| s.to_string()).collect()
}
