//! Advisory Module
//!
//! AI-assisted project risk analysis and task metadata suggestions, backed by a
//! zero-shot classification API.

pub mod classifier;
pub mod labels;
pub mod risk;
pub mod service;

pub use classifier::{Classification, Classifier, HuggingFaceClient, Summarizer};
pub use labels::{RiskLevel, CATEGORY_LABELS, PRIORITY_LABELS, RISK_LABELS};
pub use risk::{AdvisoryInput, RiskAdvisory, TaskSnapshot};
pub use service::{AdvisoryService, RiskCache};
