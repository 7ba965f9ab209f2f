//! Request DTOs for the advisory server API
//!
//! Defines the structure of incoming HTTP request bodies. Risk analysis takes
//! an [`AdvisoryInput`](crate::advisory::AdvisoryInput) directly.

use serde::Deserialize;

/// Request body for the priority, category and summarize endpoints
///
/// # Fields
/// - `description`: Free-text task or project description
#[derive(Debug, Clone, Deserialize)]
pub struct TextRequest {
    /// Text to classify or summarize
    pub description: String,
}

impl TextRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.description.trim().is_empty() {
            return Some("Description cannot be empty".to_string());
        }
        None
    }
}
