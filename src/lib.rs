//! Project Advisor - AI-assisted project risk and task suggestions
//!
//! Wraps a zero-shot classification API with rule-based risk derivation and an
//! expiring cache of completed analyses.

pub mod advisory;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use advisory::AdvisoryService;
pub use api::AppState;
pub use config::Config;
