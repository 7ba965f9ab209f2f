//! API Module
//!
//! HTTP handlers and routing for the advisory server REST API.
//!
//! # Endpoints
//! - `POST /api/ai/risk-analysis` - Analyze project risk (cached)
//! - `POST /api/ai/priority` - Predict a task's priority
//! - `POST /api/ai/category` - Suggest a task's category
//! - `POST /api/ai/summarize` - Summarize a description
//! - `GET /api/ai/cache/stats` - Get risk analysis cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
