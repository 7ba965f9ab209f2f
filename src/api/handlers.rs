//! API Handlers
//!
//! HTTP request handlers for each advisory endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::advisory::{AdvisoryInput, AdvisoryService, HuggingFaceClient, RiskAdvisory, RiskCache};
use crate::error::{ApiError, Result};
use crate::models::responses::{
    CATEGORY_FAILED, PRIORITY_FAILED, RISK_ANALYSIS_FAILED, SUMMARY_FAILED,
};
use crate::models::{AdvisoryResponse, HealthResponse, StatsResponse, TextRequest};

/// Application state shared across all handlers.
///
/// Holds the one advisory service (and through it, the one risk cache) built
/// at startup.
#[derive(Clone)]
pub struct AppState {
    /// Advisory service shared by every request
    pub advisor: Arc<AdvisoryService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(advisor: AdvisoryService) -> Self {
        Self {
            advisor: Arc::new(advisor),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the inference client and a risk cache with the configured TTL.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let client = Arc::new(HuggingFaceClient::from_config(config));
        let cache = Arc::new(RiskCache::new(config.cache_ttl()));
        Self::new(AdvisoryService::with_client(client, cache))
    }
}

/// Handler for POST /api/ai/risk-analysis
///
/// Returns the risk advisory for a project snapshot.
pub async fn risk_analysis_handler(
    State(state): State<AppState>,
    Json(input): Json<AdvisoryInput>,
) -> Result<Json<AdvisoryResponse<RiskAdvisory>>> {
    let advisory = state
        .advisor
        .analyze_project_risks(&input)
        .await
        .map_err(|e| ApiError::advisory(RISK_ANALYSIS_FAILED, e))?;

    Ok(Json(AdvisoryResponse::success(advisory.as_ref().clone())))
}

/// Handler for POST /api/ai/priority
///
/// Returns the predicted priority label for a task description.
pub async fn priority_handler(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<AdvisoryResponse<String>>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let priority = state
        .advisor
        .predict_task_priority(&req.description)
        .await
        .map_err(|e| ApiError::advisory(PRIORITY_FAILED, e))?;

    Ok(Json(AdvisoryResponse::success(priority)))
}

/// Handler for POST /api/ai/category
///
/// Returns the suggested category label for a task description.
pub async fn category_handler(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<AdvisoryResponse<String>>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let category = state
        .advisor
        .suggest_task_category(&req.description)
        .await
        .map_err(|e| ApiError::advisory(CATEGORY_FAILED, e))?;

    Ok(Json(AdvisoryResponse::success(category)))
}

/// Handler for POST /api/ai/summarize
pub async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<Json<AdvisoryResponse<String>>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let summary = state
        .advisor
        .summarize_description(&req.description)
        .await
        .map_err(|e| ApiError::advisory(SUMMARY_FAILED, e))?;

    Ok(Json(AdvisoryResponse::success(summary)))
}

/// Handler for GET /api/ai/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.advisor.cache();
    Json(StatsResponse::new(&cache.stats(), cache.ttl().as_secs()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
