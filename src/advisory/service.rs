//! Advisory Service
//!
//! Risk analysis, priority prediction, category suggestion and description
//! summaries. Risk analyses are memoized in an [`ExpiringCache`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::advisory::classifier::{Classifier, HuggingFaceClient, Summarizer};
use crate::advisory::labels::{
    match_candidate, RiskLevel, CATEGORY_LABELS, PRIORITY_LABELS, RISK_LABELS,
};
use crate::advisory::risk::{AdvisoryInput, RiskAdvisory};
use crate::cache::{Clock, ExpiringCache};
use crate::error::AdvisoryError;

/// Cache of completed risk analyses, keyed by serialized input.
pub type RiskCache = ExpiringCache<Arc<RiskAdvisory>>;

// == Advisory Service ==
/// Front door for every AI-assisted suggestion.
pub struct AdvisoryService {
    classifier: Arc<dyn Classifier>,
    summarizer: Arc<dyn Summarizer>,
    cache: Arc<RiskCache>,
}

impl AdvisoryService {
    /// Creates a service over the given backends and cache.
    pub fn new(
        classifier: Arc<dyn Classifier>,
        summarizer: Arc<dyn Summarizer>,
        cache: Arc<RiskCache>,
    ) -> Self {
        Self {
            classifier,
            summarizer,
            cache,
        }
    }

    /// Creates a service that classifies and summarizes through one client.
    pub fn with_client(client: Arc<HuggingFaceClient>, cache: Arc<RiskCache>) -> Self {
        Self::new(client.clone(), client, cache)
    }

    /// The risk analysis cache.
    pub fn cache(&self) -> &RiskCache {
        &self.cache
    }

    // == Risk Analysis ==
    /// Analyzes project risk, serving repeated inputs from the cache.
    ///
    /// A cached result is returned as-is even if the project has changed since,
    /// as long as the submitted snapshot is identical. Failures are not cached.
    pub async fn analyze_project_risks(
        &self,
        input: &AdvisoryInput,
    ) -> Result<Arc<RiskAdvisory>, AdvisoryError> {
        let key = input.cache_key()?;

        if let Some(cached) = self.cache.get(&key) {
            debug!("Risk analysis served from cache");
            return Ok(cached);
        }

        info!(tasks = input.tasks.len(), "Requesting risk classification");
        let classification = self
            .classifier
            .classify(&input.summary(), &RISK_LABELS)
            .await
            .inspect_err(|e| warn!(error = %e, "Risk classification failed"))?;
        let risk_level = RiskLevel::from_label(classification.top_label()?)?;

        let now = self.cache.clock().now();
        let advisory = Arc::new(RiskAdvisory::derive(input, risk_level, now));
        self.cache.set(key, Arc::clone(&advisory));

        info!(
            risk_level = %advisory.risk_level,
            factors = advisory.risk_factors.len(),
            "Risk analysis complete"
        );
        Ok(advisory)
    }

    // == Priority ==
    /// Predicts a task's priority from its description. Never cached.
    pub async fn predict_task_priority(&self, description: &str) -> Result<String, AdvisoryError> {
        self.top_candidate(description, &PRIORITY_LABELS).await
    }

    // == Category ==
    /// Suggests a category for a task from its description. Never cached.
    pub async fn suggest_task_category(&self, description: &str) -> Result<String, AdvisoryError> {
        self.top_candidate(description, &CATEGORY_LABELS).await
    }

    // == Summary ==
    /// Summarizes a long description.
    pub async fn summarize_description(&self, description: &str) -> Result<String, AdvisoryError> {
        self.summarizer
            .summarize(description)
            .await
            .inspect_err(|e| warn!(error = %e, "Summarization failed"))
    }

    async fn top_candidate(
        &self,
        text: &str,
        candidates: &[&str],
    ) -> Result<String, AdvisoryError> {
        let classification = self
            .classifier
            .classify(text, candidates)
            .await
            .inspect_err(|e| warn!(error = %e, "Classification failed"))?;
        match_candidate(classification.top_label()?, candidates)
    }
}

impl std::fmt::Debug for AdvisoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryService")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
