//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use project_advisor::advisory::{Classification, Classifier, RiskCache, Summarizer};
use project_advisor::cache::{ManualClock, DEFAULT_TTL_SECS};
use project_advisor::error::AdvisoryError;
use project_advisor::{AdvisoryService, AppState};

/// Classifier that answers every request with one label, or with HTTP 500.
pub struct CountingClassifier {
    top_label: Option<String>,
    calls: AtomicUsize,
}

impl CountingClassifier {
    pub fn answering(label: &str) -> Arc<Self> {
        Arc::new(Self {
            top_label: Some(label.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            top_label: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for CountingClassifier {
    async fn classify(
        &self,
        _text: &str,
        candidate_labels: &[&str],
    ) -> Result<Classification, AdvisoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.top_label {
            Some(label) => {
                let mut labels = vec![label.clone()];
                labels.extend(
                    candidate_labels
                        .iter()
                        .filter(|candidate| **candidate != label.as_str())
                        .map(|candidate| candidate.to_string()),
                );
                let scores = (0..labels.len()).map(|i| 1.0 / (i + 2) as f64).collect();
                Ok(Classification { labels, scores })
            }
            None => Err(AdvisoryError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            }),
        }
    }
}

#[async_trait]
impl Summarizer for CountingClassifier {
    async fn summarize(&self, _text: &str) -> Result<String, AdvisoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.top_label.clone().ok_or(AdvisoryError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        })
    }
}

/// App state over a stub backend and a manually driven clock.
pub fn stub_state(backend: Arc<CountingClassifier>) -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap(),
    ));
    let cache = Arc::new(RiskCache::with_clock(
        Duration::from_secs(DEFAULT_TTL_SECS),
        clock.clone(),
    ));
    let service = AdvisoryService::new(backend.clone(), backend, cache);
    (AppState::new(service), clock)
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
