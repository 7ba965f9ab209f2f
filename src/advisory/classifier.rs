//! Inference API client
//!
//! Zero-shot classification and summarization over the Hugging Face inference API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::error::AdvisoryError;

/// Maximum summary length passed to the summarization model.
pub const SUMMARY_MAX_LENGTH: u32 = 50;
/// Minimum summary length passed to the summarization model.
pub const SUMMARY_MIN_LENGTH: u32 = 10;

// == Wire Types ==

#[derive(Debug, Serialize)]
struct InferenceRequest<'a, P> {
    inputs: &'a str,
    parameters: P,
}

#[derive(Debug, Serialize)]
struct ClassificationParameters<'a> {
    candidate_labels: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct SummarizationParameters {
    max_length: u32,
    min_length: u32,
}

#[derive(Debug, Deserialize)]
struct SummaryEntry {
    summary_text: String,
}

/// Ranked output of a zero-shot classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Candidate labels, highest confidence first
    pub labels: Vec<String>,
    /// Scores aligned with `labels`
    #[serde(default)]
    pub scores: Vec<f64>,
}

impl Classification {
    /// Returns the highest ranked label.
    pub fn top_label(&self) -> Result<&str, AdvisoryError> {
        self.labels
            .first()
            .map(String::as_str)
            .ok_or_else(|| AdvisoryError::MalformedResponse("no labels returned".to_string()))
    }
}

// == Traits ==

/// Ranks a fixed set of candidate labels against free text.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<Classification, AdvisoryError>;
}

/// Produces a short summary of free text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, AdvisoryError>;
}

// == Hugging Face Client ==
/// Client for the hosted inference API.
pub struct HuggingFaceClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    classification_model: String,
    summarization_model: String,
}

impl HuggingFaceClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Models endpoint, e.g. "https://api-inference.huggingface.co/models"
    /// * `api_token` - Bearer token; requests are sent unauthenticated when `None`
    /// * `classification_model` - Zero-shot model, e.g. "facebook/bart-large-mnli"
    /// * `summarization_model` - Summarization model, e.g. "facebook/bart-large-cnn"
    pub fn new(
        base_url: impl Into<String>,
        api_token: Option<String>,
        classification_model: impl Into<String>,
        summarization_model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token,
            classification_model: classification_model.into(),
            summarization_model: summarization_model.into(),
        }
    }

    /// Build a client from server configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            config.inference_base_url.clone(),
            config.api_token.clone(),
            config.classification_model.clone(),
            config.summarization_model.clone(),
        )
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model)
    }

    async fn post<B: Serialize + Sync, R: DeserializeOwned + Send>(
        &self,
        model: &str,
        body: &B,
    ) -> Result<R, AdvisoryError> {
        let url = self.model_url(model);
        debug!(%url, "Calling inference API");

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AdvisoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl Classifier for HuggingFaceClient {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<Classification, AdvisoryError> {
        let request = InferenceRequest {
            inputs: text,
            parameters: ClassificationParameters { candidate_labels },
        };
        self.post(&self.classification_model, &request).await
    }
}

#[async_trait]
impl Summarizer for HuggingFaceClient {
    async fn summarize(&self, text: &str) -> Result<String, AdvisoryError> {
        let request = InferenceRequest {
            inputs: text,
            parameters: SummarizationParameters {
                max_length: SUMMARY_MAX_LENGTH,
                min_length: SUMMARY_MIN_LENGTH,
            },
        };
        let summaries: Vec<SummaryEntry> = self.post(&self.summarization_model, &request).await?;

        summaries
            .into_iter()
            .next()
            .map(|entry| entry.summary_text)
            .ok_or_else(|| AdvisoryError::MalformedResponse("no summary returned".to_string()))
    }
}

impl std::fmt::Debug for HuggingFaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.api_token.is_some())
            .field("classification_model", &self.classification_model)
            .field("summarization_model", &self.summarization_model)
            .finish()
    }
}
