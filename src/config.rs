//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;

const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_CLASSIFICATION_MODEL: &str = "facebook/bart-large-mnli";
const DEFAULT_SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime of cached risk analyses, in seconds
    pub cache_ttl: u64,
    /// Base URL of the inference API models endpoint
    pub inference_base_url: String,
    /// Bearer token for the inference API
    pub api_token: Option<String>,
    /// Zero-shot classification model id
    pub classification_model: String,
    /// Summarization model id
    pub summarization_model: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - Risk analysis cache TTL in seconds (default: 1800)
    /// - `HUGGING_FACE_API_URL` - Inference API base URL
    /// - `HUGGING_FACE_TOKEN` - Inference API token (default: unset)
    /// - `CLASSIFICATION_MODEL` - Zero-shot model (default: facebook/bart-large-mnli)
    /// - `SUMMARIZATION_MODEL` - Summarization model (default: facebook/bart-large-cnn)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            inference_base_url: env::var("HUGGING_FACE_API_URL")
                .unwrap_or(defaults.inference_base_url),
            api_token: env::var("HUGGING_FACE_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            classification_model: env::var("CLASSIFICATION_MODEL")
                .unwrap_or(defaults.classification_model),
            summarization_model: env::var("SUMMARIZATION_MODEL")
                .unwrap_or(defaults.summarization_model),
        }
    }

    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: DEFAULT_TTL_SECS,
            inference_base_url: DEFAULT_INFERENCE_URL.to_string(),
            api_token: None,
            classification_model: DEFAULT_CLASSIFICATION_MODEL.to_string(),
            summarization_model: DEFAULT_SUMMARIZATION_MODEL.to_string(),
        }
    }
}
