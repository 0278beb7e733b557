//! Classifier API Client
//!
//! HTTP client for the remote classification service.
//! One POST per check, no retries, no caching. No request timeout is
//! configured either: a hung service stalls that check and nothing else.

use thiserror::Error;

use super::types::{EmailPredictRequest, PredictResponse, UrlPredictRequest, Verdict};
use crate::constants;

/// Classifier call errors
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("network error: {0}")]
    Network(String),

    #[error("classifier returned status {0}")]
    Status(u16),

    #[error("invalid classifier response: {0}")]
    Decode(String),
}

/// Classifier API client
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    base_url: String,
    http: reqwest::Client,
}

impl ClassifierClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from environment configuration
    pub fn from_env() -> Self {
        Self::new(constants::get_api_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classify a URL via POST /predict/url
    pub async fn classify_url(&self, url: &str) -> Result<Verdict, ClassifyError> {
        let request = UrlPredictRequest {
            url: url.to_string(),
        };
        self.predict("/predict/url", &request).await
    }

    /// Classify an email blob via POST /predict/email
    pub async fn classify_email(&self, email_text: &str) -> Result<Verdict, ClassifyError> {
        let request = EmailPredictRequest {
            email_text: email_text.to_string(),
        };
        self.predict("/predict/email", &request).await
    }

    async fn predict<T: serde::Serialize>(
        &self,
        path: &str,
        request: &T,
    ) -> Result<Verdict, ClassifyError> {
        let endpoint = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ClassifyError::Network(e.to_string()))?;

        if response.status().is_success() {
            let body: PredictResponse = response
                .json()
                .await
                .map_err(|e| ClassifyError::Decode(e.to_string()))?;
            Ok(Verdict::from(body))
        } else {
            Err(ClassifyError::Status(response.status().as_u16()))
        }
    }
}
