//! HTTP client for the CinemaMatch recommendation backend.
//!
//! One endpoint, `POST /api/recommendations`, turns a free-text query into
//! recommendation text. The client classifies every outcome into
//! [`RecommendError`] so callers never have to inspect reqwest errors or
//! status codes themselves.

use reqwest::Client;
use shared::{
    domain::RecommendationText,
    protocol::{RecommendationRequest, RecommendationResponse, ServiceErrorBody},
};
use tracing::debug;

pub mod config;
pub mod error;

pub use config::{load_config, resolve_base_url, ClientConfig, API_URL_ENV_VAR, DEFAULT_API_URL};
pub use error::{RecommendError, FALLBACK_ERROR_MESSAGE};

pub struct RecommendationClient {
    http: Client,
    base_url: String,
}

impl RecommendationClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one query and settles it into text or a classified error.
    ///
    /// The query is forwarded exactly as given. A non-success status becomes
    /// [`RecommendError::Service`], keeping the backend's `detail` when one
    /// decodes; a success body without a string `recommendations` field
    /// becomes [`RecommendError::MalformedResponse`]. An empty string is a
    /// valid success.
    pub async fn fetch_recommendations(
        &self,
        query: &str,
    ) -> Result<RecommendationText, RecommendError> {
        let response = self
            .http
            .post(format!("{}/api/recommendations", self.base_url))
            .json(&RecommendationRequest {
                query: query.to_string(),
            })
            .send()
            .await
            .map_err(RecommendError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ServiceErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            debug!(status = %status, has_detail = detail.is_some(), "recommendation request rejected");
            return Err(RecommendError::Service { status, detail });
        }

        let body = response
            .json::<RecommendationResponse>()
            .await
            .map_err(|err| RecommendError::MalformedResponse {
                reason: err.to_string(),
            })?;
        match body.recommendations {
            Some(text) => Ok(RecommendationText::new(text)),
            None => Err(RecommendError::MalformedResponse {
                reason: "missing `recommendations` field".to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
