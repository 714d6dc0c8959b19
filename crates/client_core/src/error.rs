use reqwest::StatusCode;
use thiserror::Error;

/// Shown when the service gives us nothing better to show.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to get recommendations";

/// Failure modes of a recommendation fetch. `user_message` is the only text
/// that reaches the screen; everything else stays in logs.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The request never produced an HTTP response.
    #[error("failed to reach recommendation service")]
    Transport(#[source] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("recommendation service rejected the query with status {status}")]
    Service {
        status: StatusCode,
        detail: Option<String>,
    },
    /// The service answered 2xx but the body was not usable.
    #[error("recommendation service returned an unusable success body: {reason}")]
    MalformedResponse { reason: String },
}

impl RecommendError {
    /// Message to display to the user. Only a service-provided `detail` is
    /// surfaced verbatim; transport and decode failures collapse to the
    /// fallback so internals never leak into the UI.
    pub fn user_message(&self) -> String {
        match self {
            RecommendError::Service {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}
