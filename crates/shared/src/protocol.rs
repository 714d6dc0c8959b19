//! Wire types for the recommendation endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub query: String,
}

/// Success body of `POST /api/recommendations`. The field is optional so a
/// 2xx body without it decodes cleanly and can be rejected by the caller
/// instead of failing mid-deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub recommendations: Option<String>,
}

/// Error body of `POST /api/recommendations`. Backends are not required to
/// send it, so every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
