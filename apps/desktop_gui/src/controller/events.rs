//! Events flowing from the backend worker to the UI.

use shared::domain::{RecommendationText, RequestGeneration};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    RecommendationsReady {
        generation: RequestGeneration,
        text: RecommendationText,
    },
    RecommendationsFailed {
        generation: RequestGeneration,
        message: String,
    },
}
