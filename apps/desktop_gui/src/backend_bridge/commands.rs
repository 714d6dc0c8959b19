//! Backend commands queued from UI to backend worker.

use shared::domain::RequestGeneration;

#[derive(Debug)]
pub enum BackendCommand {
    FetchRecommendations {
        query: String,
        generation: RequestGeneration,
    },
}
