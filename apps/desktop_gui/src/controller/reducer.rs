//! Request lifecycle state machine.
//!
//! One request may be in flight at a time. Each submission gets a fresh
//! generation; a settlement is applied only while its generation is the one
//! currently loading, so late or duplicate resolutions fall away instead of
//! clobbering newer state.

use shared::domain::{RecommendationText, RequestGeneration};

/// What the UI currently shows for the recommendation request. Transitions
/// replace the whole value; payloads never accumulate across states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Loading(RequestGeneration),
    Success(RecommendationText),
    Error(String),
}

/// An accepted submission, ready to be queued for the backend worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub query: String,
    pub generation: RequestGeneration,
}

pub struct RequestCoordinator {
    state: RequestState,
    latest_generation: RequestGeneration,
}

impl RequestCoordinator {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            latest_generation: RequestGeneration(0),
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading(_))
    }

    /// Submit gating for the UI: non-blank trimmed text and nothing in flight.
    pub fn can_submit(&self, query: &str) -> bool {
        !query.trim().is_empty() && !self.is_loading()
    }

    /// Starts a new request. Blank queries and submissions while loading are
    /// no-ops that leave the state untouched. On acceptance the previous
    /// Success/Error payload is dropped immediately and the state becomes
    /// Loading under a fresh generation; the returned submission carries the
    /// trimmed query to send.
    pub fn begin_submission(&mut self, query: &str) -> Option<Submission> {
        let trimmed = query.trim();
        if trimmed.is_empty() || self.is_loading() {
            return None;
        }
        let generation = self.latest_generation.next();
        self.latest_generation = generation;
        self.state = RequestState::Loading(generation);
        Some(Submission {
            query: trimmed.to_string(),
            generation,
        })
    }

    /// Settles the in-flight request with recommendation text. Returns false
    /// when the generation does not match the one currently loading.
    pub fn apply_success(
        &mut self,
        generation: RequestGeneration,
        text: RecommendationText,
    ) -> bool {
        if !self.settles_current(generation) {
            return false;
        }
        self.state = RequestState::Success(text);
        true
    }

    /// Settles the in-flight request with an error message. Returns false
    /// when the generation does not match the one currently loading.
    pub fn apply_failure(&mut self, generation: RequestGeneration, message: String) -> bool {
        if !self.settles_current(generation) {
            return false;
        }
        self.state = RequestState::Error(message);
        true
    }

    fn settles_current(&self, generation: RequestGeneration) -> bool {
        matches!(self.state, RequestState::Loading(current) if current == generation)
    }
}

impl Default for RequestCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let coordinator = RequestCoordinator::new();
        assert_eq!(*coordinator.state(), RequestState::Idle);
        assert!(!coordinator.is_loading());
    }

    #[test]
    fn blank_query_never_submits() {
        let mut coordinator = RequestCoordinator::new();
        assert!(!coordinator.can_submit(""));
        assert!(!coordinator.can_submit("   \n\t"));
        assert!(coordinator.begin_submission("").is_none());
        assert!(coordinator.begin_submission("   \n\t").is_none());
        assert_eq!(*coordinator.state(), RequestState::Idle);
    }

    #[test]
    fn submission_carries_trimmed_query_and_fresh_generation() {
        let mut coordinator = RequestCoordinator::new();
        let submission = coordinator
            .begin_submission("  Family-friendly adventure movies  ")
            .expect("accepted");

        assert_eq!(submission.query, "Family-friendly adventure movies");
        assert_eq!(submission.generation, RequestGeneration(1));
        assert_eq!(
            *coordinator.state(),
            RequestState::Loading(RequestGeneration(1))
        );
    }

    #[test]
    fn loading_blocks_further_submissions() {
        let mut coordinator = RequestCoordinator::new();
        coordinator.begin_submission("first").expect("accepted");

        assert!(!coordinator.can_submit("second"));
        assert!(coordinator.begin_submission("second").is_none());
        assert_eq!(
            *coordinator.state(),
            RequestState::Loading(RequestGeneration(1))
        );
    }

    #[test]
    fn matching_settlement_reaches_success() {
        let mut coordinator = RequestCoordinator::new();
        let submission = coordinator.begin_submission("thrillers").expect("accepted");

        assert!(coordinator.apply_success(
            submission.generation,
            RecommendationText::new("1. Inception\n2. Memento"),
        ));
        assert_eq!(
            *coordinator.state(),
            RequestState::Success(RecommendationText::new("1. Inception\n2. Memento"))
        );
    }

    #[test]
    fn matching_settlement_reaches_error() {
        let mut coordinator = RequestCoordinator::new();
        let submission = coordinator.begin_submission("thrillers").expect("accepted");

        assert!(coordinator.apply_failure(submission.generation, "Query too vague".to_string()));
        assert_eq!(
            *coordinator.state(),
            RequestState::Error("Query too vague".to_string())
        );
    }

    #[test]
    fn stale_settlement_is_discarded() {
        let mut coordinator = RequestCoordinator::new();
        let first = coordinator.begin_submission("first").expect("accepted");
        assert!(coordinator.apply_failure(first.generation, "timeout".to_string()));

        let second = coordinator.begin_submission("second").expect("accepted");
        assert!(!coordinator.apply_success(first.generation, RecommendationText::new("late")));
        assert_eq!(*coordinator.state(), RequestState::Loading(second.generation));
    }

    #[test]
    fn duplicate_settlement_is_discarded() {
        let mut coordinator = RequestCoordinator::new();
        let submission = coordinator.begin_submission("comedy").expect("accepted");

        assert!(coordinator.apply_success(submission.generation, RecommendationText::new("A")));
        assert!(!coordinator.apply_failure(submission.generation, "late duplicate".to_string()));
        assert_eq!(
            *coordinator.state(),
            RequestState::Success(RecommendationText::new("A"))
        );
    }

    #[test]
    fn settlement_without_submission_is_discarded() {
        let mut coordinator = RequestCoordinator::new();
        assert!(!coordinator.apply_success(RequestGeneration(1), RecommendationText::new("A")));
        assert_eq!(*coordinator.state(), RequestState::Idle);
    }

    #[test]
    fn error_then_success_leaves_only_the_success_payload() {
        let mut coordinator = RequestCoordinator::new();
        let first = coordinator.begin_submission("first").expect("accepted");
        coordinator.apply_failure(first.generation, "Failed to get recommendations".to_string());

        let second = coordinator.begin_submission("second").expect("accepted");
        coordinator.apply_success(second.generation, RecommendationText::new("1. Parasite"));

        assert_eq!(
            *coordinator.state(),
            RequestState::Success(RecommendationText::new("1. Parasite"))
        );
    }

    #[test]
    fn resubmission_from_success_drops_payload_immediately() {
        let mut coordinator = RequestCoordinator::new();
        let first = coordinator.begin_submission("first").expect("accepted");
        coordinator.apply_success(first.generation, RecommendationText::new("1. Up"));

        let second = coordinator.begin_submission("second").expect("accepted");
        assert_eq!(second.generation, RequestGeneration(2));
        assert_eq!(*coordinator.state(), RequestState::Loading(second.generation));
    }

    #[test]
    fn resubmission_from_error_drops_message_immediately() {
        let mut coordinator = RequestCoordinator::new();
        let first = coordinator.begin_submission("first").expect("accepted");
        coordinator.apply_failure(first.generation, "boom".to_string());

        let second = coordinator.begin_submission("second").expect("accepted");
        assert_eq!(*coordinator.state(), RequestState::Loading(second.generation));
    }
}
