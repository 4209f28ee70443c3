// Application state wired with in memory adapters, for inbound adapter tests.

use crate::modules::feedback::adapters::outbound::feedback_repository_in_memory::InMemoryFeedbackRepository;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryFeedbackRepository::new()))
}

pub fn make_offline_state() -> AppState {
    let mut repository = InMemoryFeedbackRepository::new();
    repository.toggle_offline();
    AppState::new(Arc::new(repository))
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
