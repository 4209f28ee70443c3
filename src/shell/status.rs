// Root and health endpoints.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::shell::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub feedback_count: usize,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Tiny Feedback Board API",
        status: "running",
        endpoints: BTreeMap::from([
            ("GET /api/feedback", "List all feedback"),
            ("POST /api/feedback", "Create new feedback"),
            ("POST /api/feedback/{id}/upvote", "Upvote feedback"),
        ]),
    })
}

pub async fn health(State(state): State<AppState>) -> Response {
    match state.list_handler.count().await {
        Ok(feedback_count) => Json(HealthResponse {
            status: "healthy",
            feedback_count,
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
