use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::modules::feedback::adapters::inbound::http_error::error_response;
use crate::modules::feedback::use_cases::upvote_feedback::command::UpvoteFeedback;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(feedback_id) = match path {
        Ok(p) => p,
        Err(rejection) => {
            debug!(%rejection, "malformed feedback id");
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    match state
        .upvote_handler
        .handle(UpvoteFeedback { feedback_id })
        .await
    {
        Ok(item) => Json(item).into_response(),
        Err(e) => e.into_response(),
    }
}
