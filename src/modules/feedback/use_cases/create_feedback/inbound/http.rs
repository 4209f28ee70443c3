use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::modules::feedback::adapters::inbound::http_error::error_response;
use crate::modules::feedback::use_cases::create_feedback::command::CreateFeedback;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateFeedbackBody {
    pub text: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateFeedbackBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            debug!(%rejection, "malformed create feedback body");
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = CreateFeedback {
        text: body.text,
        created_at: Utc::now().timestamp(),
    };

    match state.create_handler.handle(command).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => e.into_response(),
    }
}
