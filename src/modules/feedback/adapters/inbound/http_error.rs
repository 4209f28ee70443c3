// Maps feedback failures onto HTTP responses with a `{"detail": ...}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::modules::feedback::application::errors::ApplicationError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match &self {
            ApplicationError::Validation(_) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            ApplicationError::NotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            ApplicationError::Repository(e) => {
                error!(error = %e, "feedback repository failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
