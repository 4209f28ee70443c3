use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.list_handler.handle().await {
        Ok(items) => Json(items).into_response(),
        Err(e) => e.into_response(),
    }
}
