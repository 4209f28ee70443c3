use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::feedback::use_cases::create_feedback::inbound::http as create_http;
use crate::modules::feedback::use_cases::list_feedback::inbound::http as list_http;
use crate::modules::feedback::use_cases::upvote_feedback::inbound::http as upvote_http;
use crate::shell::state::AppState;
use crate::shell::status;

/// Full application router. CORS accepts any origin, method and header.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status::root))
        .route("/health", get(status::health))
        .route(
            "/api/feedback",
            get(list_http::handle).post(create_http::handle),
        )
        .route("/api/feedback/{id}/upvote", post(upvote_http::handle))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
