pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::matching::handlers as matching;
use crate::session::handlers as sessions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions & admin
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_end_session),
        )
        .route(
            "/api/v1/sessions/:id/requirements",
            put(sessions::handle_save_requirements),
        )
        // Matching
        .route(
            "/api/v1/sessions/:id/score",
            post(matching::handle_score_upload),
        )
        .route("/api/v1/score", post(matching::handle_score_text))
        .route("/api/v1/keywords", post(matching::handle_keywords))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
