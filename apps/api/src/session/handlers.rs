//! Axum route handlers for session lifecycle and the admin requirements save.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::keywords::KeywordSet;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveRequirementsRequest {
    pub password: String,
    pub job_requirements: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub configured: bool,
    pub job_requirements: String,
    pub requirement_keywords: KeywordSet,
    pub created_at: DateTime<Utc>,
    pub requirements_updated_at: Option<DateTime<Utc>>,
}

impl SessionResponse {
    fn from_session(session: Session, state: &AppState) -> Self {
        let requirement_keywords = state.normalizer.normalize(&session.job_requirements);
        Self {
            session_id: session.id,
            configured: session.is_configured(),
            job_requirements: session.job_requirements,
            requirement_keywords,
            created_at: session.created_at,
            requirements_updated_at: session.requirements_updated_at,
        }
    }
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let session = state.sessions.create().await?;
    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::from_session(session, &state)),
    ))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionResponse::from_session(session, &state)))
}

/// PUT /api/v1/sessions/:id/requirements
///
/// Replaces the session's job requirements. A wrong password leaves the session untouched.
pub async fn handle_save_requirements(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SaveRequirementsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    if !state.verifier.verify(&request.password) {
        warn!(session_id = %id, "Rejected requirements save: incorrect admin password");
        return Err(AppError::Unauthorized);
    }

    let session = state
        .sessions
        .set_requirements(id, request.job_requirements)
        .await?;
    Ok(Json(SessionResponse::from_session(session, &state)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
