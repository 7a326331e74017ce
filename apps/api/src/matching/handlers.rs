//! Axum route handlers for the Matching API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract, DocumentFormat, RawDocument};
use crate::matching::keywords::KeywordSet;
use crate::matching::report::MatchReport;
use crate::state::AppState;

/// Multipart field carrying the resume.
const FILE_FIELD: &str = "file";

const EMPTY_TEXT_WARNING: &str =
    "No text could be extracted from the document. Scanned or image-only PDFs have no text layer.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScoreUploadResponse {
    pub session_id: Uuid,
    pub file_name: String,
    pub format: DocumentFormat,
    /// Extracted resume content, echoed back for display.
    pub resume_text: String,
    #[serde(flatten)]
    pub report: MatchReport,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreTextRequest {
    pub resume_text: String,
    pub job_requirements: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreTextResponse {
    #[serde(flatten)]
    pub report: MatchReport,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub count: usize,
    pub keywords: KeywordSet,
}

struct Upload {
    file_name: String,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/score
///
/// Full pipeline: upload → extract → normalize → score against the session's requirements.
/// Any extraction failure aborts the request; no partial score is returned.
pub async fn handle_score_upload(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ScoreUploadResponse>, AppError> {
    let session = state.sessions.get(session_id).await?;
    if !session.is_configured() {
        info!(%session_id, "Scoring skipped: requirements not configured");
        return Err(AppError::RequirementsNotConfigured);
    }

    let upload = read_upload(&mut multipart).await?;
    let doc = RawDocument::from_upload(&upload.file_name, upload.bytes)?;
    let format = doc.format;
    let max_inflated_bytes = state.config.max_inflated_bytes;

    // PDF and DOCX parsing is CPU-bound; keep it off the async workers.
    let resume_text = tokio::task::spawn_blocking(move || extract(doc, max_inflated_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))??;

    let mut warnings = Vec::new();
    if resume_text.trim().is_empty() {
        warn!(%session_id, file_name = %upload.file_name, "Document produced no extractable text");
        warnings.push(EMPTY_TEXT_WARNING.to_string());
    }

    let resume_keywords = state.normalizer.normalize(&resume_text);
    let requirement_keywords = state.normalizer.normalize(&session.job_requirements);
    let report = MatchReport::build(state.scorer.as_ref(), &resume_keywords, &requirement_keywords);

    info!(
        %session_id,
        file_name = %upload.file_name,
        %format,
        score = report.score,
        matched = report.matching_keywords.len(),
        required = report.requirement_keyword_count,
        "Resume scored"
    );

    Ok(Json(ScoreUploadResponse {
        session_id,
        file_name: upload.file_name,
        format,
        resume_text,
        report,
        warnings,
    }))
}

/// POST /api/v1/score
///
/// Stateless scoring of two raw strings. Useful for previews and integrations.
pub async fn handle_score_text(
    State(state): State<AppState>,
    Json(request): Json<ScoreTextRequest>,
) -> Result<Json<ScoreTextResponse>, AppError> {
    if request.job_requirements.trim().is_empty() {
        return Err(AppError::Validation(
            "job_requirements cannot be empty".to_string(),
        ));
    }

    let resume_keywords = state.normalizer.normalize(&request.resume_text);
    let requirement_keywords = state.normalizer.normalize(&request.job_requirements);
    let report = MatchReport::build(state.scorer.as_ref(), &resume_keywords, &requirement_keywords);

    Ok(Json(ScoreTextResponse { report }))
}

/// POST /api/v1/keywords
///
/// Returns the normalized keyword set for a piece of text.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Json<KeywordsResponse> {
    let keywords = state.normalizer.normalize(&request.text);
    Json(KeywordsResponse {
        count: keywords.len(),
        keywords,
    })
}

/// Reads the first multipart field named `file`.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no file name".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;

        return Ok(Upload { file_name, bytes });
    }

    Err(AppError::Validation(format!(
        "No '{FILE_FIELD}' field in upload"
    )))
}
