//! Axum route handlers for the compatibility engine.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::scoring::MatchResult;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::state::AppState;

/// Request body for compatibility analysis. The top-level objects are
/// `Option` so absence is reported as `MissingInput` with the field named,
/// rather than as an opaque deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub job_data: Option<JobPosting>,
    pub persona_data: Option<CandidateProfile>,
}

/// POST /api/v1/match/analyze
///
/// Scores a candidate profile against a job posting. No partial results:
/// both inputs must be present before the engine runs.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let job = request
        .job_data
        .ok_or_else(|| AppError::MissingInput("jobData is required".to_string()))?;
    let candidate = request
        .persona_data
        .ok_or_else(|| AppError::MissingInput("personaData is required".to_string()))?;

    let result = state.scorer.analyze(&job, &candidate);
    info!(
        "Compatibility analysis: {}/100 for '{}'",
        result.score, job.title
    );

    Ok(Json(result))
}
