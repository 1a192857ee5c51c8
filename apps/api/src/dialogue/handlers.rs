//! Axum route handlers for the dialogue engine.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dialogue::{intent, responder};
use crate::errors::AppError;
use crate::models::candidate::CandidateProfile;
use crate::models::conversation::ConversationTurn;
use crate::models::job::JobPosting;

/// Request body for a dialogue turn. `conversationHistory` defaults to empty —
/// it is part of the wire contract but does not affect the response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondRequest {
    pub job_data: Option<JobPosting>,
    pub persona_data: Option<CandidateProfile>,
    pub question: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub response: String,
}

/// POST /api/v1/interview/respond
///
/// Classifies the question's intent and returns one templated response.
/// Stateless — the caller owns and appends to the transcript.
pub async fn handle_respond(
    Json(request): Json<RespondRequest>,
) -> Result<Json<RespondResponse>, AppError> {
    let job = request
        .job_data
        .ok_or_else(|| AppError::MissingInput("jobData is required".to_string()))?;
    let candidate = request
        .persona_data
        .ok_or_else(|| AppError::MissingInput("personaData is required".to_string()))?;
    let question = request
        .question
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::MissingInput("question is required".to_string()))?;

    let intent = intent::classify(&question);
    let mut rng = rand::thread_rng();
    let response = responder::generate(
        intent,
        &job,
        &candidate,
        &request.conversation_history,
        &mut rng,
    );
    info!("Dialogue turn: {intent:?} intent for '{}'", job.title);

    Ok(Json(RespondResponse { response }))
}
