//! Axum route handlers for the Job Posting API.

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::job_postings::models::{JobPostingPayload, JobPostingResponse};
use crate::job_postings::validation::validate;
use crate::state::AppState;

/// POST /api/job-postings
///
/// The body is read raw and parsed here so that any unparseable body maps to
/// the fixed "Invalid JSON payload" message regardless of content type.
/// Only a JSON object is accepted; arrays would otherwise fill fields by position.
pub async fn handle_create_job_posting(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<JobPostingResponse>), AppError> {
    let fields: Map<String, Value> =
        serde_json::from_slice(&body).map_err(AppError::MalformedPayload)?;
    let payload: JobPostingPayload =
        serde_json::from_value(Value::Object(fields)).map_err(AppError::MalformedPayload)?;

    let posting = validate(payload)?;
    let record = state.job_postings.insert(posting).await?;

    info!(
        job_id = record.job_id,
        company = %record.posting.company_name,
        "Job posting created"
    );

    Ok((
        StatusCode::CREATED,
        Json(JobPostingResponse::created(record.job_id)),
    ))
}
