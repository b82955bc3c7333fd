//! Job posting handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use sea_orm::DbErr;

use crate::api::AppState;
use crate::config::{CTX_POST_JOB, MSG_JOB_POSTED};
use crate::domain::{Job, NewJob};
use crate::errors::{AppError, AppResult};
use crate::types::MessageResponse;

/// Create job routes
pub fn job_routes() -> Router<AppState> {
    Router::new().route("/jobs", get(list_jobs).post(post_job))
}

/// Post a job
#[utoipa::path(
    post,
    path = "/jobs",
    tag = "Jobs",
    request_body = NewJob,
    responses(
        (status = 201, description = "Job posted", body = MessageResponse),
        (status = 400, description = "Body is not JSON"),
        (status = 500, description = "Store error, including values that cannot be cast to a job field")
    )
)]
pub async fn post_job(
    State(state): State<AppState>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let new_job = decode_job(payload)?;
    state.job_service.post_job(new_job).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(MSG_JOB_POSTED))))
}

/// Well-formed JSON whose values don't fit the job fields is a failed
/// write, not a bad request.
fn decode_job(payload: Result<Json<NewJob>, JsonRejection>) -> AppResult<NewJob> {
    match payload {
        Ok(Json(new_job)) => Ok(new_job),
        Err(JsonRejection::JsonDataError(e)) => Err(AppError::Store {
            context: CTX_POST_JOB,
            source: DbErr::Type(e.body_text()),
        }),
        Err(e) => Err(AppError::validation(e.body_text())),
    }
}

/// List every job
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "Jobs",
    responses(
        (status = 200, description = "All job postings", body = [Job]),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_jobs(State(state): State<AppState>) -> AppResult<Json<Vec<Job>>> {
    let jobs = state.job_service.list_jobs().await?;
    Ok(Json(jobs))
}
