use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::{JobDetail, JobWithStatus};
use crate::routes::extract::{CurrentUser, IdPath};
use crate::state::AppState;

/// GET /api/jobs
///
/// Every job, newest first, with the caller's application status attached.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<Vec<JobWithStatus>> {
    Json(state.storage.get_jobs_with_status(user.id).await)
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    user: CurrentUser,
    IdPath(job_id): IdPath,
) -> Result<Json<JobDetail>, AppError> {
    let job = state
        .storage
        .get_job(job_id)
        .await
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let application = state
        .storage
        .get_application_by_user_and_job(user.id, job_id)
        .await;

    Ok(Json(JobDetail::new(job, application.as_ref())))
}
