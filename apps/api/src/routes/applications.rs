use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::{AppError, FieldError};
use crate::models::{
    Application, ApplicationPatch, ApplicationStatus, ApplicationWithJob, NewApplication,
};
use crate::routes::extract::{CurrentUser, IdPath, ValidJson};
use crate::state::AppState;
use crate::sync::{self, SyncError};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub job_id: Option<i64>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ValidatedApplication {
    pub job_id: i64,
    pub status: ApplicationStatus,
    pub notes: String,
}

impl CreateApplicationRequest {
    pub fn validate(self) -> Result<ValidatedApplication, AppError> {
        let mut errors = Vec::new();

        let job_id = match self.job_id {
            Some(id) if id > 0 => id,
            Some(_) => {
                errors.push(FieldError::new("jobId", "Must be a positive integer"));
                0
            }
            None => {
                errors.push(FieldError::new("jobId", "Required"));
                0
            }
        };

        let status = match self.status.as_deref() {
            None => ApplicationStatus::default(),
            Some(raw) => raw.parse::<ApplicationStatus>().unwrap_or_else(|e| {
                errors.push(FieldError::new("status", e.to_string()));
                ApplicationStatus::default()
            }),
        };

        if !errors.is_empty() {
            return Err(AppError::validation("Invalid application data", errors));
        }

        Ok(ValidatedApplication {
            job_id,
            status,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

impl UpdateStatusRequest {
    pub fn validate(self) -> Result<ApplicationStatus, AppError> {
        let raw = self.status.ok_or_else(|| {
            AppError::validation("Invalid status", vec![FieldError::new("status", "Required")])
        })?;
        raw.parse::<ApplicationStatus>().map_err(|e| {
            AppError::validation("Invalid status", vec![FieldError::new("status", e.to_string())])
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<ApplicationWithJob>>, AppError> {
    Ok(Json(state.storage.get_applications(user.id).await?))
}

/// GET /api/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    user: CurrentUser,
    IdPath(application_id): IdPath,
) -> Result<Json<ApplicationWithJob>, AppError> {
    let application = state
        .storage
        .get_application(application_id)
        .await
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    if application.user_id != user.id {
        return Err(AppError::Forbidden(
            "Not authorized to view this application".to_string(),
        ));
    }

    let job = state
        .storage
        .get_job(application.job_id)
        .await
        .ok_or_else(|| AppError::NotFound("Associated job not found".to_string()))?;

    Ok(Json(ApplicationWithJob { application, job }))
}

/// POST /api/applications
///
/// Pre-checks duplicate and job existence before touching the workspace mirror,
/// then inserts. The store re-checks both under its write lock.
pub async fn handle_create_application(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidJson(request): ValidJson<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let input = request.validate()?;

    if let Some(existing) = state
        .storage
        .get_application_by_user_and_job(user.id, input.job_id)
        .await
    {
        return Err(AppError::Conflict {
            message: "You have already applied to this job".to_string(),
            application_id: existing.id,
        });
    }

    let job = state
        .storage
        .get_job(input.job_id)
        .await
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

    let notion_page_id = match state
        .sync
        .create_application_record(&job, input.status, user.id)
        .await
    {
        Ok(page_id) => page_id,
        Err(e) => {
            sync::log_failure("create application entry", &e);
            String::new()
        }
    };

    let mut new_application = NewApplication::new(user.id, job.id)
        .with_status(input.status)
        .with_notes(input.notes);
    new_application.notion_page_id = notion_page_id;

    let application = state.storage.create_application(new_application).await?;
    info!(
        "User {} applied to job {} (application {})",
        user.id, job.id, application.id
    );

    Ok((StatusCode::CREATED, Json(application)))
}

/// PATCH /api/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    user: CurrentUser,
    IdPath(application_id): IdPath,
    ValidJson(request): ValidJson<UpdateStatusRequest>,
) -> Result<Json<Application>, AppError> {
    let status = request.validate()?;

    let application = state
        .storage
        .get_application(application_id)
        .await
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    if application.user_id != user.id {
        return Err(AppError::Forbidden(
            "Not authorized to update this application".to_string(),
        ));
    }

    let updated = state
        .storage
        .update_application(application_id, ApplicationPatch::status(status))
        .await
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    if !application.notion_page_id.is_empty() {
        if let Err(e) = state
            .sync
            .update_application_status(&application.notion_page_id, status)
            .await
        {
            sync::log_failure("update application status", &e);
        }
    }

    info!(
        "Application {application_id} moved from '{}' to '{status}'",
        application.status
    );
    Ok(Json(updated))
}

/// GET /api/applications/external
///
/// The caller's records as stored in the workspace tool.
pub async fn handle_external_applications(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Value>>, AppError> {
    match state.sync.list_user_records(user.id).await {
        Ok(records) => Ok(Json(records)),
        Err(SyncError::NotConfigured) => Err(AppError::Unavailable(
            SyncError::NotConfigured.to_string(),
        )),
        Err(e) => {
            sync::log_failure("retrieve applications", &e);
            Err(AppError::Unavailable(
                "Failed to retrieve applications from Notion".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(job_id: Option<i64>, status: Option<&str>) -> CreateApplicationRequest {
        CreateApplicationRequest {
            job_id,
            status: status.map(str::to_string),
            notes: None,
        }
    }

    #[test]
    fn test_create_defaults_status_and_notes() {
        let input = request(Some(3), None).validate().unwrap();
        assert_eq!(
            input,
            ValidatedApplication {
                job_id: 3,
                status: ApplicationStatus::Applied,
                notes: String::new(),
            }
        );
    }

    #[test]
    fn test_create_collects_every_field_error() {
        match request(None, Some("Ghosted")).validate() {
            Err(AppError::Validation { errors, .. }) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["jobId", "status"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_rejects_non_positive_job_id() {
        assert!(matches!(
            request(Some(0), None).validate(),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_update_status_requires_known_status() {
        let ok = UpdateStatusRequest {
            status: Some("Final Interview".to_string()),
        };
        assert_eq!(ok.validate().unwrap(), ApplicationStatus::FinalInterview);

        let missing = UpdateStatusRequest { status: None };
        assert!(matches!(missing.validate(), Err(AppError::Validation { .. })));

        let bad = UpdateStatusRequest {
            status: Some("interview".to_string()),
        };
        assert!(matches!(bad.validate(), Err(AppError::Validation { .. })));
    }
}
