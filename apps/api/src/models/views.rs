//! Read-only projections returned by the API. Built per request, never stored.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Application, ApplicationStatus, Job};

/// A job as seen by one user: bare job plus that user's application state, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobWithStatus {
    #[serde(flatten)]
    pub job: Job,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<DateTime<Utc>>,
}

/// Job detail page payload: the job plus a link to the user's application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_status: Option<ApplicationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<i64>,
}

impl JobDetail {
    pub fn new(job: Job, application: Option<&Application>) -> Self {
        Self {
            job,
            application_status: application.map(|a| a.status),
            application_id: application.map(|a| a.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationWithJob {
    #[serde(flatten)]
    pub application: Application,
    pub job: Job,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_applications: usize,
    pub interview_invites: usize,
    pub in_progress: usize,
    pub rejected: usize,
}
