//! Workspace sync: best-effort mirroring of applications into Notion.
//!
//! `NoopSync` refuses every call with `SyncError::NotConfigured`; `NotionSync`
//! talks to the Notion REST API. The backend is picked once at startup and
//! carried in `AppState` as `Arc<dyn WorkspaceSync>`. Callers log and swallow
//! failures: local storage stays the source of truth.

pub mod notion;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{ApplicationStatus, Job};

pub use notion::NotionSync;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Notion integration not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Notion API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Notion response missing field '{0}'")]
    MissingField(&'static str),
}

/// Logs a swallowed sync failure. An unconfigured backend is the normal
/// offline case and only shows at debug level.
pub fn log_failure(action: &str, err: &SyncError) {
    match err {
        SyncError::NotConfigured => debug!("Skipping Notion {action}: {err}"),
        _ => warn!("Failed to {action} in Notion: {err}"),
    }
}

#[async_trait]
pub trait WorkspaceSync: Send + Sync {
    /// Mirrors a new application and returns the external page id.
    async fn create_application_record(
        &self,
        job: &Job,
        status: ApplicationStatus,
        user_id: i64,
    ) -> Result<String, SyncError>;

    async fn update_application_status(
        &self,
        page_id: &str,
        status: ApplicationStatus,
    ) -> Result<(), SyncError>;

    /// Raw external records belonging to one user.
    async fn list_user_records(&self, user_id: i64) -> Result<Vec<Value>, SyncError>;

    fn is_configured(&self) -> bool;
}

pub struct NoopSync;

#[async_trait]
impl WorkspaceSync for NoopSync {
    async fn create_application_record(
        &self,
        _job: &Job,
        _status: ApplicationStatus,
        _user_id: i64,
    ) -> Result<String, SyncError> {
        Err(SyncError::NotConfigured)
    }

    async fn update_application_status(
        &self,
        _page_id: &str,
        _status: ApplicationStatus,
    ) -> Result<(), SyncError> {
        Err(SyncError::NotConfigured)
    }

    async fn list_user_records(&self, _user_id: i64) -> Result<Vec<Value>, SyncError> {
        Err(SyncError::NotConfigured)
    }

    fn is_configured(&self) -> bool {
        false
    }
}
