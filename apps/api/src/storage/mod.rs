//! Data access layer.
//!
//! `Storage` is the only contract the HTTP layer depends on. `AppState` carries
//! an `Arc<dyn Storage>`; `MemStorage` is the volatile in-process implementation.

pub mod arena;
pub mod memory;
pub mod seed;
pub mod views;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Application, ApplicationPatch, ApplicationWithJob, ChatMessage, DashboardStats, Job, JobPatch,
    JobWithStatus, NewApplication, NewChatMessage, NewJob, NewUser, User,
};

pub use memory::MemStorage;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Job {0} not found")]
    JobNotFound(i64),

    #[error("You have already applied to this job")]
    DuplicateApplication { existing_id: i64 },

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    /// An application points at a job that no longer exists. Data-integrity fault.
    #[error("Application {application_id} references missing job {job_id}")]
    DanglingJob { application_id: i64, job_id: i64 },
}

/// Create/read/update/delete per entity plus the derived views.
///
/// Lookups of unknown ids return `None`/`false`; only integrity violations are errors.
#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn get_user(&self, id: i64) -> Option<User>;
    async fn get_user_by_username(&self, username: &str) -> Option<User>;
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    // Jobs
    async fn get_jobs(&self) -> Vec<Job>;
    async fn get_job(&self, id: i64) -> Option<Job>;
    async fn create_job(&self, job: NewJob) -> Job;
    async fn update_job(&self, id: i64, patch: JobPatch) -> Option<Job>;
    async fn delete_job(&self, id: i64) -> bool;

    // Applications
    async fn get_applications(&self, user_id: i64)
        -> Result<Vec<ApplicationWithJob>, StorageError>;
    async fn get_application(&self, id: i64) -> Option<Application>;
    async fn get_application_by_user_and_job(
        &self,
        user_id: i64,
        job_id: i64,
    ) -> Option<Application>;
    async fn create_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, StorageError>;
    async fn update_application(&self, id: i64, patch: ApplicationPatch) -> Option<Application>;
    async fn delete_application(&self, id: i64) -> bool;

    // Derived views
    async fn get_jobs_with_status(&self, user_id: i64) -> Vec<JobWithStatus>;
    async fn get_dashboard_stats(&self, user_id: i64) -> DashboardStats;

    // Chat
    async fn get_chat_messages(&self, user_id: i64) -> Vec<ChatMessage>;
    async fn create_chat_message(&self, message: NewChatMessage) -> ChatMessage;
}
