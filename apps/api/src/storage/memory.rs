use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{
    Application, ApplicationPatch, ApplicationWithJob, ChatMessage, DashboardStats, Job, JobPatch,
    JobWithStatus, NewApplication, NewChatMessage, NewJob, NewUser, User,
};
use crate::storage::arena::Arena;
use crate::storage::{views, Storage, StorageError};

#[derive(Default)]
struct Tables {
    users: Arena<User>,
    jobs: Arena<Job>,
    applications: Arena<Application>,
    chat_messages: Arena<ChatMessage>,
}

/// Volatile store: four arenas behind a single lock.
///
/// Every trait method takes the lock exactly once, so check-then-insert
/// sequences such as `create_application` are atomic.
#[derive(Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: i64) -> Option<User> {
        self.tables.read().await.users.get(id).cloned()
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StorageError::UsernameTaken(user.username));
        }
        Ok(tables.users.insert_with(|id| User {
            id,
            username: user.username,
            password: user.password,
            name: user.name,
            email: user.email,
        }))
    }

    async fn get_jobs(&self) -> Vec<Job> {
        views::jobs_newest_first(self.tables.read().await.jobs.values())
    }

    async fn get_job(&self, id: i64) -> Option<Job> {
        self.tables.read().await.jobs.get(id).cloned()
    }

    async fn create_job(&self, job: NewJob) -> Job {
        self.tables
            .write()
            .await
            .jobs
            .insert_with(|id| job.into_job(id))
    }

    async fn update_job(&self, id: i64, patch: JobPatch) -> Option<Job> {
        let mut tables = self.tables.write().await;
        let job = tables.jobs.get_mut(id)?;
        patch.apply(job);
        Some(job.clone())
    }

    async fn delete_job(&self, id: i64) -> bool {
        self.tables.write().await.jobs.remove(id).is_some()
    }

    async fn get_applications(
        &self,
        user_id: i64,
    ) -> Result<Vec<ApplicationWithJob>, StorageError> {
        let tables = self.tables.read().await;
        views::applications_with_job(
            tables.applications.values(),
            |job_id| tables.jobs.get(job_id),
            user_id,
        )
    }

    async fn get_application(&self, id: i64) -> Option<Application> {
        self.tables.read().await.applications.get(id).cloned()
    }

    async fn get_application_by_user_and_job(
        &self,
        user_id: i64,
        job_id: i64,
    ) -> Option<Application> {
        self.tables
            .read()
            .await
            .applications
            .values()
            .find(|a| a.user_id == user_id && a.job_id == job_id)
            .cloned()
    }

    async fn create_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, StorageError> {
        let mut tables = self.tables.write().await;

        if !tables.jobs.contains(application.job_id) {
            return Err(StorageError::JobNotFound(application.job_id));
        }
        if let Some(existing) = tables
            .applications
            .values()
            .find(|a| a.user_id == application.user_id && a.job_id == application.job_id)
        {
            return Err(StorageError::DuplicateApplication {
                existing_id: existing.id,
            });
        }

        Ok(tables
            .applications
            .insert_with(|id| application.into_application(id)))
    }

    async fn update_application(&self, id: i64, patch: ApplicationPatch) -> Option<Application> {
        let mut tables = self.tables.write().await;
        let application = tables.applications.get_mut(id)?;
        patch.apply(application, Utc::now());
        Some(application.clone())
    }

    async fn delete_application(&self, id: i64) -> bool {
        self.tables.write().await.applications.remove(id).is_some()
    }

    async fn get_jobs_with_status(&self, user_id: i64) -> Vec<JobWithStatus> {
        let tables = self.tables.read().await;
        views::jobs_with_status(tables.jobs.values(), tables.applications.values(), user_id)
    }

    async fn get_dashboard_stats(&self, user_id: i64) -> DashboardStats {
        views::dashboard_stats(self.tables.read().await.applications.values(), user_id)
    }

    async fn get_chat_messages(&self, user_id: i64) -> Vec<ChatMessage> {
        let tables = self.tables.read().await;
        let mut messages: Vec<ChatMessage> = tables
            .chat_messages
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        messages
    }

    async fn create_chat_message(&self, message: NewChatMessage) -> ChatMessage {
        self.tables
            .write()
            .await
            .chat_messages
            .insert_with(|id| message.into_message(id))
    }
}
