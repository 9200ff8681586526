pub mod application;
pub mod chat;
pub mod job;
pub mod user;
pub mod views;

pub use application::{
    Application, ApplicationPatch, ApplicationStatus, NewApplication, StatusStage,
};
pub use chat::{ChatMessage, ChatRole, NewChatMessage};
pub use job::{Job, JobPatch, NewJob};
pub use user::{NewUser, PublicUser, User};
pub use views::{ApplicationWithJob, DashboardStats, JobDetail, JobWithStatus};
