pub mod applications;
pub mod chat;
pub mod extract;
pub mod health;
pub mod jobs;
pub mod users;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/me", get(users::handle_me))
        .route("/api/dashboard", get(users::handle_dashboard))
        // Jobs
        .route("/api/jobs", get(jobs::handle_list_jobs))
        .route("/api/jobs/:id", get(jobs::handle_get_job))
        // Applications
        .route(
            "/api/applications",
            get(applications::handle_list_applications)
                .post(applications::handle_create_application),
        )
        .route(
            "/api/applications/external",
            get(applications::handle_external_applications),
        )
        .route(
            "/api/applications/:id",
            get(applications::handle_get_application),
        )
        .route(
            "/api/applications/:id/status",
            patch(applications::handle_update_status),
        )
        // Assistant
        .route(
            "/api/chat",
            get(chat::handle_chat_history).post(chat::handle_send_message),
        )
        .route(
            "/api/assistant/job-suggestions",
            post(chat::handle_job_suggestions),
        )
        .with_state(state)
}
