use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::{DashboardStats, PublicUser};
use crate::routes::extract::CurrentUser;
use crate::state::AppState;

/// GET /api/me
pub async fn handle_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<PublicUser>, AppError> {
    let user = state
        .storage
        .get_user(user.id)
        .await
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user.into()))
}

/// GET /api/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<DashboardStats> {
    Json(state.storage.get_dashboard_stats(user.id).await)
}
