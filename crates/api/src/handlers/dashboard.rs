//! Handler for the signed-in user's dashboard.

use axum::extract::State;
use axum::Json;
use hub_db::models::project::{ProjectFilters, ProjectWithCreator};
use hub_db::models::user::User;
use hub_db::repositories::{ProjectRepo, UserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub profile: User,
    /// Projects the caller created, newest first.
    pub projects: Vec<ProjectWithCreator>,
}

/// GET /api/v1/dashboard
pub async fn get(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Dashboard>>> {
    let profile = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    let filters = ProjectFilters {
        created_by: Some(auth.user_id),
        ..Default::default()
    };
    let projects = ProjectRepo::list(&state.pool, &filters).await?;

    Ok(Json(DataResponse {
        data: Dashboard { profile, projects },
    }))
}
