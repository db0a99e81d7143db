//! Handlers for mentorship applications.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hub_core::mentorship::{normalize_application, ApplicationType};
use hub_db::models::mentorship::{CreateMentorshipApplication, MentorshipApplication};
use hub_db::repositories::MentorshipRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/mentorship/applications
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMentorshipApplication>,
) -> AppResult<(StatusCode, Json<MentorshipApplication>)> {
    let application_type = ApplicationType::from_str(&input.application_type)?;
    let expertise_areas = normalize_application(
        &input.expertise_areas,
        input.availability.as_deref(),
        input.motivation.as_deref(),
    )?;

    let application = MentorshipRepo::create(
        &state.pool,
        auth.user_id,
        application_type,
        &expertise_areas,
        input.availability.as_deref(),
        input.motivation.as_deref(),
    )
    .await?;

    tracing::info!(
        user_id = %auth.user_id,
        application_id = %application.application_id,
        application_type = application_type.as_str(),
        "Mentorship application submitted",
    );

    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/mentorship/applications/mine
pub async fn mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MentorshipApplication>>> {
    let applications = MentorshipRepo::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(applications))
}
