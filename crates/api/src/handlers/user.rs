//! Handlers for user profiles.
//!
//! A profile's `user_id` is always the caller's token subject, so there is
//! no way to create or edit someone else's profile.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hub_core::community::normalize_skills;
use hub_core::error::CoreError;
use hub_core::profile::{validate_details, validate_email, validate_username};
use hub_core::sdg::normalize_sdg_tags;
use hub_core::types::DbId;
use hub_db::models::project::ProjectWithCreator;
use hub_db::models::user::{CreateUser, UpdateUser, User};
use hub_db::repositories::{ProjectRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn prepare_create(input: CreateUser) -> Result<CreateUser, CoreError> {
    let username = input.username.trim().to_string();
    let email = input.email.trim().to_string();
    validate_username(&username)?;
    validate_email(&email)?;
    validate_details(input.location.as_deref(), input.gender_identity.as_deref())?;
    Ok(CreateUser {
        username,
        email,
        gender_identity: input.gender_identity,
        location: input.location,
        skills: normalize_skills(&input.skills)?,
        sdg_focus_areas: normalize_sdg_tags(&input.sdg_focus_areas)?,
    })
}

fn prepare_update(input: UpdateUser) -> Result<UpdateUser, CoreError> {
    let username = input.username.map(|u| u.trim().to_string());
    let email = input.email.map(|e| e.trim().to_string());
    if let Some(username) = &username {
        validate_username(username)?;
    }
    if let Some(email) = &email {
        validate_email(email)?;
    }
    validate_details(input.location.as_deref(), input.gender_identity.as_deref())?;
    Ok(UpdateUser {
        username,
        email,
        gender_identity: input.gender_identity,
        location: input.location,
        skills: input.skills.map(|s| normalize_skills(&s)).transpose()?,
        sdg_focus_areas: input
            .sdg_focus_areas
            .map(|tags| normalize_sdg_tags(&tags))
            .transpose()?,
    })
}

/// POST /api/v1/users/me
///
/// Create the caller's profile. An existing profile, or a taken username or
/// email, yields 409.
pub async fn create_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let input = prepare_create(input)?;
    if UserRepo::find_by_id(&state.pool, auth.user_id).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "A profile already exists for this user".into(),
        )));
    }
    let user = UserRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(user_id = %auth.user_id, username = %user.username, "Profile created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users/me
pub async fn get_me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/me
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    let input = prepare_update(input)?;
    let user = UserRepo::update(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;
    tracing::info!(user_id = %auth.user_id, "Profile updated");
    Ok(Json(user))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user))
}

/// GET /api/v1/users/{id}/projects
///
/// Projects the user created or is a team member of.
pub async fn list_projects(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectWithCreator>>> {
    let projects = ProjectRepo::list_for_user(&state.pool, id).await?;
    Ok(Json(projects))
}
