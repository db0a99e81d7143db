//! Handlers for the `/projects` resource, including join/leave membership.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hub_core::error::CoreError;
use hub_core::project::{
    normalize_impact_metrics, normalize_team_members, validate_description, validate_title,
};
use hub_core::sdg::normalize_sdg_tags;
use hub_core::types::DbId;
use hub_db::models::project::{CreateProject, Project, ProjectWithCreator, UpdateProject};
use hub_db::repositories::{MembershipChange, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ProjectListParams;
use crate::state::AppState;

/// Validate and canonicalize a create payload in place.
fn prepare_create(input: CreateProject) -> Result<CreateProject, CoreError> {
    let title = input.title.trim().to_string();
    validate_title(&title)?;
    validate_description(input.description.as_deref())?;
    Ok(CreateProject {
        title,
        description: input.description,
        sdg_alignment: normalize_sdg_tags(&input.sdg_alignment)?,
        team_members: normalize_team_members(&input.team_members)?,
        impact_metrics: normalize_impact_metrics(&input.impact_metrics)?,
    })
}

/// Validate and canonicalize only the fields present in an update payload.
fn prepare_update(input: UpdateProject) -> Result<UpdateProject, CoreError> {
    let title = input.title.map(|t| t.trim().to_string());
    if let Some(title) = &title {
        validate_title(title)?;
    }
    validate_description(input.description.as_deref())?;
    Ok(UpdateProject {
        title,
        description: input.description,
        sdg_alignment: input
            .sdg_alignment
            .map(|tags| normalize_sdg_tags(&tags))
            .transpose()?,
        team_members: input
            .team_members
            .map(|members| normalize_team_members(&members))
            .transpose()?,
        impact_metrics: input
            .impact_metrics
            .map(|metrics| normalize_impact_metrics(&metrics))
            .transpose()?,
    })
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Vec<ProjectWithCreator>>> {
    let filters = params.into_filters()?;
    let projects = ProjectRepo::list(&state.pool, &filters).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/mine
///
/// Projects the caller created or has joined.
pub async fn mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectWithCreator>>> {
    let projects = ProjectRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithCreator>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// POST /api/v1/projects
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input = prepare_create(input)?;
    let project = ProjectRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = %auth.user_id,
        project_id = %project.project_id,
        "Project created",
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/{id}
///
/// Only the creator may update; anyone else sees 404.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let input = prepare_update(input)?;
    let project = ProjectRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::not_found("Project", id))?;

    tracing::info!(user_id = %auth.user_id, project_id = %id, "Project updated");

    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::delete(&state.pool, id, auth.user_id).await? {
        return Err(AppError::not_found("Project", id));
    }

    tracing::info!(user_id = %auth.user_id, project_id = %id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/projects/{id}/join
pub async fn join(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    match ProjectRepo::join(&state.pool, id, auth.user_id).await? {
        MembershipChange::Updated(members) => {
            tracing::info!(
                user_id = %auth.user_id,
                project_id = %id,
                member_count = members.len(),
                "Joined project",
            );
            Ok(StatusCode::NO_CONTENT)
        }
        MembershipChange::AlreadyMember => Err(AppError::Core(CoreError::DuplicateMembership {
            project_id: id,
            user_id: auth.user_id,
        })),
        MembershipChange::ProjectNotFound => Err(AppError::not_found("Project", id)),
    }
}

/// POST /api/v1/projects/{id}/leave
///
/// Leaving a project the caller is not a member of succeeds without effect.
pub async fn leave(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    match ProjectRepo::leave(&state.pool, id, auth.user_id).await? {
        MembershipChange::Updated(members) => {
            tracing::info!(
                user_id = %auth.user_id,
                project_id = %id,
                member_count = members.len(),
                "Left project",
            );
            Ok(StatusCode::NO_CONTENT)
        }
        MembershipChange::AlreadyMember => Err(AppError::InternalError(
            "leave reported an existing membership".into(),
        )),
        MembershipChange::ProjectNotFound => Err(AppError::not_found("Project", id)),
    }
}
