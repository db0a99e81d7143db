//! Handlers for community challenges.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hub_core::project::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use hub_core::sdg::normalize_sdg_tags;
use hub_core::community::normalize_organizations;
use hub_core::text::{validate_optional, validate_required};
use hub_core::types::DbId;
use hub_db::models::challenge::{Challenge, CreateChallenge};
use hub_db::repositories::ChallengeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/challenges
///
/// Soonest deadline first; open-ended challenges last.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Challenge>>> {
    let challenges = ChallengeRepo::list(&state.pool).await?;
    Ok(Json(challenges))
}

/// GET /api/v1/challenges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Challenge>> {
    let challenge = ChallengeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Challenge", id))?;
    Ok(Json(challenge))
}

/// POST /api/v1/challenges
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateChallenge>,
) -> AppResult<(StatusCode, Json<Challenge>)> {
    let title = input.title.trim().to_string();
    validate_required("Title", &title, MAX_TITLE_LEN)?;
    validate_optional("Description", input.description.as_deref(), MAX_DESCRIPTION_LEN)?;
    let input = CreateChallenge {
        title,
        description: input.description,
        sdg_targets: normalize_sdg_tags(&input.sdg_targets)?,
        participating_organizations: normalize_organizations(
            &input.participating_organizations,
        )?,
        submission_deadline: input.submission_deadline,
    };

    let challenge = ChallengeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = %auth.user_id,
        challenge_id = %challenge.challenge_id,
        "Challenge created",
    );

    Ok((StatusCode::CREATED, Json(challenge)))
}
