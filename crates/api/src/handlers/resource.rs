//! Handlers for the resource directory (grants, training, equipment).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use hub_core::resource::{
    normalize_accessibility, ResourceType, MAX_LOCATION_LEN, MAX_RESOURCE_TITLE_LEN,
};
use hub_core::sdg::normalize_sdg_tags;
use hub_core::text::{validate_optional, validate_required};
use hub_db::models::resource::{CreateResource, Resource};
use hub_db::repositories::ResourceRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::ResourceListParams;
use crate::state::AppState;

/// GET /api/v1/resources
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ResourceListParams>,
) -> AppResult<Json<Vec<Resource>>> {
    let filters = params.into_filters()?;
    let resources = ResourceRepo::list(&state.pool, &filters).await?;
    Ok(Json(resources))
}

/// POST /api/v1/resources
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    let title = input.title.trim().to_string();
    validate_required("Title", &title, MAX_RESOURCE_TITLE_LEN)?;
    validate_optional("Location", input.location.as_deref(), MAX_LOCATION_LEN)?;
    let resource_type = ResourceType::from_str(&input.resource_type)?;
    let input = CreateResource {
        title,
        resource_type: resource_type.as_str().to_string(),
        location: input.location,
        sdg_relevance: normalize_sdg_tags(&input.sdg_relevance)?,
        accessibility: normalize_accessibility(&input.accessibility)?,
    };

    let resource = ResourceRepo::create(&state.pool, auth.user_id, resource_type, &input).await?;
    tracing::info!(
        user_id = %auth.user_id,
        resource_id = %resource.resource_id,
        resource_type = resource_type.as_str(),
        "Resource added",
    );

    Ok((StatusCode::CREATED, Json(resource)))
}
