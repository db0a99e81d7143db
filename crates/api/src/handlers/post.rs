//! Handlers for the community forum: posts, upvotes and comments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hub_core::community::{normalize_skills, validate_comment, validate_post};
use hub_core::sdg::normalize_sdg_tags;
use hub_core::types::DbId;
use hub_db::models::comment::{Comment, CreateComment};
use hub_db::models::post::{CreatePost, Post, PostWithAuthor};
use hub_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PostListParams;
use crate::state::AppState;

/// GET /api/v1/posts
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> AppResult<Json<Vec<PostWithAuthor>>> {
    let filters = params.into_filters()?;
    let posts = PostRepo::list(&state.pool, &filters).await?;
    Ok(Json(posts))
}

/// POST /api/v1/posts
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<(StatusCode, Json<Post>)> {
    let title = input.title.trim().to_string();
    validate_post(&title, &input.content)?;
    let input = CreatePost {
        title,
        content: input.content,
        sdg_badges: normalize_sdg_tags(&input.sdg_badges)?,
        skills_criteria: normalize_skills(&input.skills_criteria)?,
    };

    let post = PostRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(user_id = %auth.user_id, post_id = %post.post_id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/v1/posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PostWithAuthor>> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Post", id))?;
    Ok(Json(post))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PostRepo::delete(&state.pool, id, auth.user_id).await? {
        return Err(AppError::not_found("Post", id));
    }
    tracing::info!(user_id = %auth.user_id, post_id = %id, "Post deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/posts/{id}/upvote
///
/// Unbounded: the same caller may upvote repeatedly.
pub async fn upvote(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Post>> {
    let post = PostRepo::upvote(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Post", id))?;

    tracing::debug!(
        user_id = %auth.user_id,
        post_id = %id,
        upvotes = post.upvotes,
        "Post upvoted",
    );

    Ok(Json(post))
}

/// GET /api/v1/posts/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Comment>>> {
    ensure_post_exists(&state, id).await?;
    let comments = CommentRepo::list_by_post(&state.pool, id).await?;
    Ok(Json(comments))
}

/// POST /api/v1/posts/{id}/comments
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    validate_comment(&input.content)?;
    ensure_post_exists(&state, id).await?;

    let comment = CommentRepo::create(&state.pool, id, auth.user_id, input.content.trim()).await?;
    tracing::info!(
        user_id = %auth.user_id,
        post_id = %id,
        comment_id = %comment.comment_id,
        "Comment added",
    );

    Ok((StatusCode::CREATED, Json(comment)))
}

async fn ensure_post_exists(state: &AppState, id: DbId) -> AppResult<()> {
    PostRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::not_found("Post", id))
}
