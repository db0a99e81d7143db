//! Route definitions for the community forum.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::post as handlers;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// DELETE /{id}              -> delete
/// POST   /{id}/upvote       -> upvote
/// GET    /{id}/comments     -> list_comments
/// POST   /{id}/comments     -> create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list).post(handlers::create))
        .route("/{id}", get(handlers::get_by_id).delete(handlers::delete))
        .route("/{id}/upvote", post(handlers::upvote))
        .route(
            "/{id}/comments",
            get(handlers::list_comments).post(handlers::create_comment),
        )
}
