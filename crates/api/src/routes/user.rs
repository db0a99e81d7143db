//! Route definitions for user profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /me                -> get_me
/// POST   /me                -> create_me
/// PUT    /me                -> update_me
/// GET    /{id}              -> get_by_id
/// GET    /{id}/projects     -> list_projects
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/me",
            get(user::get_me).post(user::create_me).put(user::update_me),
        )
        .route("/{id}", get(user::get_by_id))
        .route("/{id}/projects", get(user::list_projects))
}
