use axum::routing::get;
use axum::Router;

use crate::handlers::challenge;
use crate::state::AppState;

/// Routes mounted at `/challenges`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(challenge::list).post(challenge::create))
        .route("/{id}", get(challenge::get_by_id))
}
