use axum::routing::{get, post};
use axum::Router;

use crate::handlers::mentorship;
use crate::state::AppState;

/// Routes mounted at `/mentorship`.
///
/// ```text
/// POST   /applications          -> create
/// GET    /applications/mine     -> mine
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/applications", post(mentorship::create))
        .route("/applications/mine", get(mentorship::mine))
}
