//! Shared response envelope types for API handlers.
//!
//! Plain entity reads return the entity itself. Composite payloads (dashboard,
//! quiz, catalogs) use the `{ "data": ... }` envelope via [`DataResponse`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: questions }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
