use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Raised by the join path when the user already appears in the
    /// project's member array. No write is performed.
    #[error("User {user_id} is already a member of project {project_id}")]
    DuplicateMembership { project_id: DbId, user_id: DbId },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
