//! Post comment model and DTO.

use hub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment row from `post_comments`, joined with the author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: DbId,
    pub post_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub author_username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub content: String,
}
