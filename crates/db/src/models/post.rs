//! Community forum post model and DTOs.

use hub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post row from the `community_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub post_id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub content: String,
    /// Unbounded counter; there is no per-user vote ledger.
    pub upvotes: i32,
    #[sqlx(json)]
    pub sdg_badges: Vec<String>,
    #[sqlx(json)]
    pub skills_criteria: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A post joined with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: Post,
    pub author_username: Option<String>,
}

/// DTO for creating a post. The author is always the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub sdg_badges: Vec<String>,
    #[serde(default)]
    pub skills_criteria: Vec<String>,
}

/// Filters for the post feed.
#[derive(Debug, Clone, Default)]
pub struct PostFilters {
    /// Posts must carry every one of these SDG badges.
    pub sdg_badges: Option<Vec<String>>,
    pub skill: Option<String>,
}
