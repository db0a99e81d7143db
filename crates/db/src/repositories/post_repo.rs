//! Repository for the `community_posts` table.

use hub_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, PostFilters, PostWithAuthor};

/// Column list shared across `RETURNING` clauses.
const COLUMNS: &str = "post_id, user_id, title, content, upvotes, \
    sdg_badges, skills_criteria, created_at, updated_at";

const SELECT_WITH_AUTHOR: &str = "\
    SELECT p.post_id, p.user_id, p.title, p.content, p.upvotes, \
           p.sdg_badges, p.skills_criteria, p.created_at, p.updated_at, \
           u.username AS author_username \
    FROM community_posts p \
    LEFT JOIN users u ON u.user_id = p.user_id";

/// Provides CRUD and voting operations for community posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post authored by `user_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO community_posts (user_id, title, content, sdg_badges, skills_criteria) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(Json(&input.sdg_badges))
            .bind(Json(&input.skills_criteria))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PostWithAuthor>, sqlx::Error> {
        let query = format!("{SELECT_WITH_AUTHOR} WHERE p.post_id = $1");
        sqlx::query_as::<_, PostWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List posts newest first, optionally restricted by SDG badges
    /// (superset match) and a single skill.
    pub async fn list(
        pool: &PgPool,
        filters: &PostFilters,
    ) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
        let badges = filters.sdg_badges.as_ref().filter(|b| !b.is_empty());
        let skill = filters
            .skill
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let mut conditions: Vec<String> = Vec::new();
        if badges.is_some() {
            let idx = conditions.len() + 1;
            conditions.push(format!("p.sdg_badges @> ${idx}::jsonb"));
        }
        if skill.is_some() {
            let idx = conditions.len() + 1;
            conditions.push(format!("p.skills_criteria @> jsonb_build_array(${idx}::text)"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!("{SELECT_WITH_AUTHOR} {where_clause} ORDER BY p.created_at DESC");

        let mut q = sqlx::query_as::<_, PostWithAuthor>(&query);
        if let Some(badges) = badges {
            q = q.bind(Json(badges));
        }
        if let Some(skill) = skill {
            q = q.bind(skill);
        }
        q.fetch_all(pool).await
    }

    /// Increment a post's upvote counter in a single statement.
    ///
    /// Returns `None` if the post does not exist. There is no per-user vote
    /// ledger, so repeated calls by the same user all count.
    pub async fn upvote(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE community_posts \
             SET upvotes = upvotes + 1, updated_at = NOW() \
             WHERE post_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post written by `author`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, author: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM community_posts WHERE post_id = $1 AND user_id = $2")
            .bind(id)
            .bind(author)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
