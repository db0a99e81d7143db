//! Repository for the `post_comments` table.

use hub_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::Comment;

/// Provides create/list operations for post comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment and return it with the author's username.
    pub async fn create(
        pool: &PgPool,
        post_id: DbId,
        user_id: DbId,
        content: &str,
    ) -> Result<Comment, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            "WITH inserted AS ( \
                 INSERT INTO post_comments (post_id, user_id, content) \
                 VALUES ($1, $2, $3) \
                 RETURNING comment_id, post_id, user_id, content, created_at \
             ) \
             SELECT i.comment_id, i.post_id, i.user_id, i.content, i.created_at, \
                    u.username AS author_username \
             FROM inserted i \
             LEFT JOIN users u ON u.user_id = i.user_id",
        )
        .bind(post_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(pool)
        .await
    }

    /// Comments on a post in chronological order.
    pub async fn list_by_post(pool: &PgPool, post_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            "SELECT c.comment_id, c.post_id, c.user_id, c.content, c.created_at, \
                    u.username AS author_username \
             FROM post_comments c \
             LEFT JOIN users u ON u.user_id = c.user_id \
             WHERE c.post_id = $1 \
             ORDER BY c.created_at ASC",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
    }
}
