//! Repository for the `users` table.

use hub_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, username, email, gender_identity, location, \
    skills, sdg_focus_areas, quiz_score, quiz_attempts, created_at";

/// Provides CRUD operations for user profiles.
pub struct UserRepo;

impl UserRepo {
    /// Insert the profile for `user_id`.
    ///
    /// Fails with a unique violation if the username or email is taken.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users \
                (user_id, username, email, gender_identity, location, skills, sdg_focus_areas) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.gender_identity)
            .bind(&input.location)
            .bind(Json(&input.skills))
            .bind(Json(&input.sdg_focus_areas))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, user_id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a profile. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no profile exists for `user_id`.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                username = COALESCE($2, username), \
                email = COALESCE($3, email), \
                gender_identity = COALESCE($4, gender_identity), \
                location = COALESCE($5, location), \
                skills = COALESCE($6, skills), \
                sdg_focus_areas = COALESCE($7, sdg_focus_areas) \
             WHERE user_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.gender_identity)
            .bind(&input.location)
            .bind(input.skills.as_ref().map(Json))
            .bind(input.sdg_focus_areas.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Store the score of a finished quiz attempt and count the attempt.
    ///
    /// The attempt counter is incremented in the same statement, so
    /// concurrent submissions each count once.
    pub async fn record_quiz_result(
        pool: &PgPool,
        user_id: DbId,
        score: i32,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users \
             SET quiz_score = $2, quiz_attempts = quiz_attempts + 1 \
             WHERE user_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(score)
            .fetch_optional(pool)
            .await
    }
}
