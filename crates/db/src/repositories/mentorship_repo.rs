//! Repository for the `mentorship_applications` table.

use hub_core::mentorship::{ApplicationType, STATUS_PENDING};
use hub_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::mentorship::MentorshipApplication;

const COLUMNS: &str = "application_id, user_id, application_type, expertise_areas, \
    availability, motivation, status, created_at";

/// Provides create/list operations for mentorship applications.
pub struct MentorshipRepo;

impl MentorshipRepo {
    /// Insert a new application in the `pending` state.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        application_type: ApplicationType,
        expertise_areas: &[String],
        availability: Option<&str>,
        motivation: Option<&str>,
    ) -> Result<MentorshipApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentorship_applications \
                (user_id, application_type, expertise_areas, availability, motivation, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MentorshipApplication>(&query)
            .bind(user_id)
            .bind(application_type.as_str())
            .bind(Json(expertise_areas))
            .bind(availability)
            .bind(motivation)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Applications submitted by `user_id`, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<MentorshipApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mentorship_applications \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MentorshipApplication>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
