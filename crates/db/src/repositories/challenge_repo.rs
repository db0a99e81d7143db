//! Repository for the `community_challenges` table.

use hub_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::challenge::{Challenge, CreateChallenge};

const COLUMNS: &str = "challenge_id, title, description, sdg_targets, \
    participating_organizations, submission_deadline, created_at";

pub struct ChallengeRepo;

impl ChallengeRepo {
    pub async fn create(pool: &PgPool, input: &CreateChallenge) -> Result<Challenge, sqlx::Error> {
        let query = format!(
            "INSERT INTO community_challenges \
                (title, description, sdg_targets, participating_organizations, \
                 submission_deadline) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Challenge>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(Json(&input.sdg_targets))
            .bind(Json(&input.participating_organizations))
            .bind(input.submission_deadline)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Challenge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM community_challenges WHERE challenge_id = $1");
        sqlx::query_as::<_, Challenge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All challenges, soonest deadline first; open-ended ones last.
    pub async fn list(pool: &PgPool) -> Result<Vec<Challenge>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM community_challenges \
             ORDER BY submission_deadline ASC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, Challenge>(&query).fetch_all(pool).await
    }
}
