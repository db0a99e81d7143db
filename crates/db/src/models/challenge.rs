//! Community challenge model and DTO.

use hub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `community_challenges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Challenge {
    pub challenge_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[sqlx(json)]
    pub sdg_targets: Vec<String>,
    #[sqlx(json)]
    pub participating_organizations: Vec<String>,
    pub submission_deadline: Option<Timestamp>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateChallenge {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sdg_targets: Vec<String>,
    #[serde(default)]
    pub participating_organizations: Vec<String>,
    pub submission_deadline: Option<Timestamp>,
}
