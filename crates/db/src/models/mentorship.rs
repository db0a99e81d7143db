//! Mentorship application model and DTO.

use hub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `mentorship_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MentorshipApplication {
    pub application_id: DbId,
    pub user_id: DbId,
    /// `mentor` or `mentee`.
    pub application_type: String,
    #[sqlx(json)]
    pub expertise_areas: Vec<String>,
    pub availability: Option<String>,
    pub motivation: Option<String>,
    /// `pending`, `approved` or `rejected`.
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for submitting an application. The applicant is always the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMentorshipApplication {
    pub application_type: String,
    #[serde(default)]
    pub expertise_areas: Vec<String>,
    pub availability: Option<String>,
    pub motivation: Option<String>,
}
