//! User profile model and DTOs.

use hub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A profile row from the `users` table.
///
/// `user_id` equals the auth subject of the profile's owner.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    pub gender_identity: Option<String>,
    pub location: Option<String>,
    #[sqlx(json)]
    pub skills: Vec<String>,
    #[sqlx(json)]
    pub sdg_focus_areas: Vec<String>,
    /// Score of the most recent quiz attempt.
    pub quiz_score: i32,
    pub quiz_attempts: i32,
    pub created_at: Timestamp,
}

/// DTO for creating the caller's own profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub gender_identity: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sdg_focus_areas: Vec<String>,
}

/// DTO for updating a profile. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub gender_identity: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub sdg_focus_areas: Option<Vec<String>>,
}
