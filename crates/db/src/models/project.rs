//! Collaboration project entity model and DTOs.

use hub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `collaboration_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_by: Option<DbId>,
    /// Canonical SDG numbers (`"1"`..`"17"`).
    #[sqlx(json)]
    pub sdg_alignment: Vec<String>,
    /// Member user ids. The creator is implicitly a member and may be absent.
    #[sqlx(json)]
    pub team_members: Vec<String>,
    #[sqlx(json)]
    pub impact_metrics: Vec<String>,
    pub created_at: Timestamp,
}

/// A project joined with its creator's public profile fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectWithCreator {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub creator_username: Option<String>,
    pub creator_email: Option<String>,
}

/// DTO for creating a project. The creator is always the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sdg_alignment: Vec<String>,
    #[serde(default)]
    pub team_members: Vec<String>,
    #[serde(default)]
    pub impact_metrics: Vec<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub sdg_alignment: Option<Vec<String>>,
    pub team_members: Option<Vec<String>>,
    pub impact_metrics: Option<Vec<String>>,
}

/// Filters for project listing. Absent fields impose no restriction.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilters {
    /// Case-insensitive substring matched against title OR description.
    pub search: Option<String>,
    /// Projects must carry every one of these tags.
    pub sdg_alignment: Option<Vec<String>>,
    pub created_by: Option<DbId>,
}
