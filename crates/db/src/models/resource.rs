//! Resource directory model and DTOs.

use hub_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub resource_id: DbId,
    pub title: String,
    /// `grant`, `training` or `equipment`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub resource_type: String,
    pub location: Option<String>,
    #[sqlx(json)]
    pub sdg_relevance: Vec<String>,
    #[sqlx(json)]
    pub accessibility: Vec<String>,
    pub added_by: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateResource {
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub location: Option<String>,
    #[serde(default)]
    pub sdg_relevance: Vec<String>,
    #[serde(default)]
    pub accessibility: Vec<String>,
}

/// Filters for resource listing.
#[derive(Debug, Clone, Default)]
pub struct ResourceFilters {
    pub resource_type: Option<String>,
    pub sdg_relevance: Option<Vec<String>>,
}
