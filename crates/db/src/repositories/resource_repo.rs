//! Repository for the `resources` table.

use hub_core::resource::ResourceType;
use hub_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource, ResourceFilters};

const COLUMNS: &str = "resource_id, title, type, location, sdg_relevance, accessibility, added_by";

pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a resource listed by `added_by`.
    pub async fn create(
        pool: &PgPool,
        added_by: DbId,
        resource_type: ResourceType,
        input: &CreateResource,
    ) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (title, type, location, sdg_relevance, accessibility, added_by) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(&input.title)
            .bind(resource_type.as_str())
            .bind(&input.location)
            .bind(Json(&input.sdg_relevance))
            .bind(Json(&input.accessibility))
            .bind(added_by)
            .fetch_one(pool)
            .await
    }

    /// List resources alphabetically, optionally filtered by type and SDGs.
    pub async fn list(
        pool: &PgPool,
        filters: &ResourceFilters,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let sdgs = filters.sdg_relevance.as_ref().filter(|t| !t.is_empty());

        let mut conditions: Vec<String> = Vec::new();
        if filters.resource_type.is_some() {
            let idx = conditions.len() + 1;
            conditions.push(format!("type = ${idx}"));
        }
        if sdgs.is_some() {
            let idx = conditions.len() + 1;
            conditions.push(format!("sdg_relevance @> ${idx}::jsonb"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!("SELECT {COLUMNS} FROM resources {where_clause} ORDER BY title ASC");

        let mut q = sqlx::query_as::<_, Resource>(&query);
        if let Some(ref resource_type) = filters.resource_type {
            q = q.bind(resource_type);
        }
        if let Some(sdgs) = sdgs {
            q = q.bind(Json(sdgs));
        }
        q.fetch_all(pool).await
    }
}
