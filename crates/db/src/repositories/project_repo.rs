//! Repository for the `collaboration_projects` table.
//!
//! Besides CRUD this owns the membership protocol: join and leave read the
//! member array under a row lock, compute the new array with
//! [`hub_core::membership`], and write the whole array back in the same
//! transaction. Concurrent mutators of one project therefore serialise and
//! no update is lost.

use hub_core::membership;
use hub_core::search::contains_pattern;
use hub_core::types::DbId;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::project::{
    CreateProject, Project, ProjectFilters, ProjectWithCreator, UpdateProject,
};

/// Column list shared across `RETURNING` clauses.
const COLUMNS: &str = "project_id, title, description, created_by, \
    sdg_alignment, team_members, impact_metrics, created_at";

/// Select list and source for queries that include the creator profile.
const SELECT_WITH_CREATOR: &str = "\
    SELECT p.project_id, p.title, p.description, p.created_by, \
           p.sdg_alignment, p.team_members, p.impact_metrics, p.created_at, \
           u.username AS creator_username, u.email AS creator_email \
    FROM collaboration_projects p \
    LEFT JOIN users u ON u.user_id = p.created_by";

/// Result of a join or leave attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipChange {
    /// The array was written back; holds the stored member list.
    Updated(Vec<String>),
    /// Join only: the user was already present, nothing was written.
    AlreadyMember,
    ProjectNotFound,
}

/// Provides CRUD and membership operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `created_by`, returning the created row.
    ///
    /// Array fields are expected to be normalized by the caller.
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO collaboration_projects \
                (title, description, created_by, sdg_alignment, team_members, impact_metrics) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(created_by)
            .bind(Json(&input.sdg_alignment))
            .bind(Json(&input.team_members))
            .bind(Json(&input.impact_metrics))
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID together with its creator's profile fields.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithCreator>, sqlx::Error> {
        let query = format!("{SELECT_WITH_CREATOR} WHERE p.project_id = $1");
        sqlx::query_as::<_, ProjectWithCreator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching `filters`, newest first. No pagination.
    ///
    /// - `search`: title OR description, case-insensitive substring
    /// - `sdg_alignment`: project tags must be a superset of the given tags
    /// - `created_by`: exact creator match
    pub async fn list(
        pool: &PgPool,
        filters: &ProjectFilters,
    ) -> Result<Vec<ProjectWithCreator>, sqlx::Error> {
        let pattern = filters.search.as_deref().and_then(contains_pattern);
        let sdg_tags = filters
            .sdg_alignment
            .as_ref()
            .filter(|tags| !tags.is_empty());

        // Each condition consumes exactly one bind parameter.
        let mut conditions: Vec<String> = Vec::new();
        if pattern.is_some() {
            let idx = conditions.len() + 1;
            conditions.push(format!(
                "(p.title ILIKE ${idx} OR p.description ILIKE ${idx})"
            ));
        }
        if filters.created_by.is_some() {
            let idx = conditions.len() + 1;
            conditions.push(format!("p.created_by = ${idx}"));
        }
        if sdg_tags.is_some() {
            let idx = conditions.len() + 1;
            conditions.push(format!("p.sdg_alignment @> ${idx}::jsonb"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!("{SELECT_WITH_CREATOR} {where_clause} ORDER BY p.created_at DESC");

        let mut q = sqlx::query_as::<_, ProjectWithCreator>(&query);
        if let Some(ref pattern) = pattern {
            q = q.bind(pattern);
        }
        if let Some(created_by) = filters.created_by {
            q = q.bind(created_by);
        }
        if let Some(tags) = sdg_tags {
            q = q.bind(Json(tags));
        }
        q.fetch_all(pool).await
    }

    /// Projects the user created OR appears in as a team member, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProjectWithCreator>, sqlx::Error> {
        let query = format!(
            "{SELECT_WITH_CREATOR} \
             WHERE p.created_by = $1 \
                OR p.team_members @> jsonb_build_array($1::text) \
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, ProjectWithCreator>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project owned by `owner`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists or it is owned by
    /// someone else. Ownership lives in the `WHERE` clause, so the two cases
    /// are indistinguishable here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        owner: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE collaboration_projects SET \
                title = COALESCE($3, title), \
                description = COALESCE($4, description), \
                sdg_alignment = COALESCE($5, sdg_alignment), \
                team_members = COALESCE($6, team_members), \
                impact_metrics = COALESCE($7, impact_metrics) \
             WHERE project_id = $1 AND created_by = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(owner)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.sdg_alignment.as_ref().map(Json))
            .bind(input.team_members.as_ref().map(Json))
            .bind(input.impact_metrics.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a project owned by `owner`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId, owner: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM collaboration_projects WHERE project_id = $1 AND created_by = $2",
        )
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Membership
    // -----------------------------------------------------------------------

    /// Add `user_id` to the project's member array.
    ///
    /// Fails with [`MembershipChange::AlreadyMember`] without writing if the
    /// user is already listed.
    pub async fn join(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<MembershipChange, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(members) = lock_members(&mut tx, project_id).await? else {
            return Ok(MembershipChange::ProjectNotFound);
        };
        let Some(updated) = membership::add_member(&members, &user_id.to_string()) else {
            tracing::debug!(%project_id, %user_id, "Join skipped, user already listed");
            // Dropping the transaction rolls it back and releases the lock.
            return Ok(MembershipChange::AlreadyMember);
        };

        write_members(&mut tx, project_id, &updated).await?;
        tx.commit().await?;
        Ok(MembershipChange::Updated(updated))
    }

    /// Remove every occurrence of `user_id` from the project's member array.
    ///
    /// Leaving a project one is not a member of writes the array back
    /// unchanged and still reports [`MembershipChange::Updated`].
    pub async fn leave(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<MembershipChange, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(members) = lock_members(&mut tx, project_id).await? else {
            return Ok(MembershipChange::ProjectNotFound);
        };
        let updated = membership::remove_member(&members, &user_id.to_string());

        write_members(&mut tx, project_id, &updated).await?;
        tx.commit().await?;
        Ok(MembershipChange::Updated(updated))
    }
}

/// Read the member array and hold the row lock until the transaction ends.
async fn lock_members(
    conn: &mut PgConnection,
    project_id: DbId,
) -> Result<Option<Vec<String>>, sqlx::Error> {
    let row = sqlx::query_scalar::<_, Json<Vec<String>>>(
        "SELECT team_members FROM collaboration_projects \
         WHERE project_id = $1 \
         FOR UPDATE",
    )
    .bind(project_id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(row.map(|Json(members)| members))
}

async fn write_members(
    conn: &mut PgConnection,
    project_id: DbId,
    members: &[String],
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE collaboration_projects SET team_members = $2 WHERE project_id = $1")
        .bind(project_id)
        .bind(Json(members))
        .execute(&mut *conn)
        .await?;
    Ok(())
}
