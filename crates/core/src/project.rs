//! Collaboration project field rules.

use crate::error::CoreError;
use crate::search::clean_list;
use crate::text::{validate_labels, validate_optional, validate_required};
use crate::types::DbId;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 5000;
pub const MAX_IMPACT_METRICS: usize = 50;
pub const MAX_IMPACT_METRIC_LEN: usize = 200;
pub const MAX_TEAM_MEMBERS: usize = 500;

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required("Title", title, MAX_TITLE_LEN)
}

pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    validate_optional("Description", description, MAX_DESCRIPTION_LEN)
}

/// Clean and validate the free-form impact metric list.
pub fn normalize_impact_metrics(metrics: &[String]) -> Result<Vec<String>, CoreError> {
    let cleaned = clean_list(metrics);
    validate_labels(
        "Impact metrics",
        &cleaned,
        MAX_IMPACT_METRICS,
        MAX_IMPACT_METRIC_LEN,
    )?;
    Ok(cleaned)
}

/// Parse member ids into their canonical hyphenated lowercase form.
///
/// Blank entries are dropped and duplicates collapsed, so the stored array
/// never carries the same member twice.
pub fn normalize_team_members(members: &[String]) -> Result<Vec<String>, CoreError> {
    let mut out: Vec<String> = Vec::with_capacity(members.len());
    for raw in clean_list(members) {
        let id: DbId = raw.parse().map_err(|_| {
            CoreError::Validation(format!("Team member '{raw}' is not a valid user id"))
        })?;
        let id = id.to_string();
        if !out.contains(&id) {
            out.push(id);
        }
    }
    if out.len() > MAX_TEAM_MEMBERS {
        return Err(CoreError::Validation(format!(
            "A project can have at most {MAX_TEAM_MEMBERS} team members"
        )));
    }
    Ok(out)
}
