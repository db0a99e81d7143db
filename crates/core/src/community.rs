//! Community forum post and comment rules.

use crate::error::CoreError;
use crate::search::clean_list;
use crate::text::{validate_labels, validate_required};

pub const MAX_POST_TITLE_LEN: usize = 200;
pub const MAX_POST_CONTENT_LEN: usize = 10_000;
pub const MAX_COMMENT_LEN: usize = 2000;
pub const MAX_SKILLS: usize = 20;
pub const MAX_SKILL_LEN: usize = 50;
pub const MAX_ORGANIZATIONS: usize = 50;
pub const MAX_ORGANIZATION_LEN: usize = 200;

/// Skill categories offered by the post composer.
pub const SKILL_OPTIONS: &[&str] = &[
    "Technology",
    "Design",
    "Business",
    "Marketing",
    "Education",
    "Healthcare",
    "Research",
    "Policy",
];

pub fn validate_post(title: &str, content: &str) -> Result<(), CoreError> {
    validate_required("Title", title, MAX_POST_TITLE_LEN)?;
    validate_required("Content", content, MAX_POST_CONTENT_LEN)
}

pub fn validate_comment(content: &str) -> Result<(), CoreError> {
    validate_required("Comment", content, MAX_COMMENT_LEN)
}

/// Clean a skills list. Free-form skills are allowed alongside
/// [`SKILL_OPTIONS`]; only count and length are enforced.
pub fn normalize_skills(skills: &[String]) -> Result<Vec<String>, CoreError> {
    let cleaned = clean_list(skills);
    validate_labels("Skills", &cleaned, MAX_SKILLS, MAX_SKILL_LEN)?;
    Ok(cleaned)
}

/// Clean the list of organizations taking part in a challenge.
pub fn normalize_organizations(organizations: &[String]) -> Result<Vec<String>, CoreError> {
    let cleaned = clean_list(organizations);
    validate_labels(
        "Participating organizations",
        &cleaned,
        MAX_ORGANIZATIONS,
        MAX_ORGANIZATION_LEN,
    )?;
    Ok(cleaned)
}
