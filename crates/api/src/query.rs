//! Query string parameter types for list endpoints.
//!
//! Multi-valued filters arrive as comma-separated strings (`?sdg=5,9`) and
//! are folded into the repository filter structs here, so handlers only
//! deal with validated, canonical values.

use hub_core::error::CoreError;
use hub_core::resource::ResourceType;
use hub_core::sdg::normalize_sdg_tags;
use hub_core::search::split_csv;
use hub_core::text::reject_nul;
use hub_core::types::DbId;
use hub_db::models::post::PostFilters;
use hub_db::models::project::ProjectFilters;
use hub_db::models::resource::ResourceFilters;
use serde::Deserialize;

/// Parse an optional `?sdg=` value into canonical tags.
///
/// A missing or blank value yields `None`, meaning "no SDG predicate".
fn parse_sdg_param(raw: Option<&str>) -> Result<Option<Vec<String>>, CoreError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let tags = normalize_sdg_tags(&split_csv(raw))?;
    Ok((!tags.is_empty()).then_some(tags))
}

/// `GET /projects?search=&sdg=&created_by=`
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub search: Option<String>,
    pub sdg: Option<String>,
    pub created_by: Option<DbId>,
}

impl ProjectListParams {
    pub fn into_filters(self) -> Result<ProjectFilters, CoreError> {
        if let Some(search) = &self.search {
            reject_nul("Search", search)?;
        }
        Ok(ProjectFilters {
            sdg_alignment: parse_sdg_param(self.sdg.as_deref())?,
            search: self.search,
            created_by: self.created_by,
        })
    }
}

/// `GET /posts?sdg=&skill=`
#[derive(Debug, Default, Deserialize)]
pub struct PostListParams {
    pub sdg: Option<String>,
    pub skill: Option<String>,
}

impl PostListParams {
    pub fn into_filters(self) -> Result<PostFilters, CoreError> {
        if let Some(skill) = &self.skill {
            reject_nul("Skill", skill)?;
        }
        Ok(PostFilters {
            sdg_badges: parse_sdg_param(self.sdg.as_deref())?,
            skill: self
                .skill
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}

/// `GET /resources?type=&sdg=`
#[derive(Debug, Default, Deserialize)]
pub struct ResourceListParams {
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub sdg: Option<String>,
}

impl ResourceListParams {
    pub fn into_filters(self) -> Result<ResourceFilters, CoreError> {
        let resource_type = match self.resource_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(ResourceType::from_str(raw)?.as_str().to_string()),
        };
        Ok(ResourceFilters {
            resource_type,
            sdg_relevance: parse_sdg_param(self.sdg.as_deref())?,
        })
    }
}
