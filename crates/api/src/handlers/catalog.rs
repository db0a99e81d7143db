//! Static option lists used by the front-end forms.

use axum::Json;
use hub_core::community::SKILL_OPTIONS;
use hub_core::sdg::{sdg_name, SDG_COUNT};
use serde::Serialize;

use crate::response::DataResponse;

#[derive(Debug, Serialize)]
pub struct SdgEntry {
    /// Canonical tag value, e.g. `"5"`.
    pub tag: String,
    pub number: u8,
    pub name: &'static str,
}

/// GET /api/v1/sdgs
pub async fn sdgs() -> Json<DataResponse<Vec<SdgEntry>>> {
    let data = (1..=SDG_COUNT)
        .filter_map(|number| {
            sdg_name(number).map(|name| SdgEntry {
                tag: number.to_string(),
                number,
                name,
            })
        })
        .collect();
    Json(DataResponse { data })
}

/// GET /api/v1/skills
pub async fn skills() -> Json<DataResponse<&'static [&'static str]>> {
    Json(DataResponse {
        data: SKILL_OPTIONS,
    })
}
