//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, where
//!   the entity is editable
//!
//! JSON array columns are decoded into `Vec<String>` via `#[sqlx(json)]`
//! so callers never handle untyped JSON.

pub mod challenge;
pub mod comment;
pub mod mentorship;
pub mod post;
pub mod project;
pub mod resource;
pub mod user;
