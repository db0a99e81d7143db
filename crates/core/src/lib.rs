//! Domain types, errors, and pure business rules for the Inclusive
//! Innovation Hub.
//!
//! Nothing in this crate performs I/O; the repository and HTTP layers call
//! into it to validate input and compute array/score mutations.

pub mod community;
pub mod error;
pub mod membership;
pub mod mentorship;
pub mod profile;
pub mod project;
pub mod quiz;
pub mod resource;
pub mod sdg;
pub mod search;
pub mod support;
pub mod text;
pub mod types;
