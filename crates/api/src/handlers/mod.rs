pub mod catalog;
pub mod challenge;
pub mod dashboard;
pub mod mentorship;
pub mod post;
pub mod project;
pub mod quiz;
pub mod resource;
pub mod support;
pub mod user;
