//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod challenge_repo;
pub mod comment_repo;
pub mod mentorship_repo;
pub mod post_repo;
pub mod project_repo;
pub mod resource_repo;
pub mod user_repo;

pub use challenge_repo::ChallengeRepo;
pub use comment_repo::CommentRepo;
pub use mentorship_repo::MentorshipRepo;
pub use post_repo::PostRepo;
pub use project_repo::{MembershipChange, ProjectRepo};
pub use resource_repo::ResourceRepo;
pub use user_repo::UserRepo;
