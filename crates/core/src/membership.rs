//! Project team-membership array operations.
//!
//! A project's `team_members` column is an unordered JSON array of user id
//! strings. These functions compute the array that the join/leave paths
//! write back; the repository is responsible for reading and persisting it
//! under a row lock.
//!
//! The creator of a project is implicitly a member and does not need to
//! appear in the array.

/// Whether `user_id` appears in the member array.
pub fn is_member(members: &[String], user_id: &str) -> bool {
    members.iter().any(|m| m == user_id)
}

/// Append `user_id` to a copy of `members`.
///
/// Returns `None` if the user is already present; the caller must report a
/// duplicate membership and skip the write.
pub fn add_member(members: &[String], user_id: &str) -> Option<Vec<String>> {
    if is_member(members, user_id) {
        return None;
    }
    let mut updated = Vec::with_capacity(members.len() + 1);
    updated.extend_from_slice(members);
    updated.push(user_id.to_string());
    Some(updated)
}

/// Remove every occurrence of `user_id`. Absent users leave the array unchanged.
pub fn remove_member(members: &[String], user_id: &str) -> Vec<String> {
    members.iter().filter(|m| *m != user_id).cloned().collect()
}
