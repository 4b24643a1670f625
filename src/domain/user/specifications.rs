// src/domain/user/specifications.rs
use crate::domain::user::entity::User;
use crate::domain::user::value_objects::Role;

/// A journalist does not consume subscriptions. Every write path that saves
/// an existing user calls this on the resulting record and, when it holds,
/// clears both subscription relations. The check looks at the role after
/// the save, not at whether the role changed, so re-saving a journalist
/// clears again.
pub fn must_clear_subscriptions(user: &User) -> bool {
    user.role == Role::Journalist
}
