// src/domain/article/specifications.rs
use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Capability, UserId};

/// Approval notification is a transition on update, never an initial
/// state: creating an article already approved stays silent. The check
/// does not compare against the previous stored value, so any further
/// save of an approved article fires again. That re-fire is intentional
/// and covered by tests.
pub fn approval_notification_due(article: &Article, created: bool) -> bool {
    !created && article.approved
}

pub struct CanUpdateArticleSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanUpdateArticleSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        article: &'a Article,
        user_id: UserId,
    ) -> Self {
        Self {
            capabilities,
            article,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_capability("articles", "update:any")
            || (self.has_capability("articles", "update:own")
                && self.article.journalist_id == self.user_id)
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}
