// src/application/commands/subscriptions/journalists.rs
use super::{SubscriptionCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Role, UserId},
};

pub struct FollowJournalistCommand {
    pub journalist_id: i64,
}

impl SubscriptionCommandService {
    pub async fn follow_journalist(
        &self,
        actor: &AuthenticatedUser,
        command: FollowJournalistCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "subscriptions", "manage")?;

        let journalist_id = UserId::new(command.journalist_id)?;
        let target = self
            .user_repo
            .find_by_id(journalist_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("journalist not found"))?;

        // The followed side of the relation must actually be a journalist.
        if target.role != Role::Journalist {
            return Err(ApplicationError::validation(format!(
                "user '{}' is not a journalist",
                target.username
            )));
        }

        self.subscription_repo
            .follow_journalist(actor.id, journalist_id)
            .await?;
        Ok(())
    }

    pub async fn unfollow_journalist(
        &self,
        actor: &AuthenticatedUser,
        command: FollowJournalistCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "subscriptions", "manage")?;

        let journalist_id = UserId::new(command.journalist_id)?;
        self.subscription_repo
            .unfollow_journalist(actor.id, journalist_id)
            .await?;
        Ok(())
    }
}
