// src/application/commands/subscriptions/publishers.rs
use super::{SubscriptionCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::publisher::PublisherId,
};

pub struct SubscribePublisherCommand {
    pub publisher_id: i64,
}

impl SubscriptionCommandService {
    pub async fn subscribe_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: SubscribePublisherCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "subscriptions", "manage")?;

        let publisher_id = PublisherId::new(command.publisher_id)?;
        self.publisher_repo
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;

        self.subscription_repo
            .subscribe_publisher(actor.id, publisher_id)
            .await?;
        Ok(())
    }

    pub async fn unsubscribe_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: SubscribePublisherCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "subscriptions", "manage")?;

        let publisher_id = PublisherId::new(command.publisher_id)?;
        self.subscription_repo
            .unsubscribe_publisher(actor.id, publisher_id)
            .await?;
        Ok(())
    }
}
