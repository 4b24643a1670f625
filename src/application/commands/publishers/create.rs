// src/application/commands/publishers/create.rs
use super::{PublisherCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, PublisherDto},
        error::ApplicationResult,
    },
    domain::publisher::{NewPublisher, PublisherName},
};

pub struct CreatePublisherCommand {
    pub name: String,
}

impl PublisherCommandService {
    pub async fn create_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        ensure_capability(actor, "publishers", "manage")?;

        let publisher = self
            .publisher_repo
            .insert(NewPublisher {
                name: PublisherName::new(command.name)?,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(publisher.into())
    }
}
