// src/domain/publisher/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::publisher::{
    entity::{NewPublisher, Publisher},
    value_objects::PublisherId,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PublisherRepository: Send + Sync {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher>;

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>>;

    /// Staff membership edges. Callers validate the member's role before
    /// assigning; the store only keeps the edge.
    async fn add_editor(&self, publisher: PublisherId, editor: UserId) -> DomainResult<()>;

    async fn add_journalist(&self, publisher: PublisherId, journalist: UserId)
    -> DomainResult<()>;
}
