// src/domain/subscription/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::user::{User, UserId};
use async_trait::async_trait;

/// The two many-to-many subscription relations: reader to publisher and
/// reader to journalist. Edges are idempotent; subscribing twice is not
/// an error.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn subscribe_publisher(
        &self,
        reader: UserId,
        publisher: PublisherId,
    ) -> DomainResult<()>;

    async fn unsubscribe_publisher(
        &self,
        reader: UserId,
        publisher: PublisherId,
    ) -> DomainResult<()>;

    async fn follow_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()>;

    async fn unfollow_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()>;

    /// Remove every subscription edge held by the user, both paths.
    async fn clear_for_user(&self, user: UserId) -> DomainResult<()>;

    async fn publisher_subscribers(&self, publisher: PublisherId) -> DomainResult<Vec<User>>;

    async fn journalist_followers(&self, journalist: UserId) -> DomainResult<Vec<User>>;
}
