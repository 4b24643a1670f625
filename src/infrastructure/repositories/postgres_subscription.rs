// src/infrastructure/repositories/postgres_subscription.rs
use super::{map_sqlx, postgres_user::UserRow};
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::SubscriptionRepository;
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn subscribe_publisher(
        &self,
        reader: UserId,
        publisher: PublisherId,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO publisher_subscriptions (user_id, publisher_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(reader))
        .bind(i64::from(publisher))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unsubscribe_publisher(
        &self,
        reader: UserId,
        publisher: PublisherId,
    ) -> DomainResult<()> {
        sqlx::query("DELETE FROM publisher_subscriptions WHERE user_id = $1 AND publisher_id = $2")
            .bind(i64::from(reader))
            .bind(i64::from(publisher))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn follow_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO journalist_subscriptions (user_id, journalist_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(reader))
        .bind(i64::from(journalist))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unfollow_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()> {
        sqlx::query(
            "DELETE FROM journalist_subscriptions WHERE user_id = $1 AND journalist_id = $2",
        )
        .bind(i64::from(reader))
        .bind(i64::from(journalist))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn clear_for_user(&self, user: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM publisher_subscriptions WHERE user_id = $1")
            .bind(i64::from(user))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        sqlx::query("DELETE FROM journalist_subscriptions WHERE user_id = $1")
            .bind(i64::from(user))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn publisher_subscribers(&self, publisher: PublisherId) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT u.id, u.username, u.email, u.password_hash, u.role, u.created_at
             FROM users u
             JOIN publisher_subscriptions ps ON ps.user_id = u.id
             WHERE ps.publisher_id = $1
             ORDER BY u.id",
        )
        .bind(i64::from(publisher))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn journalist_followers(&self, journalist: UserId) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT u.id, u.username, u.email, u.password_hash, u.role, u.created_at
             FROM users u
             JOIN journalist_subscriptions js ON js.user_id = u.id
             WHERE js.journalist_id = $1
             ORDER BY u.id",
        )
        .bind(i64::from(journalist))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
