// src/infrastructure/repositories/postgres_publisher.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::{
    NewPublisher, Publisher, PublisherId, PublisherName, PublisherRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPublisherRepository {
    pool: PgPool,
}

impl PostgresPublisherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PublisherRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PublisherRow> for Publisher {
    type Error = DomainError;

    fn try_from(row: PublisherRow) -> Result<Self, Self::Error> {
        Ok(Publisher {
            id: PublisherId::new(row.id)?,
            name: PublisherName::new(row.name)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl PublisherRepository for PostgresPublisherRepository {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let row = sqlx::query_as::<_, PublisherRow>(
            "INSERT INTO publishers (name, created_at)
             VALUES ($1, $2)
             RETURNING id, name, created_at",
        )
        .bind(publisher.name.as_str())
        .bind(publisher.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Publisher::try_from(row)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        let row = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, name, created_at FROM publishers WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Publisher::try_from).transpose()
    }

    async fn add_editor(&self, publisher: PublisherId, editor: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO publisher_editors (publisher_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(publisher))
        .bind(i64::from(editor))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn add_journalist(
        &self,
        publisher: PublisherId,
        journalist: UserId,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO publisher_journalists (publisher_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(publisher))
        .bind(i64::from(journalist))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}
