// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    approved: bool,
    journalist_id: i64,
    publisher_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            approved: row.approved,
            journalist_id: UserId::new(row.journalist_id)?,
            publisher_id: PublisherId::new(row.publisher_id)?,
            created_at: row.created_at,
        })
    }
}

const ARTICLE_COLUMNS: &str = "id, title, body, approved, journalist_id, publisher_id, created_at";

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            approved,
            journalist_id,
            publisher_id,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, body, approved, journalist_id, publisher_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, title, body, approved, journalist_id, publisher_id, created_at",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(approved)
        .bind(i64::from(journalist_id))
        .bind(i64::from(publisher_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            body,
            approved,
        } = update;

        if title.is_none() && body.is_none() && approved.is_none() {
            return Err(DomainError::Validation("empty article update".into()));
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET ");
        let mut fields = builder.separated(", ");

        if let Some(title) = title {
            let title_str: String = title.into();
            fields.push("title = ");
            fields.push_bind_unseparated(title_str);
        }

        if let Some(body) = body {
            let body_str: String = body.into();
            fields.push("body = ");
            fields.push_bind_unseparated(body_str);
        }

        if let Some(approved) = approved {
            fields.push("approved = ");
            fields.push_bind_unseparated(approved);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING id, title, body, approved, journalist_id, publisher_id, created_at");

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_subscribed(&self, reader: UserId) -> DomainResult<Vec<Article>> {
        // DISTINCT collapses articles reachable through both subscription
        // paths into a single row.
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT DISTINCT a.id, a.title, a.body, a.approved, a.journalist_id, a.publisher_id, a.created_at
             FROM articles a
             LEFT JOIN publisher_subscriptions ps
               ON ps.publisher_id = a.publisher_id AND ps.user_id = $1
             LEFT JOIN journalist_subscriptions js
               ON js.journalist_id = a.journalist_id AND js.user_id = $1
             WHERE a.approved
               AND (ps.user_id IS NOT NULL OR js.user_id IS NOT NULL)
             ORDER BY a.created_at DESC, a.id DESC",
        )
        .bind(i64::from(reader))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}
