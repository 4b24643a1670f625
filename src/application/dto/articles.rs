// src/application/dto/articles.rs
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub approved: bool,
    pub journalist_id: i64,
    pub publisher_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            body: article.body.into_inner(),
            approved: article.approved,
            journalist_id: article.journalist_id.into(),
            publisher_id: article.publisher_id.into(),
            created_at: article.created_at,
        }
    }
}
