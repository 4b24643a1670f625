// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A news article. The journalist and publisher references are fixed at
/// creation; there is no reassignment workflow.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub approved: bool,
    pub journalist_id: UserId,
    pub publisher_id: PublisherId,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn approve(&mut self) {
        self.approved = true;
    }

    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody) {
        self.title = title;
        self.body = body;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub approved: bool,
    pub journalist_id: UserId,
    pub publisher_id: PublisherId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub body: Option<ArticleBody>,
    pub approved: Option<bool>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            body: None,
            approved: None,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_approved(mut self, approved: bool) -> Self {
        self.approved = Some(approved);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            body: ArticleBody::new("body").unwrap(),
            approved: false,
            journalist_id: UserId::new(1).unwrap(),
            publisher_id: PublisherId::new(1).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn approve_sets_flag() {
        let mut article = sample_article();
        article.approve();
        assert!(article.approved);
    }

    #[test]
    fn set_content_replaces_fields() {
        let mut article = sample_article();
        article.set_content(
            ArticleTitle::new("new title").unwrap(),
            ArticleBody::new("new body").unwrap(),
        );
        assert_eq!(article.title.as_str(), "new title");
        assert_eq!(article.body.as_str(), "new body");
    }
}
