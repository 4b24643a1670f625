// src/application/queries/articles/subscribed.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::user::Role,
};

impl ArticleQueryService {
    /// Approved articles reachable through the caller's subscriptions,
    /// newest first. Non-readers get an empty list rather than an error;
    /// the feed simply has nothing for them.
    pub async fn subscribed_articles(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        if actor.role != Role::Reader {
            return Ok(Vec::new());
        }

        let articles = self.read_repo.list_subscribed(actor.id).await?;
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }
}
