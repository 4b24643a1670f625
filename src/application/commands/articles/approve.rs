// src/application/commands/articles/approve.rs
use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleUpdate},
};

pub struct ApproveArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Sets `approved`, persists, then fans out notifications. The state
    /// change is committed before any outbound call, so a mail transport
    /// failure surfaces to the caller with the article already approved.
    pub async fn approve_article(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "approve")?;

        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let updated = self
            .write_repo
            .update(ArticleUpdate::new(id).with_approved(true))
            .await?;

        self.notifier.article_saved(&updated, false).await?;

        Ok(updated.into())
    }
}
