// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleBody, ArticleId, ArticleTitle, ArticleUpdate,
        specifications::CanUpdateArticleSpec,
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !CanUpdateArticleSpec::new(&actor.capabilities, &article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the authoring journalist or an editor may update this article",
            ));
        }

        if command.title.is_none() && command.body.is_none() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let mut update = ArticleUpdate::new(id);
        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(body) = command.body {
            update = update.with_body(ArticleBody::new(body)?);
        }

        let updated = self.write_repo.update(update).await?;

        // Every update of an already-approved article notifies again; the
        // detector does not look at the previous value.
        self.notifier.article_saved(&updated, false).await?;

        Ok(updated.into())
    }
}
