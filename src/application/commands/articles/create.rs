// src/application/commands/articles/create.rs
use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        publisher::PublisherId,
        user::{Role, UserId},
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub publisher_id: i64,
    /// An editor may author on behalf of a journalist; a journalist always
    /// authors as themselves.
    pub journalist_id: Option<i64>,
    pub approved: bool,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;
        if command.approved {
            ensure_capability(actor, "articles", "approve")?;
        }

        let journalist_id = self.resolve_journalist(actor, command.journalist_id).await?;

        let publisher_id = PublisherId::new(command.publisher_id)?;
        self.publisher_repo
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;

        let article = self
            .write_repo
            .insert(NewArticle {
                title: ArticleTitle::new(command.title)?,
                body: ArticleBody::new(command.body)?,
                approved: command.approved,
                journalist_id,
                publisher_id,
                created_at: self.clock.now(),
            })
            .await?;

        // Runs through the transition detector with created=true, which
        // never fires: even an article born approved stays silent.
        self.notifier.article_saved(&article, true).await?;

        Ok(article.into())
    }

    async fn resolve_journalist(
        &self,
        actor: &AuthenticatedUser,
        journalist_id: Option<i64>,
    ) -> ApplicationResult<UserId> {
        let id = match journalist_id {
            None if actor.role == Role::Journalist => return Ok(actor.id),
            None => {
                return Err(ApplicationError::validation(
                    "journalist_id is required unless the author is a journalist",
                ));
            }
            Some(id) => UserId::new(id)?,
        };

        let journalist = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("journalist not found"))?;

        if journalist.role != Role::Journalist {
            return Err(ApplicationError::validation(format!(
                "user '{}' is not a journalist",
                journalist.username
            )));
        }

        Ok(journalist.id)
    }
}
