// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{notifications::NotificationService, ports::time::Clock},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        publisher::PublisherRepository,
        user::UserRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) notifier: Arc<NotificationService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        notifier: Arc<NotificationService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            publisher_repo,
            notifier,
            clock,
        }
    }
}
