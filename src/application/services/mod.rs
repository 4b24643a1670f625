// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, publishers::PublisherCommandService,
            subscriptions::SubscriptionCommandService, users::UserCommandService,
        },
        notifications::NotificationService,
        ports::{ClockPort, MailSenderPort, PasswordHasherPort, SocialPosterPort, TokenManagerPort},
        queries::{articles::ArticleQueryService, users::UserQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

pub struct ApplicationDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub publisher_repo: Arc<dyn PublisherRepository>,
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub subscription_repo: Arc<dyn SubscriptionRepository>,
    pub password_hasher: Arc<PasswordHasherPort>,
    pub token_manager: Arc<TokenManagerPort>,
    pub clock: Arc<ClockPort>,
    pub mailer: Arc<MailSenderPort>,
    pub social: Arc<SocialPosterPort>,
    pub mail_sender_address: String,
}

pub struct ApplicationServices {
    pub user_commands: UserCommandService,
    pub publisher_commands: PublisherCommandService,
    pub subscription_commands: SubscriptionCommandService,
    pub article_commands: ArticleCommandService,
    pub article_queries: ArticleQueryService,
    pub user_queries: UserQueryService,
    token_manager: Arc<TokenManagerPort>,
}

impl ApplicationServices {
    pub fn new(deps: ApplicationDependencies) -> Self {
        let notifier = Arc::new(NotificationService::new(
            deps.subscription_repo.clone(),
            deps.mailer,
            deps.social,
            deps.mail_sender_address,
        ));

        Self {
            user_commands: UserCommandService::new(
                deps.user_repo.clone(),
                deps.subscription_repo.clone(),
                deps.password_hasher,
                deps.token_manager.clone(),
                deps.clock.clone(),
            ),
            publisher_commands: PublisherCommandService::new(
                deps.publisher_repo.clone(),
                deps.user_repo.clone(),
                deps.clock.clone(),
            ),
            subscription_commands: SubscriptionCommandService::new(
                deps.subscription_repo,
                deps.publisher_repo.clone(),
                deps.user_repo.clone(),
            ),
            article_commands: ArticleCommandService::new(
                deps.article_write_repo,
                deps.article_read_repo.clone(),
                deps.user_repo.clone(),
                deps.publisher_repo,
                notifier,
                deps.clock,
            ),
            article_queries: ArticleQueryService::new(deps.article_read_repo),
            user_queries: UserQueryService::new(deps.user_repo),
            token_manager: deps.token_manager,
        }
    }

    pub fn token_manager(&self) -> &TokenManagerPort {
        self.token_manager.as_ref()
    }
}
