// src/application/notifications/service.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        ports::notification::{MailSender, OutgoingEmail, SocialPoster},
    },
    domain::{
        article::{Article, specifications::approval_notification_due},
        subscription::SubscriptionRepository,
    },
};

/// Fans an approved article out to its notifiable readers.
///
/// The email channel is required: when the resolved recipient set is
/// non-empty, exactly one send goes out and a transport failure
/// propagates to the caller. The social channel is best-effort: it is
/// always attempted once and any failure is logged and swallowed.
pub struct NotificationService {
    subscriptions: Arc<dyn SubscriptionRepository>,
    mailer: Arc<dyn MailSender>,
    social: Arc<dyn SocialPoster>,
    sender: String,
}

impl NotificationService {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        mailer: Arc<dyn MailSender>,
        social: Arc<dyn SocialPoster>,
        sender: String,
    ) -> Self {
        Self {
            subscriptions,
            mailer,
            social,
            sender,
        }
    }

    /// Entry point for every article save. `created` distinguishes a fresh
    /// insert from an update of an existing record; only the latter may
    /// fire.
    pub async fn article_saved(&self, article: &Article, created: bool) -> ApplicationResult<()> {
        if !approval_notification_due(article, created) {
            return Ok(());
        }
        self.notify_approved(article).await
    }

    pub async fn notify_approved(&self, article: &Article) -> ApplicationResult<()> {
        let recipients = self.resolve_recipients(article).await?;

        if recipients.is_empty() {
            tracing::debug!(article_id = i64::from(article.id), "no notifiable readers");
        } else {
            tracing::info!(
                article_id = i64::from(article.id),
                recipients = ?recipients,
                "sending approval notification emails"
            );
            let email = OutgoingEmail {
                subject: format!("New Article Approved: {}", article.title.as_str()),
                body: article.body.as_str().to_owned(),
                from: self.sender.clone(),
                recipients: recipients.into_iter().collect(),
            };
            self.mailer.send(&email).await?;
        }

        tracing::info!(title = %article.title, "posting approved article to social feed");
        if let Err(err) = self.social.post(article.title.as_str()).await {
            tracing::warn!(error = %err, "social post failed");
        }

        Ok(())
    }

    /// Union of the publisher's subscribers and the journalist's followers,
    /// keeping only users with an email address and deduplicating by the
    /// address value. The ordered set keeps iteration deterministic.
    pub async fn resolve_recipients(&self, article: &Article) -> ApplicationResult<BTreeSet<String>> {
        let mut recipients = BTreeSet::new();

        for user in self
            .subscriptions
            .publisher_subscribers(article.publisher_id)
            .await?
        {
            if let Some(email) = user.email {
                recipients.insert(email.into());
            }
        }

        for user in self
            .subscriptions
            .journalist_followers(article.journalist_id)
            .await?
        {
            if let Some(email) = user.email {
                recipients.insert(email.into());
            }
        }

        Ok(recipients)
    }
}
