// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// One outbound mail delivery. The whole recipient set goes out in a
/// single send operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub recipients: Vec<String>,
}

/// Required channel: a failure here surfaces to the caller.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> ApplicationResult<()>;
}

/// Best-effort channel: callers catch and log failures instead of
/// propagating them. Implementations bound each attempt with a timeout.
#[async_trait]
pub trait SocialPoster: Send + Sync {
    async fn post(&self, text: &str) -> ApplicationResult<()>;
}
