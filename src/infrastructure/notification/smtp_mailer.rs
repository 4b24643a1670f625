// src/infrastructure/notification/smtp_mailer.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notification::{MailSender, OutgoingEmail},
};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailSender {
    pub fn new(
        host: &str,
        port: u16,
        credentials: Option<(String, String)>,
    ) -> ApplicationResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .port(port);

        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, email: &OutgoingEmail) -> ApplicationResult<()> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|err| ApplicationError::infrastructure(format!("invalid sender: {err}")))?;

        let mut builder = Message::builder()
            .from(from)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_PLAIN);

        for recipient in &email.recipients {
            let to: Mailbox = recipient.parse().map_err(|err| {
                ApplicationError::infrastructure(format!("invalid recipient: {err}"))
            })?;
            builder = builder.to(to);
        }

        let message = builder
            .body(email.body.clone())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(())
    }
}
