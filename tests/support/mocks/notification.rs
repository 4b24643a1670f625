// tests/support/mocks/notification.rs
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use newsdesk_core::application::ApplicationResult;
use newsdesk_core::application::error::ApplicationError;
use newsdesk_core::application::ports::notification::{MailSender, OutgoingEmail, SocialPoster};

/// 送信されたメールをキャプチャするメーラー
#[derive(Clone, Default)]
pub struct CapturingMailer {
    pub sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl CapturingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_emails(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl MailSender for CapturingMailer {
    async fn send(&self, email: &OutgoingEmail) -> ApplicationResult<()> {
        self.sent.lock().expect("mutex poisoned").push(email.clone());
        Ok(())
    }
}

/// 常に失敗するメーラー（必須チャネルのエラー伝播テスト用）
#[derive(Clone, Default)]
pub struct FailingMailer;

#[async_trait]
impl MailSender for FailingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("smtp connection refused"))
    }
}

/// 投稿内容を記録するソーシャルポスター
#[derive(Clone, Default)]
pub struct RecordingSocialPoster {
    pub posts: Arc<Mutex<Vec<String>>>,
}

impl RecordingSocialPoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posted(&self) -> Vec<String> {
        self.posts.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl SocialPoster for RecordingSocialPoster {
    async fn post(&self, text: &str) -> ApplicationResult<()> {
        self.posts
            .lock()
            .expect("mutex poisoned")
            .push(text.to_owned());
        Ok(())
    }
}

/// 常に失敗するソーシャルポスター（ベストエフォート動作の検証用）
#[derive(Clone, Default)]
pub struct FailingSocialPoster {
    pub attempts: Arc<Mutex<u32>>,
}

impl FailingSocialPoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempt_count(&self) -> u32 {
        *self.attempts.lock().expect("mutex poisoned")
    }
}

#[async_trait]
impl SocialPoster for FailingSocialPoster {
    async fn post(&self, _text: &str) -> ApplicationResult<()> {
        *self.attempts.lock().expect("mutex poisoned") += 1;
        Err(ApplicationError::infrastructure("social endpoint timeout"))
    }
}
