// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;

use newsdesk_core::application::ApplicationResult;
use newsdesk_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use newsdesk_core::application::error::ApplicationError;
use newsdesk_core::application::ports::security::{PasswordHasher, TokenManager};

/// 寛容なパスワードハッシャー（大半のテストで使用）
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Ok("hash".into())
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<()> {
        Ok(())
    }
}

/// 厳密なパスワードハッシャー（ネガティブパステスト用）
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{}", password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{}", password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("bad password"))
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: "test-token".into(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, _token: &str) -> ApplicationResult<AuthenticatedUser> {
        Err(ApplicationError::unauthorized("invalid token"))
    }
}
