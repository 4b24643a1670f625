// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use newsdesk_core::application::dto::AuthenticatedUser;
use newsdesk_core::domain::article::{Article, ArticleBody, ArticleId, ArticleTitle};
use newsdesk_core::domain::publisher::{Publisher, PublisherId, PublisherName};
use newsdesk_core::domain::user::{
    EmailAddress, PasswordHash, Role, User, UserId, Username,
};

use super::mocks::time::fixed_now;

pub struct UserBuilder {
    id: i64,
    username: String,
    email: Option<String>,
    role: Role,
}

impl UserBuilder {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: None,
            role: Role::Reader,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: self.email.map(|e| EmailAddress::new(e).unwrap()),
            password_hash: PasswordHash::new("hash").unwrap(),
            role: self.role,
            created_at: fixed_now(),
        }
    }
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    body: String,
    approved: bool,
    journalist_id: i64,
    publisher_id: i64,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            body: "Test body".into(),
            approved: false,
            journalist_id: 1,
            publisher_id: 1,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn approved(mut self) -> Self {
        self.approved = true;
        self
    }

    pub fn journalist(mut self, id: i64) -> Self {
        self.journalist_id = id;
        self
    }

    pub fn publisher(mut self, id: i64) -> Self {
        self.publisher_id = id;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            approved: self.approved,
            journalist_id: UserId::new(self.journalist_id).unwrap(),
            publisher_id: PublisherId::new(self.publisher_id).unwrap(),
            created_at: self.created_at,
        }
    }
}

pub fn publisher(id: i64, name: &str) -> Publisher {
    Publisher {
        id: PublisherId::new(id).unwrap(),
        name: PublisherName::new(name).unwrap(),
        created_at: fixed_now(),
    }
}

/// 指定ロールの既定ケーパビリティを持つ認証済みユーザー
pub fn actor(id: i64, username: &str, role: Role) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}
