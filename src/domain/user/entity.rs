// src/domain/user/entity.rs
use crate::domain::user::value_objects::{EmailAddress, PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_email(&mut self, email: Option<EmailAddress>) {
        self.email = email;
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Option<EmailAddress>,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Option<EmailAddress>,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            role,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub role: Option<Role>,
    pub email: Option<EmailAddress>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            role: None,
            email: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }
}
