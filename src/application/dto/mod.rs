// src/application/dto/mod.rs
pub mod articles;
pub mod auth;
pub mod publishers;
pub mod serde_time;
pub mod users;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use publishers::PublisherDto;
pub use users::{CapabilityView, UserDto, UserProfileDto};
