// src/domain/publisher/entity.rs
use crate::domain::publisher::value_objects::{PublisherId, PublisherName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: PublisherName,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: PublisherName,
    pub created_at: DateTime<Utc>,
}
