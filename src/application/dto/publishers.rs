// src/application/dto/publishers.rs
use crate::domain::publisher::Publisher;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherDto {
    pub id: i64,
    pub name: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Publisher> for PublisherDto {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name.into(),
            created_at: publisher.created_at,
        }
    }
}
