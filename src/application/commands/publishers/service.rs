// src/application/commands/publishers/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{publisher::PublisherRepository, user::UserRepository};

pub struct PublisherCommandService {
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PublisherCommandService {
    pub fn new(
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            publisher_repo,
            user_repo,
            clock,
        }
    }
}
