// src/infrastructure/notification/social.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notification::SocialPoster,
};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SocialPostConfig {
    pub endpoint: String,
    pub bearer_token: Option<String>,
    pub timeout: Duration,
}

/// Posts article titles to a social endpoint. Each request is bounded by
/// the configured timeout so a slow upstream cannot stall the caller.
pub struct HttpSocialPoster {
    client: reqwest::Client,
    config: SocialPostConfig,
}

impl HttpSocialPoster {
    pub fn new(config: SocialPostConfig) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl SocialPoster for HttpSocialPoster {
    async fn post(&self, text: &str) -> ApplicationResult<()> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&json!({ "text": text }));

        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        response
            .error_for_status()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(())
    }
}
