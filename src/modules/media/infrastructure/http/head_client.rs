//! HTTP HEAD transport used for image validation

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, redirect, Client};
use std::time::Duration;

use crate::modules::media::domain::HeadResponse;
use crate::shared::errors::{AppError, AppResult};

/// Issues HEAD requests without following redirects
#[async_trait]
pub trait HeadClient: Send + Sync {
    async fn head(&self, url: &str) -> AppResult<HeadResponse>;
}

/// reqwest-based `HeadClient`: redirects are returned as-is, never followed
pub struct NoRedirectHttpClient {
    client: Client,
}

impl NoRedirectHttpClient {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HeadClient for NoRedirectHttpClient {
    async fn head(&self, url: &str) -> AppResult<HeadResponse> {
        let response = self.client.head(url).send().await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        Ok(HeadResponse::new(response.status().as_u16(), content_type))
    }
}
