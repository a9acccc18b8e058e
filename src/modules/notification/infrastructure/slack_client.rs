//! Slack Web API client for posting messages

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::modules::notification::domain::Block;
use crate::shared::{
    errors::{AppError, AppResult},
    utils::LogContext,
};

const POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outbound chat surface used by the bot
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_text(&self, channel: &str, text: &str) -> AppResult<()>;

    async fn post_blocks(
        &self,
        channel: &str,
        fallback_text: &str,
        blocks: &[Block],
    ) -> AppResult<()>;
}

#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    blocks: Option<&'a [Block]>,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct SlackWebClient {
    client: Client,
    endpoint: String,
}

impl SlackWebClient {
    pub fn new(bot_token: &str) -> AppResult<Self> {
        Self::with_endpoint(bot_token, POST_MESSAGE_URL)
    }

    pub fn with_endpoint(bot_token: &str, endpoint: impl Into<String>) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", bot_token)).map_err(|_| {
            AppError::ConfigError("SLACK_BOT_TOKEN is not a valid header value".to_string())
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn post_message(&self, request: &PostMessageRequest<'_>) -> AppResult<()> {
        LogContext::api_call("Slack", "chat.postMessage", "started", None);
        let started = Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::ChatError(format!("Slack request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Slack chat.postMessage returned HTTP {}", status);
            return Err(AppError::ChatError(format!("Slack returned HTTP {}", status)));
        }

        let body: PostMessageResponse = response
            .json()
            .await
            .map_err(|e| AppError::ChatError(format!("Failed to parse Slack response: {}", e)))?;
        Self::check_response(body)?;

        LogContext::api_call(
            "Slack",
            "chat.postMessage",
            "succeeded",
            Some(started.elapsed().as_millis() as u64),
        );
        debug!("Posted message to channel {}", request.channel);
        Ok(())
    }

    fn check_response(body: PostMessageResponse) -> AppResult<()> {
        if body.ok {
            return Ok(());
        }
        let reason = body.error.unwrap_or_else(|| "unknown_error".to_string());
        Err(AppError::ChatError(format!("chat.postMessage failed: {}", reason)))
    }
}

#[async_trait]
impl ChatTransport for SlackWebClient {
    async fn post_text(&self, channel: &str, text: &str) -> AppResult<()> {
        self.post_message(&PostMessageRequest {
            channel,
            text,
            blocks: None,
        })
        .await
    }

    async fn post_blocks(
        &self,
        channel: &str,
        fallback_text: &str,
        blocks: &[Block],
    ) -> AppResult<()> {
        self.post_message(&PostMessageRequest {
            channel,
            text: fallback_text,
            blocks: Some(blocks),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_payload_omits_blocks() {
        let request = PostMessageRequest {
            channel: "C123",
            text: "hello",
            blocks: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "channel": "C123", "text": "hello" })
        );
    }

    #[test]
    fn test_block_payload_carries_fallback_text() {
        let blocks = vec![Block::Divider];
        let request = PostMessageRequest {
            channel: "C123",
            text: "2024-10-18 のアニメ情報 + 未視聴",
            blocks: Some(&blocks),
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["text"], "2024-10-18 のアニメ情報 + 未視聴");
        assert_eq!(value["blocks"], json!([{ "type": "divider" }]));
    }

    #[test]
    fn test_not_ok_response_is_chat_error() {
        let body: PostMessageResponse =
            serde_json::from_str(r#"{ "ok": false, "error": "channel_not_found" }"#).unwrap();

        let err = SlackWebClient::check_response(body).unwrap_err();

        assert_eq!(
            err,
            AppError::ChatError("chat.postMessage failed: channel_not_found".to_string())
        );
    }

    #[test]
    fn test_ok_response_accepted() {
        let body: PostMessageResponse =
            serde_json::from_str(r#"{ "ok": true, "ts": "1.2" }"#).unwrap();
        assert!(SlackWebClient::check_response(body).is_ok());
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert!(SlackWebClient::new("xoxb-bad\ntoken").is_err());
    }
}
