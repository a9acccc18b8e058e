use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::modules::program::application::ports::{ImageCheck, ImageValidationService};
use crate::shared::config::DEFAULT_IMAGE_CHECK_TIMEOUT;

use super::head_client::HeadClient;

/// Checks image URLs with a bounded HEAD request
///
/// Valid only for a 2xx response whose content type starts with `image/`.
/// Redirects, other statuses, transport errors, timeouts and cancellation all
/// count as invalid and are only logged.
pub struct HttpImageValidator {
    http_client: Arc<dyn HeadClient>,
    timeout: Duration,
}

impl HttpImageValidator {
    pub fn new(http_client: Arc<dyn HeadClient>) -> Self {
        Self::with_timeout(http_client, DEFAULT_IMAGE_CHECK_TIMEOUT)
    }

    pub fn with_timeout(http_client: Arc<dyn HeadClient>, timeout: Duration) -> Self {
        Self {
            http_client,
            timeout,
        }
    }
}

#[async_trait]
impl ImageValidationService for HttpImageValidator {
    async fn validate_url(&self, cancel: &CancellationToken, url: &str) -> ImageCheck {
        if url.is_empty() {
            return ImageCheck::invalid();
        }

        let request = tokio::time::timeout(self.timeout, self.http_client.head(url));

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("Image check for {} cancelled", url);
                return ImageCheck::invalid();
            }
            outcome = request => outcome,
        };

        let response = match outcome {
            Err(_) => {
                log::debug!(
                    "HEAD request for image {} timed out after {:?}",
                    url,
                    self.timeout
                );
                return ImageCheck::invalid();
            }
            Ok(Err(e)) => {
                log::warn!("HEAD request failed for image {}: {}", url, e);
                return ImageCheck::invalid();
            }
            Ok(Ok(response)) => response,
        };

        if response.is_live_image() {
            log::debug!(
                "Valid image URL {} (Status: {}, Type: {:?})",
                url,
                response.status,
                response.content_type
            );
            return ImageCheck::valid(url);
        }

        if response.is_success() {
            log::debug!(
                "URL {} has non-image Content-Type: {:?}",
                url,
                response.content_type
            );
        } else {
            log::debug!(
                "Invalid status code {} for image URL {}",
                response.status,
                url
            );
        }
        ImageCheck::invalid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::domain::HeadResponse;
    use crate::shared::errors::{AppError, AppResult};
    use std::sync::Mutex;

    const URL: &str = "https://img.example/cover.png";

    // Mock implementations for testing

    struct MockHeadClient {
        response: AppResult<HeadResponse>,
        delay: Option<Duration>,
        calls: Arc<Mutex<usize>>,
    }

    impl MockHeadClient {
        fn responding(status: u16, content_type: Option<&str>) -> Self {
            Self {
                response: Ok(HeadResponse::new(status, content_type)),
                delay: None,
                calls: Arc::new(Mutex::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(AppError::FetchError("connection refused".to_string())),
                delay: None,
                calls: Arc::new(Mutex::new(0)),
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::responding(200, Some("image/png"))
            }
        }
    }

    #[async_trait]
    impl HeadClient for MockHeadClient {
        async fn head(&self, _url: &str) -> AppResult<HeadResponse> {
            *self.calls.lock().unwrap() += 1;
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.response.clone()
        }
    }

    async fn check(client: MockHeadClient, url: &str) -> ImageCheck {
        HttpImageValidator::new(Arc::new(client))
            .validate_url(&CancellationToken::new(), url)
            .await
    }

    #[tokio::test]
    async fn test_png_is_valid_and_url_unchanged() {
        let result = check(MockHeadClient::responding(200, Some("image/png")), URL).await;

        assert_eq!(result, ImageCheck::valid(URL));
        assert_eq!(result.validated_url, URL);
    }

    #[tokio::test]
    async fn test_not_found_is_invalid() {
        let result = check(MockHeadClient::responding(404, Some("image/png")), URL).await;
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn test_html_is_invalid() {
        let result = check(MockHeadClient::responding(200, Some("text/html")), URL).await;
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn test_redirect_is_invalid() {
        let result = check(MockHeadClient::responding(302, None), URL).await;
        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn test_transport_error_is_invalid() {
        let result = check(MockHeadClient::failing(), URL).await;
        assert_eq!(result, ImageCheck::invalid());
    }

    #[tokio::test]
    async fn test_empty_url_skips_request() {
        let client = MockHeadClient::responding(200, Some("image/png"));
        let calls = client.calls.clone();

        let result = check(client, "").await;

        assert!(!result.is_valid);
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_timeout_is_invalid() {
        let validator = HttpImageValidator::with_timeout(
            Arc::new(MockHeadClient::slow(Duration::from_secs(5))),
            Duration::from_millis(20),
        );

        let result = validator.validate_url(&CancellationToken::new(), URL).await;

        assert!(!result.is_valid);
    }

    #[tokio::test]
    async fn test_cancelled_token_is_invalid() {
        let validator =
            HttpImageValidator::new(Arc::new(MockHeadClient::slow(Duration::from_secs(5))));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = validator.validate_url(&cancel, URL).await;

        assert!(!result.is_valid);
    }
}
