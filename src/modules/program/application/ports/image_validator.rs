use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Outcome of checking one image URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCheck {
    pub is_valid: bool,
    /// The URL that passed validation; empty when invalid
    pub validated_url: String,
}

impl ImageCheck {
    pub fn valid(url: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            validated_url: url.into(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            validated_url: String::new(),
        }
    }
}

/// Port for checking that an image URL points at a live, non-redirecting image
///
/// Implementations never fail: every problem, including cancellation, is an
/// invalid result.
#[async_trait]
pub trait ImageValidationService: Send + Sync {
    async fn validate_url(&self, cancel: &CancellationToken, url: &str) -> ImageCheck;
}
