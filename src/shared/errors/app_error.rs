use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Chat error: {0}")]
    ChatError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl AppError {
    /// Prefix the message with `context` while keeping the variant.
    ///
    /// Variants that do not describe a metadata query are folded into
    /// `FetchError`, so callers of the aggregation only ever see a fetch
    /// failure or a cancellation.
    pub fn with_context(self, context: &str) -> Self {
        match self {
            AppError::Cancelled(msg) => AppError::Cancelled(format!("{}: {}", context, msg)),
            AppError::FetchError(msg) => AppError::FetchError(format!("{}: {}", context, msg)),
            other => AppError::FetchError(format!("{}: {}", context, other)),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::FetchError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::FetchError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            AppError::FetchError(format!("HTTP {}: {}", status, err))
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else {
            AppError::FetchError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_cancellation_distinct() {
        let err = AppError::Cancelled("token cancelled".to_string()).with_context("fetching");

        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "Cancelled: fetching: token cancelled");
    }

    #[test]
    fn test_with_context_wraps_fetch_error() {
        let err = AppError::FetchError("HTTP 500".to_string()).with_context("failed to find");

        assert_eq!(
            err,
            AppError::FetchError("failed to find: HTTP 500".to_string())
        );
    }

    #[test]
    fn test_with_context_folds_other_variants_into_fetch_error() {
        let err = AppError::SerializationError("bad json".to_string()).with_context("decode");

        assert_eq!(
            err,
            AppError::FetchError("decode: Serialization error: bad json".to_string())
        );
    }
}
