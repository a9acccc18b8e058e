//! Process configuration loaded from environment variables (`.env` fallback)

use std::env;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_ANNICT_ENDPOINT: &str = "https://api.annict.com/graphql";
pub const DEFAULT_LIMIT_NUM_TO_DISPLAY: usize = 5;
pub const DEFAULT_IMAGE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_IMAGE_CHECK_CONCURRENCY: usize = 4;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct Config {
    pub slack_bot_token: String,
    pub slack_channel_id: Option<String>,
    pub slack_bot_user_id: Option<String>,
    pub annict_token: String,
    pub annict_endpoint: String,
    pub annict_limit_num_to_display: usize,
    pub log_level: String,
    pub is_development: bool,
    pub image_check_timeout: Duration,
    pub image_check_concurrency: usize,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first if present
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Error loading .env file: {}", e);
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| {
                AppError::ConfigError(format!("{} environment variable not found", key))
            })
        };

        Ok(Self {
            slack_bot_token: required("SLACK_BOT_TOKEN")?,
            slack_channel_id: get("SLACK_CHANNEL_ID"),
            slack_bot_user_id: get("SLACK_BOT_USER_ID"),
            annict_token: required("ANNICT_ACCESS_TOKEN")?,
            annict_endpoint: get("ANNICT_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ANNICT_ENDPOINT.to_string()),
            annict_limit_num_to_display: parse_or(
                "ANNICT_LIMIT_NUM_TO_DISPLAY",
                get("ANNICT_LIMIT_NUM_TO_DISPLAY"),
                DEFAULT_LIMIT_NUM_TO_DISPLAY,
            )?,
            log_level: get("LOG_LEVEL")
                .unwrap_or_else(|| "info".to_string())
                .to_lowercase(),
            is_development: parse_bool("IS_DEVELOPMENT", get("IS_DEVELOPMENT"))?,
            image_check_timeout: match get("IMAGE_CHECK_TIMEOUT") {
                Some(raw) => parse_duration("IMAGE_CHECK_TIMEOUT", &raw)?,
                None => DEFAULT_IMAGE_CHECK_TIMEOUT,
            },
            image_check_concurrency: parse_or(
                "IMAGE_CHECK_CONCURRENCY",
                get("IMAGE_CHECK_CONCURRENCY"),
                DEFAULT_IMAGE_CHECK_CONCURRENCY,
            )?
            .max(1),
            request_timeout: match get("REQUEST_TIMEOUT") {
                Some(raw) => parse_duration("REQUEST_TIMEOUT", &raw)?,
                None => DEFAULT_REQUEST_TIMEOUT,
            },
        })
    }
}

fn parse_or(key: &str, raw: Option<String>, default: usize) -> AppResult<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().map_err(|_| {
            AppError::ConfigError(format!(
                "{} must be a non-negative integer, got '{}'",
                key, value
            ))
        }),
        None => Ok(default),
    }
}

fn parse_bool(key: &str, raw: Option<String>) -> AppResult<bool> {
    match raw.as_deref().map(|v| v.trim().to_lowercase()) {
        None => Ok(false),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(v) => Err(AppError::ConfigError(format!(
            "{} must be a boolean, got '{}'",
            key, v
        ))),
    }
}

/// Parse durations such as `5s`, `500ms` or `2m`; a bare number is seconds
fn parse_duration(key: &str, raw: &str) -> AppResult<Duration> {
    let value = raw.trim();
    let invalid =
        || AppError::ConfigError(format!("{} has an invalid duration '{}'", key, raw));

    let (number, unit) = match value.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => value.split_at(idx),
        None => (value, "s"),
    };
    let amount: u64 = number.parse().map_err(|_| invalid())?;

    match unit {
        "ms" => Ok(Duration::from_millis(amount)),
        "s" => Ok(Duration::from_secs(amount)),
        "m" => amount
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("SLACK_BOT_TOKEN", "xoxb-test"),
            ("ANNICT_ACCESS_TOKEN", "annict-test"),
        ]))
        .unwrap();

        assert_eq!(config.annict_endpoint, DEFAULT_ANNICT_ENDPOINT);
        assert_eq!(config.annict_limit_num_to_display, 5);
        assert_eq!(config.log_level, "info");
        assert!(!config.is_development);
        assert_eq!(config.image_check_timeout, Duration::from_secs(5));
        assert_eq!(config.image_check_concurrency, 4);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert!(config.slack_channel_id.is_none());
    }

    #[test]
    fn test_missing_required_key_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[("SLACK_BOT_TOKEN", "xoxb-test")]));

        assert!(
            matches!(result, Err(AppError::ConfigError(msg)) if msg.contains("ANNICT_ACCESS_TOKEN"))
        );
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let result = Config::from_lookup(lookup_from(&[
            ("SLACK_BOT_TOKEN", "  "),
            ("ANNICT_ACCESS_TOKEN", "annict-test"),
        ]));

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_overrides_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("SLACK_BOT_TOKEN", "xoxb-test"),
            ("ANNICT_ACCESS_TOKEN", "annict-test"),
            ("SLACK_CHANNEL_ID", "C123"),
            ("ANNICT_LIMIT_NUM_TO_DISPLAY", "3"),
            ("LOG_LEVEL", "DEBUG"),
            ("IS_DEVELOPMENT", "true"),
            ("IMAGE_CHECK_TIMEOUT", "750ms"),
            ("IMAGE_CHECK_CONCURRENCY", "0"),
            ("REQUEST_TIMEOUT", "2m"),
        ]))
        .unwrap();

        assert_eq!(config.slack_channel_id.as_deref(), Some("C123"));
        assert_eq!(config.annict_limit_num_to_display, 3);
        assert_eq!(config.log_level, "debug");
        assert!(config.is_development);
        assert_eq!(config.image_check_timeout, Duration::from_millis(750));
        assert_eq!(config.image_check_concurrency, 1);
        assert_eq!(config.request_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_parse_duration_variants() {
        assert_eq!(parse_duration("T", "10").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration("T", "5s").unwrap(), Duration::from_secs(5));
        assert!(parse_duration("T", "5h").is_err());
        assert!(parse_duration("T", "s").is_err());
    }

    #[test]
    fn test_minutes_overflow_rejected() {
        let result = parse_duration("REQUEST_TIMEOUT", "307445734561825861m");

        assert!(
            matches!(result, Err(AppError::ConfigError(msg)) if msg.contains("REQUEST_TIMEOUT"))
        );
        assert_eq!(
            parse_duration("T", "307445734561825860m").unwrap(),
            Duration::from_secs(307445734561825860 * 60)
        );
    }

    #[test]
    fn test_invalid_number_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("SLACK_BOT_TOKEN", "xoxb-test"),
            ("ANNICT_ACCESS_TOKEN", "annict-test"),
            ("ANNICT_LIMIT_NUM_TO_DISPLAY", "five"),
        ]));

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
