//! Annict GraphQL API client

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::shared::{
    errors::{AppError, AppResult},
    utils::LogContext,
};

use super::{
    models::{GetLibraryEntriesData, GetProgramsData, GraphQlRequest, GraphQlResponse},
    queries::{GET_LIBRARY_ENTRIES_QUERY, GET_PROGRAMS_QUERY},
};

const USER_AGENT: &str = "AnnictNotifier/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw query surface of the Annict API
///
/// `Ok(None)` means the response carried no `data`, which callers treat as
/// an empty result.
#[async_trait]
pub trait AnnictApi: Send + Sync {
    async fn get_programs(&self) -> AppResult<Option<GetProgramsData>>;

    async fn get_library_entries(
        &self,
        seasons: &[String],
    ) -> AppResult<Option<GetLibraryEntriesData>>;
}

pub struct AnnictClient {
    client: Client,
    endpoint: String,
}

impl AnnictClient {
    pub fn new(access_token: &str, endpoint: impl Into<String>) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", access_token)).map_err(|_| {
            AppError::ExternalServiceError(
                "Annict access token is not a valid header value".to_string(),
            )
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
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

    /// Execute a GraphQL query and decode its `data` field
    async fn execute_query<T>(
        &self,
        name: &str,
        query: &str,
        variables: Option<Value>,
    ) -> AppResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        LogContext::api_call("Annict", name, "started", None);
        let started = Instant::now();

        let request = GraphQlRequest {
            query: query.to_string(),
            variables,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::FetchError(format!("Annict request failed: {}", e)))?;

        Self::handle_response_status(response.status())?;

        let body: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to parse Annict response: {}", e)))?;

        // Handle GraphQL errors
        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            let error_messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            warn!(
                "Annict {} returned GraphQL errors: {:?}",
                name, error_messages
            );
            return Err(AppError::FetchError(format!(
                "Annict GraphQL errors: {}",
                error_messages.join(", ")
            )));
        }

        LogContext::api_call(
            "Annict",
            name,
            "succeeded",
            Some(started.elapsed().as_millis() as u64),
        );
        if body.data.is_none() {
            debug!("Annict {} response contained no data", name);
        }

        Ok(body.data)
    }

    fn handle_response_status(status: StatusCode) -> AppResult<()> {
        if status.is_success() {
            return Ok(());
        }

        let reason = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "check ANNICT_ACCESS_TOKEN",
            StatusCode::TOO_MANY_REQUESTS => "rate limited",
            s if s.is_server_error() => "service unavailable",
            _ => "unexpected status",
        };
        Err(AppError::FetchError(format!("Annict returned HTTP {} ({})", status, reason)))
    }
}

#[async_trait]
impl AnnictApi for AnnictClient {
    async fn get_programs(&self) -> AppResult<Option<GetProgramsData>> {
        self.execute_query("GetPrograms", GET_PROGRAMS_QUERY, None)
            .await
    }

    async fn get_library_entries(
        &self,
        seasons: &[String],
    ) -> AppResult<Option<GetLibraryEntriesData>> {
        let variables = json!({ "seasons": seasons });
        self.execute_query(
            "GetLibraryEntries",
            GET_LIBRARY_ENTRIES_QUERY,
            Some(variables),
        )
        .await
    }
}
