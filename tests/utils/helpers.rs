/// Shared fakes for integration tests
///
/// Each fake records what it was asked to do so tests can assert on it.
use annict_notifier_lib::{
    modules::{
        media::{HeadClient, HeadResponse},
        notification::{Block, ChatTransport},
        program::{
            application::ports::{ImageCheck, ImageValidationService},
            infrastructure::adapters::annict::{
                models::{GetLibraryEntriesData, GetProgramsData},
                AnnictApi,
            },
        },
    },
    shared::{AppError, AppResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// Annict API answering from JSON fixtures
#[derive(Default)]
pub struct FixtureAnnictApi {
    pub programs_json: Option<String>,
    pub library_json: Option<String>,
    pub library_error: Option<AppError>,
    pub requested_seasons: Arc<Mutex<Vec<Vec<String>>>>,
    pub library_calls: Arc<Mutex<usize>>,
}

impl FixtureAnnictApi {
    pub fn new(programs_json: &str, library_json: &str) -> Self {
        Self {
            programs_json: Some(programs_json.to_string()),
            library_json: Some(library_json.to_string()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl AnnictApi for FixtureAnnictApi {
    async fn get_programs(&self) -> AppResult<Option<GetProgramsData>> {
        match &self.programs_json {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn get_library_entries(
        &self,
        seasons: &[String],
    ) -> AppResult<Option<GetLibraryEntriesData>> {
        *self.library_calls.lock().unwrap() += 1;
        self.requested_seasons.lock().unwrap().push(seasons.to_vec());
        if let Some(err) = &self.library_error {
            return Err(err.clone());
        }
        match &self.library_json {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}

/// HEAD client answering from a url → (status, content type) table; unknown URLs are 404
#[derive(Default)]
pub struct TableHeadClient {
    responses: HashMap<String, (u16, Option<String>)>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl TableHeadClient {
    pub fn respond(mut self, url: &str, status: u16, content_type: Option<&str>) -> Self {
        self.responses
            .insert(url.to_string(), (status, content_type.map(str::to_string)));
        self
    }
}

#[async_trait]
impl HeadClient for TableHeadClient {
    async fn head(&self, url: &str) -> AppResult<HeadResponse> {
        self.requested.lock().unwrap().push(url.to_string());
        Ok(match self.responses.get(url) {
            Some((status, content_type)) => HeadResponse::new(*status, content_type.as_deref()),
            None => HeadResponse::new(404, None),
        })
    }
}

/// Validator accepting a fixed set of URLs
pub struct AllowListValidator {
    pub allowed: Vec<String>,
}

#[async_trait]
impl ImageValidationService for AllowListValidator {
    async fn validate_url(&self, _cancel: &CancellationToken, url: &str) -> ImageCheck {
        if self.allowed.iter().any(|u| u == url) {
            ImageCheck::valid(url)
        } else {
            ImageCheck::invalid()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SentMessage {
    Text {
        channel: String,
        text: String,
    },
    Blocks {
        channel: String,
        fallback_text: String,
        blocks: Vec<Block>,
    },
}

/// Chat transport that keeps every message it was asked to send
#[derive(Default)]
pub struct RecordingChat {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl RecordingChat {
    pub fn messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for RecordingChat {
    async fn post_text(&self, channel: &str, text: &str) -> AppResult<()> {
        self.sent.lock().unwrap().push(SentMessage::Text {
            channel: channel.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn post_blocks(
        &self,
        channel: &str,
        fallback_text: &str,
        blocks: &[Block],
    ) -> AppResult<()> {
        self.sent.lock().unwrap().push(SentMessage::Blocks {
            channel: channel.to_string(),
            fallback_text: fallback_text.to_string(),
            blocks: blocks.to_vec(),
        });
        Ok(())
    }
}
