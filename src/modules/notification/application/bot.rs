//! Mention dispatcher that answers chat commands with the Annict digest
//!
//! Events are consumed from a queue fed by whatever receives them from the
//! chat platform, and handled one at a time. Replies go out through a
//! [`ChatTransport`].

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::modules::notification::{
    application::presenter::ProgramPresenter, infrastructure::ChatTransport,
};
use crate::modules::program::{application::ports::Clock, AnnictInfoOutput, GetAnnictInfoQuery};
use crate::shared::{application::UseCase, config::DEFAULT_REQUEST_TIMEOUT, errors::AppResult};

/// Command word that requests the digest
pub const TODAY_COMMAND: &str = "today";

/// An inbound mention of the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionEvent {
    pub user: String,
    pub channel: String,
    pub text: String,
}

impl MentionEvent {
    pub fn new(
        user: impl Into<String>,
        channel: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            channel: channel.into(),
            text: text.into(),
        }
    }
}

pub struct Bot {
    info_getter: Arc<dyn UseCase<GetAnnictInfoQuery, AnnictInfoOutput>>,
    presenter: Arc<dyn ProgramPresenter>,
    transport: Arc<dyn ChatTransport>,
    clock: Arc<dyn Clock>,
    bot_user_id: Option<String>,
    request_timeout: Duration,
}

impl Bot {
    pub fn new(
        info_getter: Arc<dyn UseCase<GetAnnictInfoQuery, AnnictInfoOutput>>,
        presenter: Arc<dyn ProgramPresenter>,
        transport: Arc<dyn ChatTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            info_getter,
            presenter,
            transport,
            clock,
            bot_user_id: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Ignore mentions authored by this user id
    pub fn with_bot_user_id(mut self, bot_user_id: Option<String>) -> Self {
        self.bot_user_id = bot_user_id;
        self
    }

    /// Deadline applied to each digest request
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Process queued mentions until the queue closes or `cancel` fires
    pub async fn run(&self, cancel: CancellationToken, mut events: mpsc::Receiver<MentionEvent>) {
        log::info!("Starting mention handler loop");

        loop {
            let event = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    log::info!("Mention handler loop shutting down");
                    break;
                }
                event = events.recv() => event,
            };

            let Some(event) = event else {
                log::info!("Mention queue closed, stopping handler loop");
                break;
            };

            if let Err(e) = self.handle_mention(&cancel, &event).await {
                log::error!("Failed to reply in channel {}: {}", event.channel, e);
            }
        }
    }

    /// Handle one mention. Only a failure to post the reply is an error.
    pub async fn handle_mention(
        &self,
        cancel: &CancellationToken,
        event: &MentionEvent,
    ) -> AppResult<()> {
        log::info!(
            "Received mention from user {} in channel {} with text: {:?}",
            event.user,
            event.channel,
            event.text
        );

        if self.bot_user_id.as_deref() == Some(event.user.as_str()) {
            log::debug!("Ignoring mention from the bot itself");
            return Ok(());
        }

        let command = event.text.trim().to_lowercase();
        if command.contains(TODAY_COMMAND) {
            log::info!("Received command: '{}'", TODAY_COMMAND);
            return self.post_digest(cancel, &event.channel).await;
        }

        log::info!("Receive unknown command: {}", command);
        self.transport
            .post_text(
                &event.channel,
                &format!("Receive unknown command: {}", command),
            )
            .await
    }

    /// Build the digest and post it to `channel`
    ///
    /// An aggregation failure is reported to the channel as error text.
    pub async fn post_digest(&self, cancel: &CancellationToken, channel: &str) -> AppResult<()> {
        let request = cancel.child_token();
        let deadline = request.clone();
        let timeout = self.request_timeout;
        let timer = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(timeout) => {
                    log::warn!("Digest request exceeded {:?}, cancelling", timeout);
                    deadline.cancel();
                }
                _ = deadline.cancelled() => {}
            }
        });

        let result = self
            .info_getter
            .execute(GetAnnictInfoQuery::new(request.clone()))
            .await;
        request.cancel();
        timer.abort();

        match result {
            Ok(info) => {
                let now = self.clock.now();
                let blocks = self.presenter.format_combined_programs(
                    &info.today_programs,
                    &info.library_entries,
                    &now,
                );
                self.transport
                    .post_blocks(channel, &self.presenter.fallback_text(&now), &blocks)
                    .await
            }
            Err(e) => {
                log::error!("Error fetching Annict info: {}", e);
                self.transport
                    .post_text(channel, &self.presenter.format_error(&e))
                    .await
            }
        }
    }
}
