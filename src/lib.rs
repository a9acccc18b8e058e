pub mod modules;
pub mod shared;

use anyhow::Context;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use modules::{
    media::{HttpImageValidator, NoRedirectHttpClient},
    notification::{Bot, SlackProgramPresenter, SlackWebClient},
    program::{
        application::ports::SystemClock,
        infrastructure::adapters::annict::{AnnictClient, AnnictProgramRepository},
        AnnictInfoGetter,
    },
};
use shared::{utils::init_logger, AppResult, Config};

/// Wire the Annict, image-check and Slack adapters into a [`Bot`]
pub fn build_bot(config: &Config) -> AppResult<Bot> {
    let annict_client = Arc::new(AnnictClient::new(
        &config.annict_token,
        config.annict_endpoint.clone(),
    )?);
    let repository = Arc::new(AnnictProgramRepository::new(annict_client));

    let head_client = Arc::new(NoRedirectHttpClient::new(config.image_check_timeout)?);
    let validator = Arc::new(HttpImageValidator::with_timeout(
        head_client,
        config.image_check_timeout,
    ));

    let clock = Arc::new(SystemClock);
    let info_getter = Arc::new(
        AnnictInfoGetter::new(repository, validator, clock.clone())
            .with_validation_concurrency(config.image_check_concurrency),
    );

    let presenter = Arc::new(SlackProgramPresenter::new(
        config.annict_limit_num_to_display,
    ));
    let transport = Arc::new(SlackWebClient::new(&config.slack_bot_token)?);

    Ok(Bot::new(info_getter, presenter, transport, clock)
        .with_bot_user_id(config.slack_bot_user_id.clone())
        .with_request_timeout(config.request_timeout))
}

/// Post one digest to `SLACK_CHANNEL_ID`. Ctrl-C cancels the request.
pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    let level = if config.is_development {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_logger(level);

    let channel = config
        .slack_channel_id
        .clone()
        .context("SLACK_CHANNEL_ID is required to post the digest")?;

    let bot = build_bot(&config).context("failed to initialize services")?;

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupt received, cancelling digest");
            on_signal.cancel();
        }
    });

    log::info!("Posting Annict digest to channel {}", channel);
    bot.post_digest(&cancel, &channel)
        .await
        .context("failed to post digest")?;
    log::info!("Digest posted");

    Ok(())
}
