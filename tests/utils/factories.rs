/// Test data factories using builder pattern
///
/// Provides convenient methods to create programs with sensible defaults
use annict_notifier_lib::modules::{
    program::{Channel, Episode, Program, Work},
    season::{ReferenceDateTime, REFERENCE_TZ},
};
use chrono::TimeZone;

/// Instant in the reference timezone
pub fn jst(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> ReferenceDateTime {
    REFERENCE_TZ
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

pub struct ProgramFactory {
    title: String,
    official_site_url: Option<String>,
    image_url: Option<String>,
    episode_number: Option<i64>,
    episode_title: Option<String>,
    channel: String,
    start_time: Option<ReferenceDateTime>,
}

impl Default for ProgramFactory {
    fn default() -> Self {
        Self {
            title: "Test Anime".to_string(),
            official_site_url: None,
            image_url: None,
            episode_number: Some(1),
            episode_title: None,
            channel: "TOKYO MX".to_string(),
            start_time: None,
        }
    }
}

impl ProgramFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_official_site_url(mut self, url: &str) -> Self {
        self.official_site_url = Some(url.to_string());
        self
    }

    pub fn with_image_url(mut self, url: &str) -> Self {
        self.image_url = Some(url.to_string());
        self
    }

    pub fn with_episode(mut self, number: i64, title: &str) -> Self {
        self.episode_number = Some(number);
        self.episode_title = Some(title.to_string());
        self
    }

    pub fn with_channel(mut self, channel: &str) -> Self {
        self.channel = channel.to_string();
        self
    }

    pub fn airing_at(mut self, start: ReferenceDateTime) -> Self {
        self.start_time = Some(start);
        self
    }

    pub fn build(self) -> Program {
        Program::new(
            Work::new(self.title)
                .with_official_site_url(self.official_site_url)
                .with_image_url(self.image_url),
            Episode::from_parts(None, self.episode_number, self.episode_title),
            Channel::new(self.channel),
            self.start_time,
        )
    }
}
