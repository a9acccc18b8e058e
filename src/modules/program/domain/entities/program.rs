use crate::modules::season::{reference_time, ReferenceDateTime};

/// Placeholder episode label when the source gives neither text nor number
pub const UNKNOWN_EPISODE_NUMBER: &str = "不明";

/// Collapse empty strings to `None`; whitespace is kept as given
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// An anime work
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Work {
    pub title: String,
    pub official_site_url: Option<String>,
    /// Cleared when the image fails validation
    pub image_url: Option<String>,
}

impl Work {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            official_site_url: None,
            image_url: None,
        }
    }

    pub fn with_official_site_url(mut self, url: Option<String>) -> Self {
        self.official_site_url = non_empty(url);
        self
    }

    pub fn with_image_url(mut self, url: Option<String>) -> Self {
        self.image_url = non_empty(url);
        self
    }
}

/// An episode of a work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Display label such as "第1話"; never empty
    pub number_text: String,
    pub title: Option<String>,
}

impl Episode {
    /// Build an episode label from the pre-formatted text, falling back to
    /// the raw number and finally to [`UNKNOWN_EPISODE_NUMBER`]
    pub fn from_parts(
        number_text: Option<String>,
        number: Option<i64>,
        title: Option<String>,
    ) -> Self {
        let number_text = non_empty(number_text)
            .or_else(|| number.map(|n| format!("第{}話", n)))
            .unwrap_or_else(|| UNKNOWN_EPISODE_NUMBER.to_string());

        Self {
            number_text,
            title: non_empty(title),
        }
    }

    pub fn unknown() -> Self {
        Self::from_parts(None, None, None)
    }
}

impl Default for Episode {
    fn default() -> Self {
        Self::unknown()
    }
}

/// A broadcast channel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Channel {
    pub name: String,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A scheduled broadcast of an episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub work: Work,
    pub episode: Episode,
    pub channel: Channel,
    /// Always in the reference timezone; `None` when the source omits it or it fails to parse
    pub start_time: Option<ReferenceDateTime>,
}

impl Program {
    pub fn new(
        work: Work,
        episode: Episode,
        channel: Channel,
        start_time: Option<ReferenceDateTime>,
    ) -> Self {
        Self {
            work,
            episode,
            channel,
            start_time,
        }
    }

    /// Whether the program starts on the same reference-timezone date as `now`
    pub fn airs_on_same_date(&self, now: &ReferenceDateTime) -> bool {
        self.start_time
            .as_ref()
            .map(|start| reference_time::is_same_date(start, now))
            .unwrap_or(false)
    }

    pub fn image_url(&self) -> Option<&str> {
        self.work.image_url.as_deref()
    }

    /// Drop the image after it failed validation
    pub fn invalidate_image(&mut self) {
        self.work.image_url = None;
    }
}
