//! Slack Block Kit layout blocks
//!
//! Only the block kinds the digest uses are modelled. Each variant serializes
//! to the JSON shape `chat.postMessage` expects.

use serde::Serialize;

/// Text composition object used inside header and section blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String, emoji: bool },
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        TextObject::PlainText {
            text: text.into(),
            emoji: true,
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        TextObject::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            TextObject::PlainText { text, .. } | TextObject::Mrkdwn { text } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: TextObject },
    Section { text: TextObject },
    Divider,
    Image { image_url: String, alt_text: String },
}

impl Block {
    pub fn header(text: impl Into<String>) -> Self {
        Block::Header {
            text: TextObject::plain(text),
        }
    }

    pub fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::mrkdwn(text),
        }
    }

    pub fn image(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Block::Image {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}
