pub mod slack_client;

pub use slack_client::{ChatTransport, SlackWebClient};
