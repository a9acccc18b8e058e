pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{Bot, MentionEvent, ProgramPresenter, SlackProgramPresenter};
pub use domain::{Block, TextObject};
pub use infrastructure::{ChatTransport, SlackWebClient};
