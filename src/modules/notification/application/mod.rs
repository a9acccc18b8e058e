pub mod bot;
pub mod presenter;

pub use bot::{Bot, MentionEvent, TODAY_COMMAND};
pub use presenter::{escape_mrkdwn, ProgramPresenter, SlackProgramPresenter};
