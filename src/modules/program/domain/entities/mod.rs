pub mod program;

pub use program::{non_empty, Channel, Episode, Program, Work, UNKNOWN_EPISODE_NUMBER};
