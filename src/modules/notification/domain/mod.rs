pub mod blocks;

pub use blocks::{Block, TextObject};
