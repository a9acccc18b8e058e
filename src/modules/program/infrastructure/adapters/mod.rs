pub mod annict;

pub use annict::{AnnictClient, AnnictProgramRepository};
