pub mod adapters;

pub use adapters::{AnnictClient, AnnictProgramRepository};
