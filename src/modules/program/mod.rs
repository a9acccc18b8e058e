pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{AnnictInfoGetter, AnnictInfoOutput, GetAnnictInfoQuery};
pub use domain::{Channel, Episode, Program, ProgramRepository, Work};
