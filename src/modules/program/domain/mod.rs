pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{Channel, Episode, Program, Work};
pub use repositories::ProgramRepository;
