// Shared Kernel
// Cross-cutting pieces used by every bounded context

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod utils; // Shared utilities

pub use config::Config;
pub use errors::{AppError, AppResult};
