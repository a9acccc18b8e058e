//! Base trait for all use cases
//!
//! A use case receives one command value and produces one result. The
//! command carries everything the invocation needs, including its
//! cancellation token, so handlers stay stateless across calls.
//!
//! # Example
//!
//! ```ignore
//! struct GetAnnictInfoQuery {
//!     cancel: CancellationToken,
//! }
//!
//! #[async_trait]
//! impl UseCase<GetAnnictInfoQuery, AnnictInfoOutput> for AnnictInfoGetter {
//!     async fn execute(&self, query: GetAnnictInfoQuery) -> AppResult<AnnictInfoOutput> {
//!         // Use case logic here
//!     }
//! }
//! ```
use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult>: Send + Sync {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}
