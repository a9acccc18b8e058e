use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::{
    modules::{program::domain::entities::Program, season::SeasonBucket},
    shared::errors::AppResult,
};

/// Repository interface for the viewer's schedule on the metadata service
///
/// Both reads honor `cancel` and report it as `AppError::Cancelled`.
/// Transport or query failures come back as `AppError::FetchError`;
/// malformed records never fail a read.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// Unwatched programs currently scheduled for the viewer
    async fn fetch_today_programs(&self, cancel: &CancellationToken) -> AppResult<Vec<Program>>;

    /// Library entries for `season`, unset start times first, then latest start first
    async fn fetch_library_entries(
        &self,
        cancel: &CancellationToken,
        season: &SeasonBucket,
    ) -> AppResult<Vec<Program>>;
}
