use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::program::domain::{Program, ProgramRepository};
use crate::modules::season::SeasonBucket;
use crate::shared::errors::{AppError, AppResult};

use super::{
    client::AnnictApi,
    mapper::{sort_library_entries, AnnictMapper},
};

/// `ProgramRepository` backed by the Annict GraphQL API
pub struct AnnictProgramRepository {
    api: Arc<dyn AnnictApi>,
    mapper: AnnictMapper,
}

impl AnnictProgramRepository {
    pub fn new(api: Arc<dyn AnnictApi>) -> Self {
        Self {
            api,
            mapper: AnnictMapper::new(),
        }
    }

    /// Run `call` unless `cancel` fires first
    async fn cancellable<T, F>(cancel: &CancellationToken, operation: &str, call: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                Err(AppError::Cancelled(format!("{} was cancelled", operation)))
            }
            result = call => result,
        }
    }
}

#[async_trait]
impl ProgramRepository for AnnictProgramRepository {
    async fn fetch_today_programs(&self, cancel: &CancellationToken) -> AppResult<Vec<Program>> {
        log::debug!("Fetching unwatched programs from Annict API");

        let response = Self::cancellable(cancel, "GetPrograms", self.api.get_programs())
            .await
            .map_err(|e| {
                log::error!("Failed to call GetPrograms: {}", e);
                e.with_context("annict GetPrograms failed")
            })?;

        let Some(connection) = response
            .and_then(|data| data.viewer)
            .and_then(|viewer| viewer.programs)
        else {
            log::info!("No programs returned from Annict API (viewer or programs is null)");
            return Ok(Vec::new());
        };

        let programs: Vec<Program> = connection
            .into_present_nodes()
            .map(|node| self.mapper.map_program(node))
            .collect();

        log::info!(
            "Successfully fetched unwatched programs: {}",
            programs.len()
        );
        Ok(programs)
    }

    async fn fetch_library_entries(
        &self,
        cancel: &CancellationToken,
        season: &SeasonBucket,
    ) -> AppResult<Vec<Program>> {
        let seasons = vec![season.to_annict_slug()];
        log::debug!(
            "Fetching library entries from Annict API for season {}",
            season
        );

        let response = Self::cancellable(
            cancel,
            "GetLibraryEntries",
            self.api.get_library_entries(&seasons),
        )
        .await
        .map_err(|e| {
            log::error!("Failed to call GetLibraryEntries: {}", e);
            e.with_context("annict GetLibraryEntries failed")
        })?;

        let Some(connection) = response
            .and_then(|data| data.viewer)
            .and_then(|viewer| viewer.library_entries)
        else {
            log::info!(
                "No library entries returned from Annict API (viewer or libraryEntries is null)"
            );
            return Ok(Vec::new());
        };

        let mut programs: Vec<Program> = connection
            .into_present_nodes()
            .map(|node| self.mapper.map_library_entry(node))
            .collect();
        sort_library_entries(&mut programs);

        log::info!(
            "Successfully fetched library entries for {}: {}",
            season,
            programs.len()
        );
        Ok(programs)
    }
}
