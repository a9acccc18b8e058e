use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::modules::program::{
    application::ports::{Clock, ImageValidationService},
    domain::{Program, ProgramRepository},
};
use crate::modules::season::SeasonBucket;
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    utils::TimedOperation,
};

use super::{query::GetAnnictInfoQuery, result::AnnictInfoOutput};

/// Use case handler that gathers today's programs and the season's library entries
pub struct AnnictInfoGetter {
    repository: Arc<dyn ProgramRepository>,
    validator: Arc<dyn ImageValidationService>,
    clock: Arc<dyn Clock>,
    validation_concurrency: usize,
}

impl AnnictInfoGetter {
    pub fn new(
        repository: Arc<dyn ProgramRepository>,
        validator: Arc<dyn ImageValidationService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            validator,
            clock,
            validation_concurrency: 1,
        }
    }

    /// Allow up to `limit` image checks in flight at once
    pub fn with_validation_concurrency(mut self, limit: usize) -> Self {
        self.validation_concurrency = limit.max(1);
        self
    }

    /// Validate every image, clearing the ones that fail. Order is preserved.
    async fn validate_images(
        &self,
        cancel: &CancellationToken,
        programs: Vec<Program>,
    ) -> AppResult<Vec<Program>> {
        let validator = &self.validator;

        let validated: Vec<Program> = stream::iter(programs)
            .map(|mut program| async move {
                if let Some(url) = program.image_url().map(str::to_owned) {
                    let check = validator.validate_url(cancel, &url).await;
                    if !check.is_valid {
                        log::debug!(
                            "Dropping image for '{}': {} failed validation",
                            program.work.title,
                            url
                        );
                        program.invalidate_image();
                    }
                }
                program
            })
            .buffered(self.validation_concurrency)
            .collect()
            .await;

        if cancel.is_cancelled() {
            return Err(AppError::Cancelled(
                "image validation aborted".to_string(),
            ));
        }

        Ok(validated)
    }
}

#[async_trait]
impl UseCase<GetAnnictInfoQuery, AnnictInfoOutput> for AnnictInfoGetter {
    async fn execute(&self, query: GetAnnictInfoQuery) -> AppResult<AnnictInfoOutput> {
        let timer = TimedOperation::new("Annict info aggregation");
        let cancel = &query.cancel;
        let now = self.clock.now();

        let programs = self
            .repository
            .fetch_today_programs(cancel)
            .await
            .map_err(|e| e.with_context("failed to find today's programs"))?;

        let fetched = programs.len();
        let todays_programs: Vec<Program> = programs
            .into_iter()
            .filter(|p| p.airs_on_same_date(&now))
            .collect();
        log::debug!(
            "Kept {} of {} programs airing today",
            todays_programs.len(),
            fetched
        );

        let today_programs = self.validate_images(cancel, todays_programs).await?;

        let season = SeasonBucket::containing(&now);
        let entries = self
            .repository
            .fetch_library_entries(cancel, &season)
            .await
            .map_err(|e| e.with_context("failed to find library entries"))?;

        let library_entries = self.validate_images(cancel, entries).await?;

        timer.finish_with_info(&format!(
            "{} today, {} library entries for {}",
            today_programs.len(),
            library_entries.len(),
            season
        ));

        Ok(AnnictInfoOutput::new(today_programs, library_entries))
    }
}
