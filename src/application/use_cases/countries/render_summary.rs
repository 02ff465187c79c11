//! Render Summary Use Case
//!
//! Snapshots the store and regenerates the persisted summary image.
//! Failures leave the previous artifact untouched.

use std::sync::Arc;

use crate::domain::gateways::{CountryRepository, SummaryArtifactStore, SummaryRenderer};
use crate::domain::models::summary::SummarySnapshot;
use crate::shared::errors::UseCaseError;

/// Ranking depth of the rendered top-GDP list
const TOP_GDP_LIMIT: u32 = 5;

/// Use case for regenerating the summary image
pub struct RenderSummaryUseCase {
    country_repository: Arc<dyn CountryRepository>,
    renderer: Arc<dyn SummaryRenderer>,
    artifact_store: Arc<dyn SummaryArtifactStore>,
}

impl RenderSummaryUseCase {
    /// Create a new RenderSummaryUseCase
    #[must_use]
    pub fn new(
        country_repository: Arc<dyn CountryRepository>,
        renderer: Arc<dyn SummaryRenderer>,
        artifact_store: Arc<dyn SummaryArtifactStore>,
    ) -> Self {
        Self {
            country_repository,
            renderer,
            artifact_store,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the snapshot reads fail, or
    /// `UseCaseError::Render` if drawing or persisting fails.
    pub async fn execute(&self) -> Result<(), UseCaseError> {
        let snapshot = SummarySnapshot {
            total_countries: self.country_repository.count().await?,
            top_by_gdp: self.country_repository.top_by_gdp(TOP_GDP_LIMIT).await?,
            last_refreshed_at: self.country_repository.most_recent_refresh().await?,
        };

        let bytes = self.renderer.render(&snapshot).map_err(UseCaseError::Render)?;
        self.artifact_store
            .store(&bytes)
            .await
            .map_err(UseCaseError::Render)?;

        tracing::info!(
            total = snapshot.total_countries,
            "Summary image regenerated"
        );
        Ok(())
    }
}
