//! Get Summary Image Use Case
//!
//! Serves the latest persisted summary artifact. A read failure is
//! indistinguishable from the artifact never having been generated, so
//! both report the image as missing.

use std::sync::Arc;

use crate::domain::gateways::SummaryArtifactStore;
use crate::shared::errors::UseCaseError;

/// Use case for reading the summary image
pub struct GetSummaryImageUseCase {
    artifact_store: Arc<dyn SummaryArtifactStore>,
}

impl GetSummaryImageUseCase {
    /// Create a new GetSummaryImageUseCase
    #[must_use]
    pub fn new(artifact_store: Arc<dyn SummaryArtifactStore>) -> Self {
        Self { artifact_store }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` when no artifact exists or it
    /// cannot be read.
    pub async fn execute(&self) -> Result<Vec<u8>, UseCaseError> {
        match self.artifact_store.load().await {
            Ok(Some(bytes)) => Ok(bytes),
            Ok(None) => Err(UseCaseError::NotFound {
                resource: "Summary image",
            }),
            Err(error) => {
                tracing::error!(%error, "Failed to read summary artifact");
                Err(UseCaseError::NotFound {
                    resource: "Summary image",
                })
            }
        }
    }
}
