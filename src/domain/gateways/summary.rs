//! Summary Rendering Ports
//!
//! Rendering turns a snapshot into image bytes; the artifact store keeps
//! exactly one persisted copy, overwritten on each successful render.

use async_trait::async_trait;

use crate::domain::models::summary::SummarySnapshot;
use crate::shared::errors::RenderError;

/// Produces the summary image bytes from a snapshot
pub trait SummaryRenderer: Send + Sync {
    /// Render the snapshot onto the fixed-size canvas.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` on any drawing or encoding failure.
    fn render(&self, snapshot: &SummarySnapshot) -> Result<Vec<u8>, RenderError>;
}

/// Persists and serves the single summary artifact
#[async_trait]
pub trait SummaryArtifactStore: Send + Sync {
    /// Overwrite the artifact; readers never observe a partial write.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Artifact` on filesystem failure; the previous
    /// artifact is left intact in that case.
    async fn store(&self, bytes: &[u8]) -> Result<(), RenderError>;

    /// Read the latest artifact; `None` when nothing has been rendered yet
    async fn load(&self) -> Result<Option<Vec<u8>>, RenderError>;
}
