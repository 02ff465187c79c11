//! File Summary Artifact Store
//!
//! Keeps exactly one artifact at a well-known path. Writes go to a
//! sibling temp file and are renamed into place, so a concurrent reader
//! never observes a partial image; a failed rename removes the temp file
//! and leaves the previous artifact as it was.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::gateways::SummaryArtifactStore;
use crate::shared::errors::RenderError;

/// Filesystem-backed artifact store
pub struct FileSummaryArtifact {
    path: PathBuf,
}

impl FileSummaryArtifact {
    /// Create a new FileSummaryArtifact at the given path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> Result<PathBuf, std::io::Error> {
        let file_name = self.path.file_name().ok_or_else(|| {
            std::io::Error::new(ErrorKind::InvalidInput, "artifact path has no file name")
        })?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        Ok(self.path.with_file_name(temp_name))
    }
}

#[async_trait]
impl SummaryArtifactStore for FileSummaryArtifact {
    async fn store(&self, bytes: &[u8]) -> Result<(), RenderError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path()?;
        tokio::fs::write(&temp, bytes).await?;
        if let Err(error) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(RenderError::Artifact(error));
        }
        Ok(())
    }

    async fn load(&self) -> Result<Option<Vec<u8>>, RenderError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(RenderError::Artifact(error)),
        }
    }
}
