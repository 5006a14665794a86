//! Writing generated artifacts to disk
//!
//! Writes are not transactional: when the second file fails, the first one
//! stays on disk.

use enumgen_core::GeneratedArtifact;
use std::fs;
use tracing::debug;

use crate::error::ScaffoldError;

/// Writes artifacts, creating parent directories as needed
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactWriter {
    overwrite: bool,
}

impl ArtifactWriter {
    pub fn new(overwrite: bool) -> Self {
        Self { overwrite }
    }

    /// Refuse existing targets unless overwriting. Runs before any write.
    pub fn check_targets(&self, artifacts: &[GeneratedArtifact]) -> Result<(), ScaffoldError> {
        if self.overwrite {
            return Ok(());
        }

        match artifacts.iter().find(|a| a.path.exists()) {
            Some(existing) => Err(ScaffoldError::TargetExists {
                kind: existing.kind,
                path: existing.path.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Write one artifact
    pub fn write(&self, artifact: &GeneratedArtifact) -> Result<(), ScaffoldError> {
        let failed = |source| ScaffoldError::WriteFailed {
            kind: artifact.kind,
            path: artifact.path.clone(),
            source,
        };

        if let Some(dir) = artifact.path.parent() {
            // create_dir_all treats an existing directory as success
            fs::create_dir_all(dir).map_err(failed)?;
        }

        fs::write(&artifact.path, &artifact.content).map_err(failed)?;
        debug!(path = %artifact.path.display(), bytes = artifact.content.len(), "Wrote artifact");
        Ok(())
    }
}
