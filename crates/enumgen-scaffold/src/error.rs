//! Scaffold error types

use enumgen_core::{ArtifactKind, ConfigError, ValidationError};
use enumgen_render::RenderError;
use std::path::PathBuf;

/// Errors that stop a scaffold run
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Failed to read input: {0}")]
    Input(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("The {kind} file {} already exists (use --force to overwrite)", .path.display())]
    TargetExists { kind: ArtifactKind, path: PathBuf },

    #[error("Error creating {kind} file {}: {source}", .path.display())]
    WriteFailed {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
