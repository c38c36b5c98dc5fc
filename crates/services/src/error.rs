//! Shared error types for the services crate.

use std::path::PathBuf;
use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `FileDownloader` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DownloadError {
    #[error("refusing to download outside the files root: {path}")]
    InvalidPath { path: String },
    #[error("project file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted by the simulator state machine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimulatorError {
    #[error("session is on the summary screen")]
    NotInSession,
    #[error("session has not reached the summary screen")]
    NotInSummary,
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
