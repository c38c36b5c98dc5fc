use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use sim_core::model::ProjectFile;

use crate::error::DownloadError;

/// Platform "save this file" action for project workbooks.
///
/// Fire-and-forget from the simulator's point of view: the state machine
/// never waits on or reacts to completion.
pub trait FileDownloader: Send + Sync {
    /// # Errors
    ///
    /// Returns `DownloadError` if the file cannot be delivered.
    fn download(&self, file: &ProjectFile) -> Result<(), DownloadError>;
}

/// Copies workbooks from a files root into a target directory.
#[derive(Debug, Clone)]
pub struct CopyDownloader {
    source_root: PathBuf,
    target_dir: PathBuf,
}

impl CopyDownloader {
    #[must_use]
    pub fn new(source_root: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            target_dir: target_dir.into(),
        }
    }

    #[must_use]
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    fn source_path(&self, file: &ProjectFile) -> Result<PathBuf, DownloadError> {
        let relative = Path::new(file.relative_path());
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || file.file_name().is_empty() {
            return Err(DownloadError::InvalidPath {
                path: file.as_str().to_string(),
            });
        }
        Ok(self.source_root.join(relative))
    }
}

impl FileDownloader for CopyDownloader {
    fn download(&self, file: &ProjectFile) -> Result<(), DownloadError> {
        let source = self.source_path(file)?;
        if !source.is_file() {
            return Err(DownloadError::NotFound { path: source });
        }

        std::fs::create_dir_all(&self.target_dir)?;
        let target = self.target_dir.join(file.file_name());
        std::fs::copy(&source, &target)?;
        log::info!("saved {} to {}", file, target.display());
        Ok(())
    }
}

/// Records requested downloads without touching the filesystem.
#[derive(Debug, Default)]
pub struct RecordingDownloader {
    downloads: Mutex<Vec<ProjectFile>>,
}

impl RecordingDownloader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files requested so far, oldest first.
    #[must_use]
    pub fn downloads(&self) -> Vec<ProjectFile> {
        self.downloads
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl FileDownloader for RecordingDownloader {
    fn download(&self, file: &ProjectFile) -> Result<(), DownloadError> {
        let mut guard = self
            .downloads
            .lock()
            .map_err(|e| DownloadError::Io(std::io::Error::other(e.to_string())))?;
        guard.push(file.clone());
        Ok(())
    }
}
