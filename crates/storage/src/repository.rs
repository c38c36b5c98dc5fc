use sim_core::model::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::json::{EmbeddedRepository, JsonFileRepository};

/// Errors surfaced by dataset repositories.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Covers both malformed JSON and dataset validation failures.
    #[error("invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Repository contract for the read-only question bank.
pub trait DatasetRepository: Send + Sync {
    /// Load and validate the dataset.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or is not a valid
    /// dataset.
    fn load_dataset(&self) -> Result<Dataset, StorageError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Repository over an already-built dataset, for tests and prototyping.
#[derive(Clone)]
pub struct InMemoryRepository {
    dataset: Dataset,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DatasetRepository for InMemoryRepository {
    fn load_dataset(&self) -> Result<Dataset, StorageError> {
        Ok(self.dataset.clone())
    }

    fn describe(&self) -> String {
        "in-memory dataset".to_string()
    }
}

/// Dataset source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub datasets: Arc<dyn DatasetRepository>,
}

impl Storage {
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            datasets: Arc::new(EmbeddedRepository),
        }
    }

    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            datasets: Arc::new(JsonFileRepository::new(path)),
        }
    }

    #[must_use]
    pub fn in_memory(dataset: Dataset) -> Self {
        Self {
            datasets: Arc::new(InMemoryRepository::new(dataset)),
        }
    }

    /// Load the dataset from the configured source.
    ///
    /// # Errors
    ///
    /// Propagates `StorageError` from the underlying repository.
    pub fn load(&self) -> Result<Dataset, StorageError> {
        let dataset = self.datasets.load_dataset()?;
        log::info!("loaded dataset from {}", self.datasets.describe());
        Ok(dataset)
    }
}
