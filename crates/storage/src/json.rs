use serde_json::{Map, Value};
use sim_core::model::{Dataset, Mode};
use std::path::PathBuf;

use crate::repository::{DatasetRepository, StorageError};

const EMBEDDED_DATASET: &str = include_str!("../data/questions.json");

/// Parse a dataset document.
///
/// # Errors
///
/// Top-level keys that are not mode names are skipped with a warning.
///
/// # Errors
///
/// Returns `StorageError::Parse` for malformed JSON or an invalid dataset.
pub fn parse_dataset(raw: &str) -> Result<Dataset, StorageError> {
    let document: Map<String, Value> = serde_json::from_str(raw)?;
    let modes: Map<String, Value> = document
        .into_iter()
        .filter(|(key, _)| {
            let known = key.parse::<Mode>().is_ok();
            if !known {
                log::warn!("ignoring unknown dataset key {key:?}");
            }
            known
        })
        .collect();
    Ok(serde_json::from_value(Value::Object(modes))?)
}

/// The question bank bundled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedRepository;

impl DatasetRepository for EmbeddedRepository {
    fn load_dataset(&self) -> Result<Dataset, StorageError> {
        parse_dataset(EMBEDDED_DATASET)
    }

    fn describe(&self) -> String {
        "embedded dataset".to_string()
    }
}

/// A dataset document on disk.
#[derive(Clone, Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetRepository for JsonFileRepository {
    fn load_dataset(&self) -> Result<Dataset, StorageError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_dataset(&raw)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
