#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{EmbeddedRepository, JsonFileRepository};
pub use repository::{DatasetRepository, InMemoryRepository, Storage, StorageError};
