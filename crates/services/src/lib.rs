#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod download;
pub mod error;
pub mod sessions;

pub use app_services::AppServices;
pub use config::SimulatorConfig;
pub use download::{CopyDownloader, FileDownloader, RecordingDownloader};
pub use error::{AppServicesError, DownloadError, SimulatorError};

pub use sessions::{
    Position, SessionBuilder, Simulator, SimulatorState, SubmitOutcome, ThreadRngSource,
    build_session,
};
