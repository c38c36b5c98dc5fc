use std::sync::Arc;

use sim_core::IndexSource;
use sim_core::model::{Dataset, Mode};
use storage::repository::Storage;

use crate::config::SimulatorConfig;
use crate::download::FileDownloader;
use crate::error::AppServicesError;
use crate::sessions::{Simulator, ThreadRngSource};

/// Assembles the loaded dataset with the platform download action.
#[derive(Clone)]
pub struct AppServices {
    dataset: Arc<Dataset>,
    downloader: Arc<dyn FileDownloader>,
    config: SimulatorConfig,
}

impl AppServices {
    /// Load the dataset from `storage` and wire services around it.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the dataset cannot be loaded.
    pub fn load(
        storage: &Storage,
        downloader: Arc<dyn FileDownloader>,
        config: SimulatorConfig,
    ) -> Result<Self, AppServicesError> {
        let dataset = storage.load()?;
        for mode in Mode::ALL {
            log::debug!(
                "{mode}: {} projects, {} questions",
                dataset.project_count(mode),
                dataset.question_count(mode)
            );
        }
        Ok(Self::new(Arc::new(dataset), downloader, config))
    }

    #[must_use]
    pub fn new(
        dataset: Arc<Dataset>,
        downloader: Arc<dyn FileDownloader>,
        config: SimulatorConfig,
    ) -> Self {
        Self {
            dataset,
            downloader,
            config,
        }
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset)
    }

    #[must_use]
    pub fn downloader(&self) -> Arc<dyn FileDownloader> {
        Arc::clone(&self.downloader)
    }

    #[must_use]
    pub fn config(&self) -> SimulatorConfig {
        self.config
    }

    /// Start a simulator with unseeded variant selection.
    #[must_use]
    pub fn start_simulator(&self, mode: Mode) -> Simulator {
        self.start_simulator_with(mode, Box::new(ThreadRngSource))
    }

    /// Start a simulator drawing variants from `source`.
    #[must_use]
    pub fn start_simulator_with(
        &self,
        mode: Mode,
        source: Box<dyn IndexSource + Send>,
    ) -> Simulator {
        Simulator::new(
            self.dataset(),
            mode,
            self.config,
            source,
            self.downloader(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::RecordingDownloader;
    use crate::sessions::Position;
    use sim_core::FixedIndex;

    #[test]
    fn load_embedded_dataset_and_start() {
        let services = AppServices::load(
            &Storage::embedded(),
            Arc::new(RecordingDownloader::new()),
            SimulatorConfig::default(),
        )
        .unwrap();

        let sim = services.start_simulator_with(Mode::Exam, Box::new(FixedIndex(0)));
        assert_eq!(sim.mode(), Mode::Exam);
        assert_eq!(sim.position(), Some(Position::new(0, 0)));
        assert_eq!(sim.countdown().remaining(), services.config().timer_secs);
    }

    #[test]
    fn load_surfaces_storage_errors() {
        let result = AppServices::load(
            &Storage::json_file("/definitely/not/here.json"),
            Arc::new(RecordingDownloader::new()),
            SimulatorConfig::default(),
        );
        assert!(matches!(result, Err(AppServicesError::Storage(_))));
    }
}
