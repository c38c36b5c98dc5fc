use std::sync::Arc;

use services::{AppServices, Simulator, ThreadRngSource};
use sim_core::IndexSource;
use sim_core::model::{Dataset, Mode};

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;

    /// Variant picker for new simulators. Unseeded by default.
    fn index_source(&self) -> Box<dyn IndexSource + Send> {
        Box::new(ThreadRngSource)
    }
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            services: app.services(),
        }
    }

    #[must_use]
    pub fn dataset(&self) -> Arc<Dataset> {
        self.services.dataset()
    }

    #[must_use]
    pub fn start_simulator(&self, mode: Mode) -> Simulator {
        self.services
            .start_simulator_with(mode, self.app.index_source())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
