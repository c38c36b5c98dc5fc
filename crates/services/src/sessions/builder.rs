use rand::Rng;

use sim_core::IndexSource;
use sim_core::model::{Dataset, Mode, Session};

/// Unseeded uniform source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Builds a session by resolving one variant per question.
pub struct SessionBuilder<'a> {
    dataset: &'a Dataset,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Build a session for `mode`, drawing variants from `source`.
    ///
    /// - A mode without projects falls back to the default mode.
    /// - Each call draws fresh picks; nothing is shared with earlier sessions.
    pub fn build(self, mode: Mode, source: &mut dyn IndexSource) -> Session {
        let resolved = self.dataset.resolve_mode(mode);
        if resolved != mode {
            log::warn!("mode {mode} has no projects, falling back to {resolved}");
        }

        let session = Session::build(self.dataset, resolved, source);
        log::debug!(
            "built {} session: {} projects, {} questions",
            session.mode(),
            session.len(),
            session.total_questions()
        );
        session
    }
}

/// Build a session with unseeded random variant selection.
#[must_use]
pub fn build_session(dataset: &Dataset, mode: Mode) -> Session {
    SessionBuilder::new(dataset).build(mode, &mut ThreadRngSource)
}
