use sim_core::timer::{DEFAULT_DURATION_SECS, DEFAULT_LOW_TIME_SECS};

/// Tunables for a simulator session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Countdown length at session start and after a restart.
    pub timer_secs: u32,
    /// The clock is flagged as running low below this many seconds.
    pub low_time_secs: u32,
}

impl SimulatorConfig {
    #[must_use]
    pub fn with_timer_secs(mut self, timer_secs: u32) -> Self {
        self.timer_secs = timer_secs;
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            timer_secs: DEFAULT_DURATION_SECS,
            low_time_secs: DEFAULT_LOW_TIME_SECS,
        }
    }
}
