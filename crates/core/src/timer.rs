/// Default session length: 50 minutes.
pub const DEFAULT_DURATION_SECS: u32 = 50 * 60;

/// Below this many seconds the clock is shown as running low.
pub const DEFAULT_LOW_TIME_SECS: u32 = 5 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Seconds remaining after the tick (may be zero on the expiring tick).
    Running(u32),
    /// The countdown was already at zero.
    Expired,
}

/// Whole-second countdown. Decrements once per tick and stops at zero.
///
/// Reaching zero is only a signal; nothing here gates navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self {
            initial: secs,
            remaining: secs,
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.remaining == 0 {
            return TickOutcome::Expired;
        }
        self.remaining -= 1;
        TickOutcome::Running(self.remaining)
    }

    /// Restore the countdown to its initial duration.
    pub fn reset(&mut self) {
        self.remaining = self.initial;
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    #[must_use]
    pub fn is_low(&self, threshold_secs: u32) -> bool {
        self.remaining < threshold_secs
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

/// Format seconds as `MM:SS`. Minutes are not wrapped into hours.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
