use sim_core::Countdown;
use sim_core::timer::format_clock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerVm {
    pub label: String,
    pub is_low: bool,
}

impl TimerVm {
    #[must_use]
    pub fn from_countdown(countdown: &Countdown, low_time_secs: u32) -> Self {
        Self {
            label: format_clock(countdown.remaining()),
            is_low: countdown.is_low(low_time_secs),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_low {
            "sim-timer sim-timer--low"
        } else {
            "sim-timer"
        }
    }
}
