mod mode_vm;
mod simulator_vm;
mod summary_vm;
mod time_fmt;

pub use mode_vm::{ModeCardVm, map_mode_cards};
pub use simulator_vm::{
    PillStatus, QuestionPillVm, SimulatorIntent, SimulatorOutcome, SimulatorVm,
};
pub use summary_vm::{SummaryTileVm, SummaryVm, map_summary};
pub use time_fmt::TimerVm;
