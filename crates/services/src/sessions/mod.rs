mod builder;
mod simulator;

// Public API of the session subsystem.
pub use crate::error::SimulatorError;
pub use builder::{SessionBuilder, ThreadRngSource, build_session};
pub use simulator::{Position, Simulator, SimulatorState, SubmitOutcome};
