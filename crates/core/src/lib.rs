#![forbid(unsafe_code)]

pub mod markup;
pub mod model;
pub mod random;
pub mod timer;

pub use random::{FixedIndex, IndexSource};
pub use timer::{Countdown, TickOutcome};
