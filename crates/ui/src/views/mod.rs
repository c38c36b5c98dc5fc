mod home;
mod simulator;
mod state;
mod summary;

pub use home::HomeView;
pub use simulator::SimulatorView;
pub use state::ViewError;
pub use summary::SummaryScreen;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
