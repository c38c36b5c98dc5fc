use services::SimulatorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SessionClosed,
    SessionInProgress,
    DownloadFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_simulator(err: &SimulatorError) -> Self {
        match err {
            SimulatorError::NotInSession => ViewError::SessionClosed,
            SimulatorError::NotInSummary => ViewError::SessionInProgress,
            SimulatorError::Download(_) => ViewError::DownloadFailed,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::SessionClosed => "This session has ended. Restart it to continue.",
            ViewError::SessionInProgress => "Finish the session before restarting it.",
            ViewError::DownloadFailed => "The project file could not be saved.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::DownloadError;

    #[test]
    fn simulator_errors_map_to_messages() {
        let err = SimulatorError::Download(DownloadError::InvalidPath {
            path: "../x.xlsx".into(),
        });
        let view = ViewError::from_simulator(&err);
        assert_eq!(view, ViewError::DownloadFailed);
        assert!(view.message().contains("could not be saved"));
        assert_eq!(
            ViewError::from_simulator(&SimulatorError::NotInSession),
            ViewError::SessionClosed
        );
    }
}
