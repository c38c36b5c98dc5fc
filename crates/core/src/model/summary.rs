use crate::model::marking::{Mark, MarkingState};
use crate::model::mode::Mode;
use crate::model::session::Session;

/// Aggregate counts shown at the end of a session.
///
/// Derived on demand from the session and marking state; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    mode: Mode,
    total_questions: usize,
    completed: usize,
    review: usize,
}

impl SessionSummary {
    #[must_use]
    pub fn from_state(session: &Session, marks: &MarkingState) -> Self {
        Self {
            mode: session.mode(),
            total_questions: session.total_questions(),
            completed: marks.count(Mark::Completed),
            review: marks.count(Mark::Review),
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub fn review(&self) -> usize {
        self.review
    }

    /// Questions carrying neither mark.
    #[must_use]
    pub fn unmarked(&self) -> usize {
        self.total_questions
            .saturating_sub(self.completed)
            .saturating_sub(self.review)
    }
}
