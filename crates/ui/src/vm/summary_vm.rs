use sim_core::model::{Mode, SessionSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryTileVm {
    pub label: &'static str,
    pub value: usize,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub mode: Mode,
    pub mode_label: &'static str,
    pub total: usize,
    pub completed: usize,
    pub review: usize,
}

impl SummaryVm {
    #[must_use]
    pub fn tiles(&self) -> [SummaryTileVm; 3] {
        [
            SummaryTileVm {
                label: "Total questions",
                value: self.total,
                class: "summary-tile__value",
            },
            SummaryTileVm {
                label: "Completed",
                value: self.completed,
                class: "summary-tile__value summary-tile__value--completed",
            },
            SummaryTileVm {
                label: "In review",
                value: self.review,
                class: "summary-tile__value summary-tile__value--review",
            },
        ]
    }

    /// Modifier class for mode-tinted elements.
    #[must_use]
    pub fn mode_class(&self) -> &'static str {
        mode_class(self.mode)
    }
}

#[must_use]
pub fn map_summary(summary: &SessionSummary) -> SummaryVm {
    SummaryVm {
        mode: summary.mode(),
        mode_label: summary.mode().label(),
        total: summary.total_questions(),
        completed: summary.completed(),
        review: summary.review(),
    }
}

pub(crate) fn mode_class(mode: Mode) -> &'static str {
    match mode {
        Mode::Practice => "mode--practice",
        Mode::Challenges => "mode--challenges",
        Mode::Exam => "mode--exam",
    }
}
