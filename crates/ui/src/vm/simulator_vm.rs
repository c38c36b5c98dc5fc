use services::{Simulator, SubmitOutcome};
use sim_core::TickOutcome;
use sim_core::markup::{TextSegment, parse_inline};
use sim_core::model::{Mark, Mode, ProjectFile};

use super::summary_vm::{SummaryVm, map_summary};
use super::time_fmt::TimerVm;
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatorIntent {
    PrevQuestion,
    NextQuestion,
    SelectQuestion(usize),
    SubmitProject,
    RestartProject,
    ToggleMark(Mark),
    GoToSummary,
    DownloadCurrent,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimulatorOutcome {
    Continue,
    Downloaded(ProjectFile),
    Summary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PillStatus {
    Active,
    Completed,
    Review,
    Unmarked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionPillVm {
    pub index: usize,
    pub label: String,
    pub status: PillStatus,
}

impl QuestionPillVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.status {
            PillStatus::Active => "sim-pill sim-pill--active",
            PillStatus::Completed => "sim-pill sim-pill--completed",
            PillStatus::Review => "sim-pill sim-pill--review",
            PillStatus::Unmarked => "sim-pill",
        }
    }

    #[must_use]
    pub fn shows_check(&self) -> bool {
        self.status == PillStatus::Completed
    }
}

/// View model over one simulator instance.
pub struct SimulatorVm {
    simulator: Simulator,
}

impl SimulatorVm {
    #[must_use]
    pub fn new(simulator: Simulator) -> Self {
        Self { simulator }
    }

    #[must_use]
    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    /// Apply a user intent to the underlying state machine.
    ///
    /// # Errors
    ///
    /// Returns the `ViewError` matching the simulator failure.
    pub fn apply(&mut self, intent: SimulatorIntent) -> Result<SimulatorOutcome, ViewError> {
        let sim = &mut self.simulator;
        let outcome = match intent {
            SimulatorIntent::PrevQuestion => sim.prev_question().map(|_| SimulatorOutcome::Continue),
            SimulatorIntent::NextQuestion => sim.next_question().map(|_| SimulatorOutcome::Continue),
            SimulatorIntent::SelectQuestion(index) => {
                sim.select_question(index).map(|_| SimulatorOutcome::Continue)
            }
            SimulatorIntent::SubmitProject => sim.submit_project().map(|outcome| match outcome {
                SubmitOutcome::Advanced { .. } => SimulatorOutcome::Continue,
                SubmitOutcome::Finished => SimulatorOutcome::Summary,
            }),
            SimulatorIntent::RestartProject => {
                sim.restart_project().map(|()| SimulatorOutcome::Continue)
            }
            SimulatorIntent::ToggleMark(mark) => {
                sim.toggle_mark(mark).map(|_| SimulatorOutcome::Continue)
            }
            SimulatorIntent::GoToSummary => {
                sim.go_to_summary();
                Ok(SimulatorOutcome::Summary)
            }
            SimulatorIntent::DownloadCurrent => {
                sim.download_current().map(SimulatorOutcome::Downloaded)
            }
            SimulatorIntent::Restart => sim.restart().map(|()| SimulatorOutcome::Continue),
        };
        outcome.map_err(|err| ViewError::from_simulator(&err))
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.simulator.tick()
    }

    /// Leave the simulator and keep only the final counts.
    #[must_use]
    pub fn finish(self) -> SummaryVm {
        map_summary(&self.simulator.home())
    }

    #[must_use]
    pub fn is_summary(&self) -> bool {
        self.simulator.is_summary()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.simulator.mode()
    }

    #[must_use]
    pub fn is_exam(&self) -> bool {
        self.simulator.mode() == Mode::Exam
    }

    #[must_use]
    pub fn timer(&self) -> TimerVm {
        TimerVm::from_countdown(
            self.simulator.countdown(),
            self.simulator.config().low_time_secs,
        )
    }

    /// `Project n of N: name`, or `None` on the summary screen.
    #[must_use]
    pub fn project_label(&self) -> Option<String> {
        let position = self.simulator.position()?;
        let project = self.simulator.current_project()?;
        Some(format!(
            "Project {} of {}: {}",
            position.project + 1,
            self.simulator.session().len(),
            project.name()
        ))
    }

    #[must_use]
    pub fn pills(&self) -> Vec<QuestionPillVm> {
        let Some(position) = self.simulator.position() else {
            return Vec::new();
        };
        let Some(project) = self.simulator.current_project() else {
            return Vec::new();
        };
        (0..project.resolved_questions().len())
            .map(|index| {
                let status = if index == position.question {
                    PillStatus::Active
                } else {
                    match self.simulator.mark_at(index) {
                        Some(Mark::Completed) => PillStatus::Completed,
                        Some(Mark::Review) => PillStatus::Review,
                        None => PillStatus::Unmarked,
                    }
                };
                QuestionPillVm {
                    index,
                    label: (index + 1).to_string(),
                    status,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn question_segments(&self) -> Vec<TextSegment> {
        self.simulator
            .current_question()
            .map(|question| parse_inline(question.text()))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.simulator
            .position()
            .is_some_and(|position| position.question > 0)
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        let Some(position) = self.simulator.position() else {
            return false;
        };
        self.simulator
            .current_project()
            .is_some_and(|project| position.question < project.last_index())
    }

    #[must_use]
    pub fn current_mark(&self) -> Option<Mark> {
        self.simulator.current_mark()
    }

    /// Badge shown above the question text: `(class, label)`.
    #[must_use]
    pub fn mark_badge(&self) -> Option<(&'static str, &'static str)> {
        match self.current_mark()? {
            Mark::Completed => Some(("mark-badge mark-badge--completed", "✓ Complete")),
            Mark::Review => Some(("mark-badge mark-badge--review", "! Review")),
        }
    }

    #[must_use]
    pub fn mark_button_label(&self, mark: Mark) -> String {
        let active = self.current_mark() == Some(mark);
        match (mark, active) {
            (Mark::Completed, true) => "✓ Mark Complete".to_string(),
            (Mark::Completed, false) => "Mark Complete".to_string(),
            (Mark::Review, true) => "! Mark for Review".to_string(),
            (Mark::Review, false) => "Mark for Review".to_string(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> SummaryVm {
        map_summary(&self.simulator.summary())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use services::{RecordingDownloader, SimulatorConfig};
    use sim_core::FixedIndex;
    use sim_core::model::{Dataset, Project, ProjectId, Question, QuestionId};

    fn vm() -> SimulatorVm {
        let project = |id: &str, name: &str, texts: &[&str]| {
            Project::new(
                ProjectId::new(id),
                name,
                ProjectFile::new(format!("./projects/{id}.xlsx")),
                texts
                    .iter()
                    .enumerate()
                    .map(|(i, text)| {
                        Question::new(QuestionId::new(format!("{id}-{i}")), vec![(*text).into()])
                    })
                    .collect(),
            )
        };
        let dataset = Dataset::new([
            (Mode::Practice, vec![project("p1", "Warmup", &["Warm up"])]),
            (
                Mode::Exam,
                vec![
                    project("e1", "Adventure Works", &["Sort *Sales*.", "Filter", "Chart"]),
                    project("e2", "Wide World", &["Freeze panes"]),
                ],
            ),
        ])
        .unwrap();
        SimulatorVm::new(Simulator::new(
            Arc::new(dataset),
            Mode::Exam,
            SimulatorConfig::default(),
            Box::new(FixedIndex(0)),
            Arc::new(RecordingDownloader::new()),
        ))
    }

    #[test]
    fn labels_describe_current_project() {
        let vm = vm();
        assert!(vm.is_exam());
        assert_eq!(vm.project_label().as_deref(), Some("Project 1 of 2: Adventure Works"));
        assert_eq!(vm.timer().label, "50:00");
        assert_eq!(
            vm.question_segments(),
            vec![
                TextSegment::Plain("Sort ".into()),
                TextSegment::Emphasis("Sales".into()),
                TextSegment::Plain(".".into()),
            ]
        );
    }

    #[test]
    fn pills_reflect_marks_and_active_question() {
        let mut vm = vm();
        vm.apply(SimulatorIntent::ToggleMark(Mark::Completed)).unwrap();
        vm.apply(SimulatorIntent::NextQuestion).unwrap();
        vm.apply(SimulatorIntent::ToggleMark(Mark::Review)).unwrap();
        vm.apply(SimulatorIntent::NextQuestion).unwrap();

        let statuses: Vec<_> = vm.pills().iter().map(|pill| pill.status).collect();
        assert_eq!(
            statuses,
            [PillStatus::Completed, PillStatus::Review, PillStatus::Active]
        );
        assert!(vm.pills()[0].shows_check());
        assert!(vm.can_prev());
        assert!(!vm.can_next());
    }

    #[test]
    fn mark_labels_follow_current_mark() {
        let mut vm = vm();
        assert_eq!(vm.mark_badge(), None);
        vm.apply(SimulatorIntent::ToggleMark(Mark::Review)).unwrap();
        assert_eq!(vm.mark_badge().map(|(_, label)| label), Some("! Review"));
        assert_eq!(vm.mark_button_label(Mark::Review), "! Mark for Review");
        assert_eq!(vm.mark_button_label(Mark::Completed), "Mark Complete");
    }

    #[test]
    fn intents_after_summary_map_to_view_errors() {
        let mut vm = vm();
        assert_eq!(
            vm.apply(SimulatorIntent::GoToSummary).unwrap(),
            SimulatorOutcome::Summary
        );
        assert_eq!(
            vm.apply(SimulatorIntent::NextQuestion),
            Err(ViewError::SessionClosed)
        );
        assert!(vm.pills().is_empty());
        assert_eq!(vm.project_label(), None);

        vm.apply(SimulatorIntent::Restart).unwrap();
        assert!(!vm.is_summary());
        assert_eq!(
            vm.apply(SimulatorIntent::Restart),
            Err(ViewError::SessionInProgress)
        );
    }

    #[test]
    fn submitting_last_project_reports_summary() {
        let mut vm = vm();
        assert_eq!(
            vm.apply(SimulatorIntent::SubmitProject).unwrap(),
            SimulatorOutcome::Continue
        );
        assert_eq!(
            vm.apply(SimulatorIntent::SubmitProject).unwrap(),
            SimulatorOutcome::Summary
        );
        let summary = vm.finish();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.mode_label, "Exam");
    }
}
