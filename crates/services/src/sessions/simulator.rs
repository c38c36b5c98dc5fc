use std::sync::Arc;

use sim_core::model::{
    Dataset, Mark, MarkKey, MarkingState, Mode, ProjectFile, ResolvedQuestion, Session,
    SessionProject, SessionSummary,
};
use sim_core::{Countdown, IndexSource, TickOutcome};

use super::builder::SessionBuilder;
use crate::config::SimulatorConfig;
use crate::download::FileDownloader;
use crate::error::SimulatorError;

/// Zero-based navigation position inside a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub project: usize,
    pub question: usize,
}

impl Position {
    #[must_use]
    pub fn new(project: usize, question: usize) -> Self {
        Self { project, question }
    }
}

/// Where the simulator currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatorState {
    InSession(Position),
    Summary,
}

/// Result of submitting the current project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved to the next project; its workbook was handed to the downloader.
    Advanced { file: ProjectFile },
    /// The last project was submitted; the simulator is on the summary screen.
    Finished,
}

/// Navigation state machine for one simulator instance.
///
/// Owns the session, the user's marks and the countdown. All transitions are
/// synchronous and bounds-checked; boundary moves are no-ops, never errors.
pub struct Simulator {
    dataset: Arc<Dataset>,
    session: Session,
    state: SimulatorState,
    marks: MarkingState,
    countdown: Countdown,
    config: SimulatorConfig,
    source: Box<dyn IndexSource + Send>,
    downloader: Arc<dyn FileDownloader>,
}

impl Simulator {
    /// Build a fresh session for `mode` and start at the first question.
    #[must_use]
    pub fn new(
        dataset: Arc<Dataset>,
        mode: Mode,
        config: SimulatorConfig,
        mut source: Box<dyn IndexSource + Send>,
        downloader: Arc<dyn FileDownloader>,
    ) -> Self {
        let session = SessionBuilder::new(&dataset).build(mode, source.as_mut());
        Self {
            dataset,
            session,
            state: SimulatorState::InSession(Position::default()),
            marks: MarkingState::new(),
            countdown: Countdown::new(config.timer_secs),
            config,
            source,
            downloader,
        }
    }

    // ─── READ ACCESSORS ───────────────────────────────────────────────────────

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn state(&self) -> SimulatorState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> SimulatorConfig {
        self.config
    }

    /// Current position, or `None` on the summary screen.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self.state {
            SimulatorState::InSession(position) => Some(position),
            SimulatorState::Summary => None,
        }
    }

    #[must_use]
    pub fn is_summary(&self) -> bool {
        self.state == SimulatorState::Summary
    }

    #[must_use]
    pub fn current_project(&self) -> Option<&SessionProject> {
        self.position()
            .and_then(|position| self.session.project(position.project))
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&ResolvedQuestion> {
        let position = self.position()?;
        self.current_project()?.question(position.question)
    }

    /// Mark on the current question.
    #[must_use]
    pub fn current_mark(&self) -> Option<Mark> {
        let position = self.position()?;
        self.mark_at(position.question)
    }

    /// Mark on question `question` of the current project.
    #[must_use]
    pub fn mark_at(&self, question: usize) -> Option<Mark> {
        let project = self.current_project()?;
        self.marks.get(&MarkKey::new(project.id().clone(), question))
    }

    #[must_use]
    pub fn marks(&self) -> &MarkingState {
        &self.marks
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn is_time_low(&self) -> bool {
        self.countdown.is_low(self.config.low_time_secs)
    }

    #[must_use]
    pub fn is_last_project(&self) -> bool {
        self.position()
            .is_some_and(|position| position.project + 1 >= self.session.len())
    }

    /// Aggregate counts for the current marks. Recomputed on every call.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_state(&self.session, &self.marks)
    }

    // ─── IN-SESSION TRANSITIONS ──────────────────────────────────────────────

    /// Move to the next question of the current project.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::NotInSession` on the summary screen.
    pub fn next_question(&mut self) -> Result<bool, SimulatorError> {
        let position = self.require_position()?;
        let last = self.last_question_index(position);
        if position.question >= last {
            return Ok(false);
        }
        self.state =
            SimulatorState::InSession(Position::new(position.project, position.question + 1));
        Ok(true)
    }

    /// Move to the previous question of the current project.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::NotInSession` on the summary screen.
    pub fn prev_question(&mut self) -> Result<bool, SimulatorError> {
        let position = self.require_position()?;
        if position.question == 0 {
            return Ok(false);
        }
        self.state =
            SimulatorState::InSession(Position::new(position.project, position.question - 1));
        Ok(true)
    }

    /// Jump to question `index` of the current project. Out of range is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::NotInSession` on the summary screen.
    pub fn select_question(&mut self, index: usize) -> Result<bool, SimulatorError> {
        let position = self.require_position()?;
        if index > self.last_question_index(position) || index == position.question {
            return Ok(false);
        }
        self.state = SimulatorState::InSession(Position::new(position.project, index));
        Ok(true)
    }

    /// Submit the current project.
    ///
    /// Hands the next project's workbook to the downloader and moves to its
    /// first question, or switches to the summary after the last project.
    /// A failing download is logged and does not block the transition.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::NotInSession` on the summary screen.
    pub fn submit_project(&mut self) -> Result<SubmitOutcome, SimulatorError> {
        let position = self.require_position()?;
        let next = position.project + 1;
        let Some(project) = self.session.project(next) else {
            log::info!("submitted final project, showing summary");
            self.state = SimulatorState::Summary;
            return Ok(SubmitOutcome::Finished);
        };

        let file = project.file().clone();
        if let Err(err) = self.downloader.download(&file) {
            log::warn!("download of {file} failed: {err}");
        }
        log::info!("submitted project {}, advancing to {}", position.project + 1, next + 1);
        self.state = SimulatorState::InSession(Position::new(next, 0));
        Ok(SubmitOutcome::Advanced { file })
    }

    /// Return to the first question of the first project and clear all marks.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::NotInSession` on the summary screen.
    pub fn restart_project(&mut self) -> Result<(), SimulatorError> {
        self.require_position()?;
        self.marks.clear();
        self.state = SimulatorState::InSession(Position::default());
        Ok(())
    }

    /// Toggle `mark` on the current question and return the resulting mark.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::NotInSession` on the summary screen.
    pub fn toggle_mark(&mut self, mark: Mark) -> Result<Option<Mark>, SimulatorError> {
        let position = self.require_position()?;
        let project = self
            .session
            .project(position.project)
            .ok_or(SimulatorError::NotInSession)?;
        let key = MarkKey::new(project.id().clone(), position.question);
        Ok(self.marks.toggle(key, mark))
    }

    /// Save the current project's workbook on demand.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::NotInSession` on the summary screen and
    /// `SimulatorError::Download` when the downloader fails.
    pub fn download_current(&self) -> Result<ProjectFile, SimulatorError> {
        let project = self.current_project().ok_or(SimulatorError::NotInSession)?;
        let file = project.file().clone();
        self.downloader.download(&file)?;
        Ok(file)
    }

    /// Switch to the summary screen. A no-op when already there.
    pub fn go_to_summary(&mut self) -> SessionSummary {
        if self.state != SimulatorState::Summary {
            log::info!("leaving session for summary");
            self.state = SimulatorState::Summary;
        }
        self.summary()
    }

    // ─── SUMMARY TRANSITIONS ─────────────────────────────────────────────────

    /// Start over with fresh variants, no marks and a full countdown.
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::NotInSummary` while a session is in progress.
    pub fn restart(&mut self) -> Result<(), SimulatorError> {
        if self.state != SimulatorState::Summary {
            return Err(SimulatorError::NotInSummary);
        }
        let mode = self.session.mode();
        self.session = SessionBuilder::new(&self.dataset).build(mode, self.source.as_mut());
        self.marks.clear();
        self.countdown.reset();
        self.state = SimulatorState::InSession(Position::default());
        log::info!("restarted {} session", self.session.mode());
        Ok(())
    }

    /// Leave the simulator, returning the final counts.
    #[must_use]
    pub fn home(self) -> SessionSummary {
        self.summary()
    }

    // ─── TIMER ───────────────────────────────────────────────────────────────

    /// Advance the countdown by one second. Never changes the navigation state.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.countdown.tick();
        if outcome == TickOutcome::Running(0) {
            log::info!("countdown reached zero");
        }
        outcome
    }

    fn require_position(&self) -> Result<Position, SimulatorError> {
        self.position().ok_or(SimulatorError::NotInSession)
    }

    fn last_question_index(&self, position: Position) -> usize {
        self.session
            .project(position.project)
            .map_or(0, SessionProject::last_index)
    }
}
