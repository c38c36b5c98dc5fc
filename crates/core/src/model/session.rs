use crate::model::dataset::{Dataset, Project};
use crate::model::ids::{ProjectFile, ProjectId, QuestionId};
use crate::model::mode::Mode;
use crate::random::IndexSource;

/// A question with one variant fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuestion {
    id: QuestionId,
    text: String,
}

impl ResolvedQuestion {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A dataset project annotated with its resolved questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProject {
    project: Project,
    resolved_questions: Vec<ResolvedQuestion>,
}

impl SessionProject {
    fn resolve(project: &Project, source: &mut dyn IndexSource) -> Self {
        let resolved_questions = project
            .questions()
            .iter()
            .map(|question| {
                let variants = question.variants();
                let index = source.pick(variants.len()).min(variants.len().saturating_sub(1));
                ResolvedQuestion {
                    id: question.id().clone(),
                    text: variants.get(index).cloned().unwrap_or_default(),
                }
            })
            .collect();

        Self {
            project: project.clone(),
            resolved_questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ProjectId {
        self.project.id()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.project.name()
    }

    #[must_use]
    pub fn file(&self) -> &ProjectFile {
        self.project.file()
    }

    #[must_use]
    pub fn resolved_questions(&self) -> &[ResolvedQuestion] {
        &self.resolved_questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&ResolvedQuestion> {
        self.resolved_questions.get(index)
    }

    /// Index of the last question. Projects always hold at least one.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.resolved_questions.len().saturating_sub(1)
    }
}

/// One run through all projects of a mode.
///
/// Length and order are fixed until the session is rebuilt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    mode: Mode,
    projects: Vec<SessionProject>,
}

impl Session {
    /// Resolve every question of `mode` to one variant drawn from `source`.
    ///
    /// The mode falls back to [`Mode::DEFAULT`] when the dataset has no
    /// projects for it; [`Session::mode`] reports the mode actually used.
    pub fn build(dataset: &Dataset, mode: Mode, source: &mut dyn IndexSource) -> Self {
        let mode = dataset.resolve_mode(mode);
        let projects = dataset
            .projects(mode)
            .iter()
            .map(|project| SessionProject::resolve(project, source))
            .collect();
        Self { mode, projects }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn projects(&self) -> &[SessionProject] {
        &self.projects
    }

    #[must_use]
    pub fn project(&self, index: usize) -> Option<&SessionProject> {
        self.projects.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.projects
            .iter()
            .map(|project| project.resolved_questions.len())
            .sum()
    }
}
