use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

use crate::model::ids::{ProjectFile, ProjectId, QuestionId};
use crate::model::mode::Mode;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("unknown mode key in dataset: {0}")]
    UnknownMode(String),

    #[error("dataset has no projects for the default mode")]
    MissingDefaultMode,

    #[error("project {project} has no questions")]
    EmptyProject { project: ProjectId },

    #[error("question {question} in project {project} has no variants")]
    EmptyQuestion {
        project: ProjectId,
        question: QuestionId,
    },

    #[error("project {project} appears more than once in mode {mode}")]
    DuplicateProject { mode: Mode, project: ProjectId },
}

//
// ─── ENTITIES ──────────────────────────────────────────────────────────────────
//

/// A question with its interchangeable phrasings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    id: QuestionId,
    variants: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, variants: Vec<String>) -> Self {
        Self { id, variants }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }
}

/// One exercise workbook and the questions asked about it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    file: ProjectFile,
    questions: Vec<Question>,
}

impl Project {
    #[must_use]
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        file: ProjectFile,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            file,
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn file(&self) -> &ProjectFile {
        &self.file
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn validate(&self) -> Result<(), DatasetError> {
        if self.questions.is_empty() {
            return Err(DatasetError::EmptyProject {
                project: self.id.clone(),
            });
        }
        if let Some(question) = self.questions.iter().find(|q| q.variants.is_empty()) {
            return Err(DatasetError::EmptyQuestion {
                project: self.id.clone(),
                question: question.id.clone(),
            });
        }
        Ok(())
    }
}

//
// ─── DATASET ───────────────────────────────────────────────────────────────────
//

/// Read-only question bank keyed by mode.
///
/// Construction validates the shape the session builder relies on: the
/// default mode has projects, every project has questions and every question
/// has at least one variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<Project>>")]
pub struct Dataset {
    modes: HashMap<Mode, Vec<Project>>,
}

impl Dataset {
    /// Build a dataset from per-mode project lists.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` when the default mode is missing or any project
    /// is malformed.
    pub fn new(modes: impl IntoIterator<Item = (Mode, Vec<Project>)>) -> Result<Self, DatasetError> {
        let modes: HashMap<Mode, Vec<Project>> = modes.into_iter().collect();

        if modes.get(&Mode::DEFAULT).is_none_or(Vec::is_empty) {
            return Err(DatasetError::MissingDefaultMode);
        }

        for (mode, projects) in &modes {
            let mut seen = HashSet::new();
            for project in projects {
                project.validate()?;
                if !seen.insert(project.id()) {
                    return Err(DatasetError::DuplicateProject {
                        mode: *mode,
                        project: project.id.clone(),
                    });
                }
            }
        }

        Ok(Self { modes })
    }

    /// The mode a session for `mode` will actually use.
    #[must_use]
    pub fn resolve_mode(&self, mode: Mode) -> Mode {
        if self.modes.get(&mode).is_some_and(|projects| !projects.is_empty()) {
            mode
        } else {
            Mode::DEFAULT
        }
    }

    /// Projects for `mode`, after fallback to the default mode.
    #[must_use]
    pub fn projects(&self, mode: Mode) -> &[Project] {
        self.modes
            .get(&self.resolve_mode(mode))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn project_count(&self, mode: Mode) -> usize {
        self.projects(mode).len()
    }

    #[must_use]
    pub fn question_count(&self, mode: Mode) -> usize {
        self.projects(mode)
            .iter()
            .map(|project| project.questions().len())
            .sum()
    }
}

impl TryFrom<BTreeMap<String, Vec<Project>>> for Dataset {
    type Error = DatasetError;

    fn try_from(raw: BTreeMap<String, Vec<Project>>) -> Result<Self, Self::Error> {
        let modes = raw
            .into_iter()
            .map(|(key, projects)| {
                key.parse::<Mode>()
                    .map(|mode| (mode, projects))
                    .map_err(|err| DatasetError::UnknownMode(err.raw))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(modes)
    }
}
