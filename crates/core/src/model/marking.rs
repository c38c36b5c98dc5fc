use std::collections::HashMap;

use crate::model::ids::ProjectId;

/// User annotation on a question, independent of any correctness check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Completed,
    Review,
}

/// Position of a question: owning project and index within it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MarkKey {
    pub project: ProjectId,
    pub question: usize,
}

impl MarkKey {
    #[must_use]
    pub fn new(project: ProjectId, question: usize) -> Self {
        Self { project, question }
    }
}

/// Marks set by the user. An absent key means "unset".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkingState {
    marks: HashMap<MarkKey, Mark>,
}

impl MarkingState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `mark` at `key` and return the resulting state.
    ///
    /// Toggling the value already set clears the key; toggling a different
    /// value overwrites it.
    pub fn toggle(&mut self, key: MarkKey, mark: Mark) -> Option<Mark> {
        if self.marks.get(&key) == Some(&mark) {
            self.marks.remove(&key);
            None
        } else {
            self.marks.insert(key, mark);
            Some(mark)
        }
    }

    #[must_use]
    pub fn get(&self, key: &MarkKey) -> Option<Mark> {
        self.marks.get(key).copied()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.values().filter(|value| **value == mark).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
