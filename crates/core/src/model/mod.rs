mod dataset;
mod ids;
mod marking;
mod mode;
mod session;
mod summary;

pub use ids::{ProjectFile, ProjectId, QuestionId};
pub use mode::{Mode, ParseModeError};

pub use dataset::{Dataset, DatasetError, Project, Question};
pub use marking::{Mark, MarkKey, MarkingState};
pub use session::{ResolvedQuestion, Session, SessionProject};
pub use summary::SessionSummary;
