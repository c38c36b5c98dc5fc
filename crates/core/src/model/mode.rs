use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Practice configuration selecting which project set is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Practice,
    Challenges,
    Exam,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown mode: {raw}")]
pub struct ParseModeError {
    pub raw: String,
}

impl Mode {
    /// Mode used whenever the requested one is unknown or has no projects.
    pub const DEFAULT: Mode = Mode::Practice;

    pub const ALL: [Mode; 3] = [Mode::Practice, Mode::Challenges, Mode::Exam];

    /// Lenient parse of a caller-supplied selector (e.g. a query parameter).
    ///
    /// Anything other than an exact mode name maps to [`Mode::DEFAULT`].
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok())
            .unwrap_or(Self::DEFAULT)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Practice => "practice",
            Mode::Challenges => "challenges",
            Mode::Exam => "exam",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Practice => "Practice",
            Mode::Challenges => "Challenges",
            Mode::Exam => "Exam",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "practice" => Ok(Mode::Practice),
            "challenges" => Ok(Mode::Challenges),
            "exam" => Ok(Mode::Exam),
            other => Err(ParseModeError {
                raw: other.to_string(),
            }),
        }
    }
}
