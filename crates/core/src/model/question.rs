use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ─── QUESTION NUMBER ───────────────────────────────────────────────────────────
//

/// Global 1-based question number, continuous across all subjects of an exam.
///
/// Subject membership is derived from this number and the exam configuration,
/// never stored alongside it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionNo(u32);

impl QuestionNo {
    /// Creates a new `QuestionNo`.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying 1-based number.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for QuestionNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionNo({})", self.0)
    }
}

impl fmt::Display for QuestionNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a question number from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQuestionNoError;

impl fmt::Display for ParseQuestionNoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse question number from string")
    }
}

impl std::error::Error for ParseQuestionNoError {}

impl FromStr for QuestionNo {
    type Err = ParseQuestionNoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(QuestionNo::new)
            .map_err(|_| ParseQuestionNoError)
    }
}

//
// ─── ANSWER OPTION ─────────────────────────────────────────────────────────────
//

/// One of the four selectable options of a multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
}

impl AnswerOption {
    /// All options in display order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Returns the option letter as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing an option letter from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAnswerOptionError(pub String);

impl fmt::Display for ParseAnswerOptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not an option letter: {}", self.0)
    }
}

impl std::error::Error for ParseAnswerOptionError {}

impl FromStr for AnswerOption {
    type Err = ParseAnswerOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            "D" | "d" => Ok(Self::D),
            other => Err(ParseAnswerOptionError(other.to_string())),
        }
    }
}

//
// ─── QUESTION STATUS ───────────────────────────────────────────────────────────
//

/// Visit/attempt state of a single question.
///
/// Transitions: `NotSeen` → `Seen` when the question first becomes current,
/// `Seen` → `Attempted` when an option is selected, `Attempted` → `Seen` when
/// the response is cleared. `NotSeen` is never re-entered once left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionStatus {
    #[default]
    NotSeen,
    Seen,
    Attempted,
}

impl QuestionStatus {
    /// Stable identifier used as the palette CSS class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotSeen => "not-seen",
            Self::Seen => "seen",
            Self::Attempted => "attempted",
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
