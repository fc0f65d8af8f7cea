use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::QuestionNo;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamConfigError {
    #[error("exam name cannot be empty")]
    EmptyName,

    #[error("exam must have at least one subject")]
    NoSubjects,

    #[error("subject name cannot be empty")]
    EmptySubjectName,

    #[error("questions per subject must be > 0")]
    InvalidQuestionsPerSubject,

    #[error("exam duration must be > 0 seconds")]
    InvalidDuration,
}

//
// ─── EXAM CONFIG ───────────────────────────────────────────────────────────────
//

/// Immutable configuration of one exam profile.
///
/// Questions are numbered globally and continuously: subject `i` owns the
/// range `[i * questions_per_subject + 1, (i + 1) * questions_per_subject]`.
/// The total question count and the subject a question belongs to are always
/// derived from these fields, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamConfig {
    name: String,
    subjects: Vec<String>,
    questions_per_subject: u32,
    duration_secs: u32,
}

impl ExamConfig {
    /// Creates a validated exam configuration.
    ///
    /// # Errors
    ///
    /// Returns `ExamConfigError` when the name or a subject name is empty,
    /// there are no subjects, the per-subject question count is zero, or the
    /// duration is zero.
    pub fn new(
        name: impl Into<String>,
        subjects: Vec<String>,
        questions_per_subject: u32,
        duration_secs: u32,
    ) -> Result<Self, ExamConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ExamConfigError::EmptyName);
        }
        if subjects.is_empty() {
            return Err(ExamConfigError::NoSubjects);
        }
        if subjects.iter().any(|subject| subject.trim().is_empty()) {
            return Err(ExamConfigError::EmptySubjectName);
        }
        if questions_per_subject == 0 {
            return Err(ExamConfigError::InvalidQuestionsPerSubject);
        }
        if duration_secs == 0 {
            return Err(ExamConfigError::InvalidDuration);
        }

        Ok(Self {
            name,
            subjects,
            questions_per_subject,
            duration_secs,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    #[must_use]
    pub fn questions_per_subject(&self) -> u32 {
        self.questions_per_subject
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Total question count: `subjects × questions_per_subject`.
    #[must_use]
    pub fn total_questions(&self) -> u32 {
        u32::try_from(self.subjects.len()).unwrap_or(u32::MAX) * self.questions_per_subject
    }

    /// Returns true when `question` lies within `[1, total_questions]`.
    #[must_use]
    pub fn contains(&self, question: QuestionNo) -> bool {
        question.value() >= 1 && question.value() <= self.total_questions()
    }

    /// Index of the subject that owns `question`: `floor((q - 1) / per_subject)`.
    ///
    /// Only meaningful for in-range questions; callers validate with
    /// [`ExamConfig::contains`] first.
    #[must_use]
    pub fn subject_of(&self, question: QuestionNo) -> usize {
        let zero_based = question.value().saturating_sub(1);
        (zero_based / self.questions_per_subject) as usize
    }

    /// First global question number of subject `index`, if the subject exists.
    #[must_use]
    pub fn subject_start(&self, index: usize) -> Option<QuestionNo> {
        if index >= self.subjects.len() {
            return None;
        }
        let index = u32::try_from(index).ok()?;
        Some(QuestionNo::new(index * self.questions_per_subject + 1))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn jee_like() -> ExamConfig {
        ExamConfig::new(
            "JEE",
            vec![
                "Physics".to_string(),
                "Chemistry".to_string(),
                "Mathematics".to_string(),
            ],
            25,
            10_800,
        )
        .unwrap()
    }

    #[test]
    fn total_is_subjects_times_per_subject() {
        let config = jee_like();
        assert_eq!(config.total_questions(), 75);
        assert_eq!(config.subject_count(), 3);
    }

    #[test]
    fn rejects_empty_subjects() {
        let err = ExamConfig::new("X", vec![], 10, 3600).unwrap_err();
        assert_eq!(err, ExamConfigError::NoSubjects);
    }

    #[test]
    fn rejects_blank_subject_name() {
        let err = ExamConfig::new("X", vec!["  ".to_string()], 10, 3600).unwrap_err();
        assert_eq!(err, ExamConfigError::EmptySubjectName);
    }

    #[test]
    fn rejects_zero_questions_per_subject() {
        let err = ExamConfig::new("X", vec!["P".to_string()], 0, 3600).unwrap_err();
        assert_eq!(err, ExamConfigError::InvalidQuestionsPerSubject);
    }

    #[test]
    fn rejects_zero_duration() {
        let err = ExamConfig::new("X", vec!["P".to_string()], 10, 0).unwrap_err();
        assert_eq!(err, ExamConfigError::InvalidDuration);
    }

    #[test]
    fn subject_of_uses_floor_division() {
        let config = jee_like();
        assert_eq!(config.subject_of(QuestionNo::new(1)), 0);
        assert_eq!(config.subject_of(QuestionNo::new(25)), 0);
        assert_eq!(config.subject_of(QuestionNo::new(26)), 1);
        assert_eq!(config.subject_of(QuestionNo::new(75)), 2);
    }

    #[test]
    fn subject_start_is_one_past_previous_block() {
        let config = jee_like();
        assert_eq!(config.subject_start(0), Some(QuestionNo::new(1)));
        assert_eq!(config.subject_start(2), Some(QuestionNo::new(51)));
        assert_eq!(config.subject_start(3), None);
    }

    #[test]
    fn contains_checks_both_bounds() {
        let config = jee_like();
        assert!(!config.contains(QuestionNo::new(0)));
        assert!(config.contains(QuestionNo::new(1)));
        assert!(config.contains(QuestionNo::new(75)));
        assert!(!config.contains(QuestionNo::new(76)));
    }
}
