use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::countdown::Countdown;
use crate::model::{AnswerOption, ExamConfig, QuestionNo, QuestionStatus};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("question {question} is outside [1, {total}]")]
    OutOfRange { question: QuestionNo, total: u32 },

    #[error("subject index {index} is outside [0, {count})")]
    UnknownSubject { index: usize, count: usize },
}

//
// ─── EXAM SESSION ──────────────────────────────────────────────────────────────
//

/// In-memory state of one exam attempt.
///
/// Owns the current question, the per-question answers and visit status, and
/// the countdown. All state changes go through the methods below; the active
/// subject is derived from the current question on every read and never
/// stored, so the two cannot fall out of sync.
///
/// Status bookkeeping: a question is marked `Seen` when it becomes current
/// (including question 1 at construction). Navigation moves first, then marks
/// the arriving question. Selecting an option promotes the question to
/// `Attempted`; clearing the response demotes it back to `Seen`, never to
/// `NotSeen`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamSession {
    config: ExamConfig,
    current: QuestionNo,
    answers: BTreeMap<QuestionNo, AnswerOption>,
    status: BTreeMap<QuestionNo, QuestionStatus>,
    countdown: Countdown,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl ExamSession {
    /// Creates a session positioned on question 1 with a full countdown.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(config: ExamConfig, started_at: DateTime<Utc>) -> Self {
        let countdown = Countdown::new(config.duration_secs());
        let mut session = Self {
            config,
            current: QuestionNo::new(1),
            answers: BTreeMap::new(),
            status: BTreeMap::new(),
            countdown,
            started_at,
            completed_at: None,
        };
        session.mark_seen(session.current);
        session
    }

    #[must_use]
    pub fn config(&self) -> &ExamConfig {
        &self.config
    }

    #[must_use]
    pub fn current(&self) -> QuestionNo {
        self.current
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Index of the subject the current question belongs to. Always derived,
    /// always in `[0, subject_count)`.
    #[must_use]
    pub fn active_subject(&self) -> usize {
        self.config.subject_of(self.current)
    }

    /// Status of `question`; an absent entry means `NotSeen`.
    #[must_use]
    pub fn status_of(&self, question: QuestionNo) -> QuestionStatus {
        self.status.get(&question).copied().unwrap_or_default()
    }

    /// The option recorded for `question`, if any.
    #[must_use]
    pub fn answer(&self, question: QuestionNo) -> Option<AnswerOption> {
        self.answers.get(&question).copied()
    }

    /// Number of questions with a recorded answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────
    //

    /// Jumps to `question`.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::OutOfRange` (with state unchanged) when the
    /// question is outside `[1, total_questions]`.
    pub fn go_to(&mut self, question: QuestionNo) -> Result<(), NavigationError> {
        if !self.config.contains(question) {
            return Err(NavigationError::OutOfRange {
                question,
                total: self.config.total_questions(),
            });
        }
        self.current = question;
        self.mark_seen(question);
        Ok(())
    }

    /// Moves to the next question. Returns false (and changes nothing) when
    /// already on the last question.
    pub fn next(&mut self) -> bool {
        if self.current.value() >= self.config.total_questions() {
            return false;
        }
        self.current = QuestionNo::new(self.current.value() + 1);
        self.mark_seen(self.current);
        true
    }

    /// Moves to the previous question. Returns false (and changes nothing)
    /// when already on question 1.
    pub fn previous(&mut self) -> bool {
        if self.current.value() <= 1 {
            return false;
        }
        self.current = QuestionNo::new(self.current.value() - 1);
        self.mark_seen(self.current);
        true
    }

    /// Jumps to the first question of subject `index`.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::UnknownSubject` when the index is out of
    /// bounds.
    pub fn go_to_subject_start(&mut self, index: usize) -> Result<(), NavigationError> {
        let start = self
            .config
            .subject_start(index)
            .ok_or(NavigationError::UnknownSubject {
                index,
                count: self.config.subject_count(),
            })?;
        self.go_to(start)
    }

    //
    // ─── RESPONSES ─────────────────────────────────────────────────────────
    //

    /// Records `option` for `question` and marks it `Attempted`, overwriting
    /// any prior choice.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::OutOfRange` when the question does not exist.
    pub fn select(
        &mut self,
        question: QuestionNo,
        option: AnswerOption,
    ) -> Result<(), NavigationError> {
        if !self.config.contains(question) {
            return Err(NavigationError::OutOfRange {
                question,
                total: self.config.total_questions(),
            });
        }
        self.answers.insert(question, option);
        self.status.insert(question, QuestionStatus::Attempted);
        Ok(())
    }

    /// Records `option` for the current question.
    pub fn select_current(&mut self, option: AnswerOption) {
        // The current question is in range by construction.
        let current = self.current;
        let _ = self.select(current, option);
    }

    /// Removes the recorded answer for `question` and demotes `Attempted`
    /// back to `Seen`. A question that was never attempted keeps its status;
    /// `NotSeen` is never re-entered from `Seen`.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::OutOfRange` when the question does not exist.
    pub fn clear(&mut self, question: QuestionNo) -> Result<(), NavigationError> {
        if !self.config.contains(question) {
            return Err(NavigationError::OutOfRange {
                question,
                total: self.config.total_questions(),
            });
        }
        self.answers.remove(&question);
        if self.status_of(question) == QuestionStatus::Attempted {
            self.status.insert(question, QuestionStatus::Seen);
        }
        Ok(())
    }

    /// Clears the response of the current question.
    pub fn clear_current(&mut self) {
        let current = self.current;
        let _ = self.clear(current);
    }

    //
    // ─── COUNTDOWN ─────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.countdown.is_paused()
    }

    #[must_use]
    pub fn is_time_up(&self) -> bool {
        self.countdown.is_expired()
    }

    /// True while the once-per-second tick task should stay armed.
    #[must_use]
    pub fn is_clock_running(&self) -> bool {
        !self.is_submitted() && self.countdown.is_running()
    }

    /// Applies one elapsed second. A no-op when paused, expired, or submitted.
    pub fn tick(&mut self) {
        if self.is_submitted() {
            return;
        }
        self.countdown.tick();
    }

    pub fn pause(&mut self) {
        self.countdown.pause();
    }

    pub fn resume(&mut self) {
        self.countdown.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.countdown.toggle();
    }

    //
    // ─── SUBMISSION ────────────────────────────────────────────────────────
    //

    /// Ends the attempt. Idempotent; the first call wins.
    pub fn submit(&mut self, at: DateTime<Utc>) {
        if self.completed_at.is_none() {
            self.completed_at = Some(at);
        }
    }

    fn mark_seen(&mut self, question: QuestionNo) {
        // An existing entry is Seen or Attempted already; never demote it.
        self.status.entry(question).or_insert(QuestionStatus::Seen);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
