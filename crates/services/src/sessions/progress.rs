use exam_core::ExamSession;
use exam_core::model::{QuestionNo, QuestionStatus};

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub attempted: usize,
    pub seen: usize,
    pub not_seen: usize,
}

impl SessionProgress {
    /// Counts every question of the session into exactly one bucket.
    #[must_use]
    pub fn of(session: &ExamSession) -> Self {
        let total = session.config().total_questions() as usize;
        let mut attempted = 0;
        let mut seen = 0;
        for n in 1..=session.config().total_questions() {
            match session.status_of(QuestionNo::new(n)) {
                QuestionStatus::Attempted => attempted += 1,
                QuestionStatus::Seen => seen += 1,
                QuestionStatus::NotSeen => {}
            }
        }

        Self {
            total,
            attempted,
            seen,
            not_seen: total - attempted - seen,
        }
    }

    /// True once every question carries a recorded answer.
    #[must_use]
    pub fn is_fully_attempted(&self) -> bool {
        self.attempted == self.total
    }
}
