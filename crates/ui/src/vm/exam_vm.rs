use chrono::{DateTime, Utc};

use exam_core::model::{AnswerOption, QuestionNo};
use exam_core::{ExamSession, NavigationError};
use services::{SessionProgress, StartedSession};

use crate::vm::time_fmt::format_hms;

/// Everything the exam view can ask the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamIntent {
    Select(AnswerOption),
    ClearResponse,
    Next,
    Previous,
    GoTo(QuestionNo),
    JumpToSubject(usize),
    TogglePause,
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamOutcome {
    Continue,
    Submitted,
}

/// View-model wrapping one exam attempt.
pub struct ExamVm {
    session: ExamSession,
    requested_code: String,
    fell_back: bool,
}

impl ExamVm {
    #[must_use]
    pub fn new(started: StartedSession) -> Self {
        Self {
            session: started.session,
            requested_code: started.requested_code,
            fell_back: started.fell_back,
        }
    }

    #[must_use]
    pub fn session(&self) -> &ExamSession {
        &self.session
    }

    /// The code the user entered, shown verbatim in the header.
    #[must_use]
    pub fn requested_code(&self) -> &str {
        &self.requested_code
    }

    /// True when the entered code matched no profile and the default engaged.
    #[must_use]
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format_hms(self.session.remaining_secs())
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::of(&self.session)
    }

    /// Applies one elapsed second.
    pub fn tick(&mut self) {
        self.session.tick();
    }

    /// Dispatches a user intent against the session.
    ///
    /// `now` stamps the submission time; the view passes the wall clock.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError` for out-of-range targets; session state is
    /// unchanged in that case.
    pub fn apply(
        &mut self,
        intent: ExamIntent,
        now: DateTime<Utc>,
    ) -> Result<ExamOutcome, NavigationError> {
        match intent {
            ExamIntent::Select(option) => self.session.select_current(option),
            ExamIntent::ClearResponse => self.session.clear_current(),
            ExamIntent::Next => {
                self.session.next();
            }
            ExamIntent::Previous => {
                self.session.previous();
            }
            ExamIntent::GoTo(question) => self.session.go_to(question)?,
            ExamIntent::JumpToSubject(index) => self.session.go_to_subject_start(index)?,
            ExamIntent::TogglePause => self.session.toggle_pause(),
            ExamIntent::Submit => {
                self.session.submit(now);
                return Ok(ExamOutcome::Submitted);
            }
        }
        Ok(ExamOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::time::{fixed_clock, fixed_now};
    use services::ExamSessionService;

    fn vm(code: &str) -> ExamVm {
        let service = ExamSessionService::builtin(fixed_clock());
        ExamVm::new(service.start_or_default(code))
    }

    #[test]
    fn intents_drive_the_session() {
        let mut vm = vm("JEE");
        vm.apply(ExamIntent::Next, fixed_now()).unwrap();
        vm.apply(ExamIntent::Select(AnswerOption::C), fixed_now())
            .unwrap();

        assert_eq!(vm.session().current(), QuestionNo::new(2));
        assert_eq!(
            vm.session().answer(QuestionNo::new(2)),
            Some(AnswerOption::C)
        );

        vm.apply(ExamIntent::ClearResponse, fixed_now()).unwrap();
        assert_eq!(vm.session().answer(QuestionNo::new(2)), None);
    }

    #[test]
    fn jump_to_subject_updates_active_tab() {
        let mut vm = vm("NEET");
        vm.apply(ExamIntent::JumpToSubject(3), fixed_now()).unwrap();
        assert_eq!(vm.session().current(), QuestionNo::new(136));
        assert_eq!(vm.session().active_subject(), 3);
    }

    #[test]
    fn out_of_range_go_to_surfaces_the_error() {
        let mut vm = vm("JEE");
        let err = vm
            .apply(ExamIntent::GoTo(QuestionNo::new(76)), fixed_now())
            .unwrap_err();
        assert!(matches!(err, NavigationError::OutOfRange { .. }));
        assert_eq!(vm.session().current(), QuestionNo::new(1));
    }

    #[test]
    fn submit_reports_the_terminal_outcome() {
        let mut vm = vm("JEE");
        let outcome = vm.apply(ExamIntent::Submit, fixed_now()).unwrap();
        assert_eq!(outcome, ExamOutcome::Submitted);
        assert!(vm.session().is_submitted());
    }

    #[test]
    fn timer_label_tracks_ticks() {
        let mut vm = vm("JEE");
        assert_eq!(vm.timer_label(), "03:00:00");
        for _ in 0..3_600 {
            vm.tick();
        }
        assert_eq!(vm.timer_label(), "02:00:00");

        vm.apply(ExamIntent::TogglePause, fixed_now()).unwrap();
        vm.tick();
        assert_eq!(vm.timer_label(), "02:00:00");
    }

    #[test]
    fn fallback_flag_travels_to_the_view() {
        let vm = vm("UNKNOWN-CODE");
        assert!(vm.fell_back());
        assert_eq!(vm.requested_code(), "UNKNOWN-CODE");
        assert_eq!(vm.session().config().name(), "JEE");
    }
}
