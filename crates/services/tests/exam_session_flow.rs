use exam_core::model::{AnswerOption, QuestionNo, QuestionStatus};
use exam_core::time::{fixed_clock, fixed_now};
use services::{ExamSessionService, SessionProgress};

#[test]
fn jee_code_resolves_to_75_question_session() {
    let service = ExamSessionService::builtin(fixed_clock());
    let started = service.start("JEE-MAIN-2026").unwrap();

    assert!(!started.fell_back);
    assert_eq!(started.requested_code, "JEE-MAIN-2026");
    assert_eq!(started.session.config().total_questions(), 75);
    assert_eq!(started.session.started_at(), fixed_now());
    assert_eq!(started.session.remaining_secs(), 10_800);
}

#[test]
fn unknown_code_is_an_error_on_the_strict_path() {
    let service = ExamSessionService::builtin(fixed_clock());
    assert!(service.start("UPSC").is_err());
}

#[test]
fn unknown_code_falls_back_with_a_flag() {
    let service = ExamSessionService::builtin(fixed_clock());
    let started = service.start_or_default("UPSC");

    assert!(started.fell_back);
    assert_eq!(started.session.config().name(), "JEE");
    assert_eq!(started.requested_code, "UPSC");
}

#[test]
fn neet_walkthrough_updates_progress_buckets() {
    let service = ExamSessionService::builtin(fixed_clock());
    let mut session = service.start("neet-ug").unwrap().session;
    assert_eq!(session.config().total_questions(), 180);

    // Question 1 is current (seen); answer it, then jump to the last subject.
    session.select_current(AnswerOption::B);
    session.go_to_subject_start(3).unwrap();
    assert_eq!(session.current(), QuestionNo::new(136));
    assert_eq!(session.active_subject(), 3);

    // Pass over two more questions without answering.
    assert!(session.next());
    assert!(session.next());

    let progress = SessionProgress::of(&session);
    assert_eq!(progress.total, 180);
    assert_eq!(progress.attempted, 1);
    assert_eq!(progress.seen, 3); // 136, 137, 138
    assert_eq!(progress.not_seen, 176);
    assert!(!progress.is_fully_attempted());
}

#[test]
fn select_then_reselect_then_clear_leaves_question_seen() {
    let service = ExamSessionService::builtin(fixed_clock());
    let mut session = service.start("JEE").unwrap().session;
    let q = QuestionNo::new(5);

    session.select(q, AnswerOption::B).unwrap();
    session.select(q, AnswerOption::C).unwrap();
    session.clear(q).unwrap();

    assert_eq!(session.status_of(q), QuestionStatus::Seen);
    assert_eq!(session.answer(q), None);
}

#[test]
fn countdown_pauses_and_resumes_across_a_session() {
    let service = ExamSessionService::builtin(fixed_clock());
    let mut session = service.start("JEE").unwrap().session;

    for _ in 0..60 {
        session.tick();
    }
    assert_eq!(session.remaining_secs(), 10_740);

    session.toggle_pause();
    for _ in 0..60 {
        session.tick();
    }
    assert_eq!(session.remaining_secs(), 10_740);

    session.toggle_pause();
    session.tick();
    assert_eq!(session.remaining_secs(), 10_739);
}

#[test]
fn submission_stamps_completion_from_the_clock() {
    let service = ExamSessionService::builtin(fixed_clock());
    let mut session = service.start("NEET").unwrap().session;

    session.submit(fixed_now());
    assert!(session.is_submitted());
    assert_eq!(session.completed_at(), Some(fixed_now()));

    // The clock is released: no further ticks apply.
    session.tick();
    assert_eq!(session.remaining_secs(), 10_800);
}
