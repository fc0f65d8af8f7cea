#![forbid(unsafe_code)]

pub mod error;
pub mod mentor_service;
pub mod sessions;

pub use exam_core::Clock;

pub use error::ExamServiceError;
pub use mentor_service::MentorService;
pub use sessions::{ExamSessionService, SessionProgress, StartedSession};
