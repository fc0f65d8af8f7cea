mod progress;
mod service;

// Public API of the session subsystem.
pub use progress::SessionProgress;
pub use service::{ExamSessionService, StartedSession};
