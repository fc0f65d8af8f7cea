use std::sync::Arc;

use services::{ExamSessionService, MentorService};

/// Services shared with every view through the Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    sessions: Arc<ExamSessionService>,
    mentor: Arc<MentorService>,
    default_code: String,
}

impl AppContext {
    #[must_use]
    pub fn new(
        sessions: Arc<ExamSessionService>,
        mentor: Arc<MentorService>,
        default_code: String,
    ) -> Self {
        Self {
            sessions,
            mentor,
            default_code,
        }
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<ExamSessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn mentor(&self) -> Arc<MentorService> {
        Arc::clone(&self.mentor)
    }

    /// Code pre-filled on the Home view (from `--code` / the environment).
    #[must_use]
    pub fn default_code(&self) -> &str {
        &self.default_code
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` for the desktop launch.
#[must_use]
pub fn build_app_context(
    sessions: Arc<ExamSessionService>,
    mentor: Arc<MentorService>,
    default_code: String,
) -> AppContext {
    AppContext::new(sessions, mentor, default_code)
}
