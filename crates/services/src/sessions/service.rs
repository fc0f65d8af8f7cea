use exam_core::model::{ExamCatalog, ExamConfig};
use exam_core::{Clock, ExamSession};

use crate::error::ExamServiceError;

//
// ─── STARTED SESSION ───────────────────────────────────────────────────────────
//

/// A freshly constructed exam attempt, plus how its code was resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StartedSession {
    pub session: ExamSession,
    /// The code the session was requested with, verbatim (shown in the header).
    pub requested_code: String,
    /// True when the code matched no profile and the default was used.
    pub fell_back: bool,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Builds exam sessions from exam codes.
///
/// Owns the profile catalog and the clock that stamps `started_at`, so views
/// never construct sessions directly and tests can freeze time.
#[derive(Clone)]
pub struct ExamSessionService {
    catalog: ExamCatalog,
    clock: Clock,
}

impl ExamSessionService {
    #[must_use]
    pub fn new(catalog: ExamCatalog, clock: Clock) -> Self {
        Self { catalog, clock }
    }

    /// Service over the built-in profile catalog.
    #[must_use]
    pub fn builtin(clock: Clock) -> Self {
        Self::new(ExamCatalog::builtin(), clock)
    }

    /// Profiles available for the Home listing.
    #[must_use]
    pub fn profiles(&self) -> &[ExamConfig] {
        self.catalog.profiles()
    }

    /// Starts a session for the given exam code.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Catalog` when the code matches no profile.
    pub fn start(&self, code: &str) -> Result<StartedSession, ExamServiceError> {
        let config = self.catalog.resolve(code)?.clone();
        Ok(self.assemble(code, config, false))
    }

    /// Starts a session, falling back to the default profile when the code is
    /// unknown. The fallback is logged and reported via
    /// [`StartedSession::fell_back`] so the UI can show it.
    #[must_use]
    pub fn start_or_default(&self, code: &str) -> StartedSession {
        let (config, fell_back) = self.catalog.resolve_or_default(code);
        if fell_back {
            tracing::warn!(
                code,
                fallback = config.name(),
                "exam code matched no profile; using default"
            );
        }
        self.assemble(code, config.clone(), fell_back)
    }

    fn assemble(&self, code: &str, config: ExamConfig, fell_back: bool) -> StartedSession {
        let started_at = self.clock.now();
        tracing::debug!(
            profile = config.name(),
            total = config.total_questions(),
            %started_at,
            "starting exam session"
        );
        StartedSession {
            session: ExamSession::new(config, started_at),
            requested_code: code.to_string(),
            fell_back,
        }
    }
}
