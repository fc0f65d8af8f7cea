use thiserror::Error;

use crate::model::exam::ExamConfig;

/// Default exam duration shared by the built-in profiles (3 hours).
const DEFAULT_DURATION_SECS: u32 = 3 * 60 * 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no exam profile matches code {code:?}")]
    UnknownCode { code: String },
}

/// Fixed table of exam profiles, resolved by exam code.
///
/// A code selects the profile whose name it starts with, case-insensitively:
/// `"neet-2026"` resolves to NEET, `"JEE Adv"` to JEE. Unknown codes are an
/// explicit error; callers that want the historical fall-back-to-default
/// behavior use [`ExamCatalog::resolve_or_default`], which reports that the
/// fallback engaged instead of hiding it.
#[derive(Debug, Clone)]
pub struct ExamCatalog {
    profiles: Vec<ExamConfig>,
}

impl ExamCatalog {
    /// Catalog of the built-in profiles. The first profile is the default.
    #[must_use]
    pub fn builtin() -> Self {
        let jee = ExamConfig::new(
            "JEE",
            vec![
                "Physics".to_string(),
                "Chemistry".to_string(),
                "Mathematics".to_string(),
            ],
            25,
            DEFAULT_DURATION_SECS,
        )
        .expect("built-in JEE profile is valid");
        let neet = ExamConfig::new(
            "NEET",
            vec![
                "Physics".to_string(),
                "Chemistry".to_string(),
                "Botany".to_string(),
                "Zoology".to_string(),
            ],
            45,
            DEFAULT_DURATION_SECS,
        )
        .expect("built-in NEET profile is valid");

        Self {
            profiles: vec![jee, neet],
        }
    }

    #[must_use]
    pub fn profiles(&self) -> &[ExamConfig] {
        &self.profiles
    }

    /// The profile an unrecognized code falls back to.
    #[must_use]
    pub fn default_profile(&self) -> &ExamConfig {
        &self.profiles[0]
    }

    /// Resolves an exam code to its profile.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCode` when the code matches no profile
    /// name prefix.
    pub fn resolve(&self, code: &str) -> Result<&ExamConfig, CatalogError> {
        let normalized = code.trim().to_uppercase();
        self.profiles
            .iter()
            .find(|profile| normalized.starts_with(&profile.name().to_uppercase()))
            .ok_or_else(|| CatalogError::UnknownCode {
                code: code.to_string(),
            })
    }

    /// Resolves a code, falling back to the default profile when unknown.
    ///
    /// The boolean is true when the fallback engaged, so the caller can
    /// surface it (log line, UI note) rather than silently landing the user
    /// in the wrong question set.
    #[must_use]
    pub fn resolve_or_default(&self, code: &str) -> (&ExamConfig, bool) {
        match self.resolve(code) {
            Ok(profile) => (profile, false),
            Err(_) => (self.default_profile(), true),
        }
    }
}

impl Default for ExamCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_case_insensitive_prefix() {
        let catalog = ExamCatalog::builtin();
        assert_eq!(catalog.resolve("neet-2026").unwrap().name(), "NEET");
        assert_eq!(catalog.resolve("NEET2024").unwrap().name(), "NEET");
        assert_eq!(catalog.resolve("jee-main-2025").unwrap().name(), "JEE");
        assert_eq!(catalog.resolve("JEE Adv").unwrap().name(), "JEE");
    }

    #[test]
    fn unknown_code_is_an_error() {
        let catalog = ExamCatalog::builtin();
        let err = catalog.resolve("XYZ").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownCode {
                code: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn fallback_reports_itself() {
        let catalog = ExamCatalog::builtin();
        let (profile, fell_back) = catalog.resolve_or_default("XYZ");
        assert_eq!(profile.name(), "JEE");
        assert!(fell_back);

        let (profile, fell_back) = catalog.resolve_or_default("NEET-UG");
        assert_eq!(profile.name(), "NEET");
        assert!(!fell_back);
    }

    #[test]
    fn builtin_profile_shapes() {
        let catalog = ExamCatalog::builtin();
        let jee = catalog.resolve("JEE").unwrap();
        assert_eq!(jee.total_questions(), 75);
        assert_eq!(jee.questions_per_subject(), 25);

        let neet = catalog.resolve("NEET").unwrap();
        assert_eq!(neet.total_questions(), 180);
        assert_eq!(neet.subject_count(), 4);
        assert_eq!(neet.duration_secs(), 10_800);
    }
}
