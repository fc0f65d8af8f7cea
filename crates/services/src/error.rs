//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::model::{CatalogError, ExamConfigError};

/// Errors emitted by `ExamSessionService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ExamConfigError),
}
