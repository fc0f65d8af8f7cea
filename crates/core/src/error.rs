use thiserror::Error;

use crate::model::{CatalogError, ExamConfigError};
use crate::session::NavigationError;

/// Crate-level error, aggregating the domain error kinds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ExamConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
