//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{CategoryId, SetId};
use storage::repository::StorageError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unknown question set {0}")]
    UnknownSet(SetId),
    #[error("unknown category {category} in set {set}")]
    UnknownCategory { set: SetId, category: CategoryId },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by quiz session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
