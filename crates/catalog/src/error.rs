use thiserror::Error;

use pholio_repository::RepositoryError;

/// Errors surfaced by the catalog service operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No record with the requested id exists. Terminal to the caller;
    /// the condition is not transient and no retry is implied.
    #[error("photo with id {id} not found")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// An infrastructure failure from the storage backend.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
