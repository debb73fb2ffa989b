use thiserror::Error;

/// Infrastructure errors from repository operations.
///
/// The documented storage contract is total: a missing record is an
/// `Ok(None)`, never an error. These variants cover backend failures only.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("backend error: {0}")]
    Backend(String),
}
