use async_trait::async_trait;

use pholio_core::{PhotoId, PhotoRecord};

use crate::error::RepositoryError;

/// Trait for storing and retrieving photo records.
///
/// Implementations must be `Send + Sync` and safe for concurrent access.
/// Each single operation observes a consistent view of the collection;
/// cross-call transactional isolation is not required, so an insert racing
/// a `sample` may or may not be visible to it.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Look up a record by exact id equality. Returns `None` for a missing
    /// id; never an error.
    async fn get_by_id(&self, id: &PhotoId) -> Result<Option<PhotoRecord>, RepositoryError>;

    /// Append a record to the collection and return the stored record.
    ///
    /// Insertion is not idempotent: inserting the same logical photo twice
    /// produces two distinct records. The service pre-assigns id and
    /// timestamp, so implementations store the record as given.
    async fn insert(&self, record: PhotoRecord) -> Result<PhotoRecord, RepositoryError>;

    /// Draw `min(count, total)` records uniformly at random **without
    /// replacement**, in randomized order.
    ///
    /// An empty collection or `count == 0` yields an empty vec, not an
    /// error. No ordering guarantee beyond "shuffled".
    async fn sample(&self, count: usize) -> Result<Vec<PhotoRecord>, RepositoryError>;
}
