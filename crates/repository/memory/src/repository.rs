use async_trait::async_trait;
use dashmap::DashMap;
use rand::seq::SliceRandom;

use pholio_core::{PhotoId, PhotoRecord};
use pholio_repository::error::RepositoryError;
use pholio_repository::repository::Repository;

/// In-memory [`Repository`] backed by a [`DashMap`] keyed by record id.
///
/// This implementation is fully synchronous internally; the async trait
/// methods return immediately. Each operation sees a consistent view of
/// the map, but a sample racing a concurrent insert may or may not include
/// the new record.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: DashMap<String, PhotoRecord>,
}

impl MemoryRepository {
    /// Create a new, empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn get_by_id(&self, id: &PhotoId) -> Result<Option<PhotoRecord>, RepositoryError> {
        Ok(self.records.get(id.as_str()).map(|r| r.value().clone()))
    }

    async fn insert(&self, record: PhotoRecord) -> Result<PhotoRecord, RepositoryError> {
        self.records
            .insert(record.id.as_str().to_owned(), record.clone());
        Ok(record)
    }

    async fn sample(&self, count: usize) -> Result<Vec<PhotoRecord>, RepositoryError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        // Snapshot, shuffle, truncate: uniform without replacement.
        let mut snapshot: Vec<PhotoRecord> =
            self.records.iter().map(|r| r.value().clone()).collect();
        snapshot.shuffle(&mut rand::thread_rng());
        snapshot.truncate(count);
        Ok(snapshot)
    }
}
