use std::pin::pin;
use std::sync::Arc;

use futures::stream::{Stream, StreamExt};
use tracing::{info, instrument, warn};

use pholio_core::{NewPhoto, PhotoId, PhotoRecord, Timestamp, UploadSummary};
use pholio_repository::Repository;

use crate::error::CatalogError;
use crate::metrics::CatalogMetrics;

/// The catalog service binding the four RPC operations to a repository.
///
/// Each operation:
/// 1. Translates the wire-level request into the repository's record shape.
/// 2. Calls the repository exactly as many times as the contract requires.
/// 3. Translates the result back, assigning identity and timestamps where
///    the operation creates records.
///
/// The service retains no record state between calls; everything crossing
/// the boundary is copied into response shapes.
pub struct CatalogService {
    repository: Arc<dyn Repository>,
    metrics: Arc<CatalogMetrics>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl CatalogService {
    /// Create a catalog service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self {
            repository,
            metrics: Arc::new(CatalogMetrics::default()),
        }
    }

    /// Handle to the operation counters.
    #[must_use]
    pub fn metrics(&self) -> &Arc<CatalogMetrics> {
        &self.metrics
    }

    /// Fetch a single record by id.
    ///
    /// A missing id is terminal to the caller: the error names the id and
    /// maps to a NOT-FOUND status at the transport layer.
    #[instrument(skip(self))]
    pub async fn photo(&self, id: &str) -> Result<PhotoRecord, CatalogError> {
        self.metrics.increment_lookups();
        let id = PhotoId::from(id);
        match self.repository.get_by_id(&id).await? {
            Some(record) => Ok(record),
            None => {
                self.metrics.increment_not_found();
                Err(CatalogError::NotFound {
                    id: id.as_str().to_owned(),
                })
            }
        }
    }

    /// Create a single record.
    ///
    /// The caller supplies only description and content; id and timestamp
    /// are assigned here, so the returned record is always fully populated.
    #[instrument(skip(self, new))]
    pub async fn add_photo(&self, new: NewPhoto) -> Result<PhotoRecord, CatalogError> {
        let record = PhotoRecord::from_new(new, PhotoId::generate(), Timestamp::now());
        let stored = self.repository.insert(record).await?;
        self.metrics.increment_created();
        info!(id = %stored.id, "photo created");
        Ok(stored)
    }

    /// Draw `count` records at random and emit them as a stream.
    ///
    /// Performs exactly one repository call regardless of how many elements
    /// are streamed, preserving the repository's shuffled order. `count == 0`
    /// or an empty collection completes the stream with zero elements.
    #[instrument(skip(self))]
    pub async fn random_photos(
        &self,
        count: usize,
    ) -> Result<impl Stream<Item = PhotoRecord> + Send + use<>, CatalogError> {
        let records = self.repository.sample(count).await?;
        self.metrics.increment_sampled();
        info!(requested = count, returned = records.len(), "random sample drawn");
        Ok(futures::stream::iter(records))
    }

    /// Consume a stream of creation requests and insert each as a record.
    ///
    /// All records in one call share a single timestamp captured at the
    /// start; each gets its own fresh id. A stream error or insert failure
    /// stops processing immediately with no rollback of completed inserts.
    /// The failure is reported inside the summary payload rather than as a
    /// call error; the method always returns exactly one summary.
    #[instrument(skip(self, items))]
    pub async fn upload_photos<S, E>(&self, items: S) -> UploadSummary
    where
        S: Stream<Item = Result<NewPhoto, E>> + Send,
        E: std::fmt::Display,
    {
        let created_at = Timestamp::now();
        let mut uploaded_count: u64 = 0;
        let mut items = pin!(items);

        self.metrics.increment_uploads();

        while let Some(next) = items.next().await {
            let new = match next {
                Ok(new) => new,
                Err(e) => {
                    warn!(uploaded_count, error = %e, "upload stream failed");
                    self.metrics.increment_upload_failures();
                    return UploadSummary::failed(uploaded_count, e);
                }
            };

            let record = PhotoRecord::from_new(new, PhotoId::generate(), created_at);
            if let Err(e) = self.repository.insert(record).await {
                warn!(uploaded_count, error = %e, "upload insert failed");
                self.metrics.increment_upload_failures();
                return UploadSummary::failed(uploaded_count, e);
            }
            self.metrics.increment_created();
            uploaded_count += 1;
        }

        info!(uploaded_count, "upload complete");
        UploadSummary::completed(uploaded_count)
    }
}
