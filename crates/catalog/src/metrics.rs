use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters tracking catalog operation outcomes.
///
/// All counters use relaxed ordering for maximum throughput. For a
/// consistent point-in-time view, call [`snapshot`](Self::snapshot).
#[derive(Debug, Default)]
pub struct CatalogMetrics {
    /// Total lookup calls.
    pub lookups: AtomicU64,
    /// Lookups that found no record.
    pub not_found: AtomicU64,
    /// Records created through single-item or bulk ingestion.
    pub created: AtomicU64,
    /// Random-sample calls served.
    pub sampled: AtomicU64,
    /// Bulk upload calls completed (successfully or not).
    pub uploads: AtomicU64,
    /// Bulk upload calls that ended in a reported failure.
    pub upload_failures: AtomicU64,
}

impl CatalogMetrics {
    /// Increment the lookups counter.
    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the not-found counter.
    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the created counter.
    pub fn increment_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the sampled counter.
    pub fn increment_sampled(&self) {
        self.sampled.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the uploads counter.
    pub fn increment_uploads(&self) {
        self.uploads.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the upload-failures counter.
    pub fn increment_upload_failures(&self) {
        self.upload_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a consistent point-in-time snapshot of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lookups: self.lookups.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            created: self.created.load(Ordering::Relaxed),
            sampled: self.sampled.load(Ordering::Relaxed),
            uploads: self.uploads.load(Ordering::Relaxed),
            upload_failures: self.upload_failures.load(Ordering::Relaxed),
        }
    }
}

/// A plain data snapshot of [`CatalogMetrics`] at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total lookup calls.
    pub lookups: u64,
    /// Lookups that found no record.
    pub not_found: u64,
    /// Records created.
    pub created: u64,
    /// Random-sample calls served.
    pub sampled: u64,
    /// Bulk upload calls completed.
    pub uploads: u64,
    /// Bulk upload calls that reported failure.
    pub upload_failures: u64,
}
