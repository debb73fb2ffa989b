use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status indicator.
    #[schema(example = "ok")]
    pub status: String,
    /// Current catalog metrics snapshot.
    pub metrics: MetricsResponse,
}

/// Catalog operation metrics counters.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MetricsResponse {
    /// Total lookup calls.
    #[schema(example = 42)]
    pub lookups: u64,
    /// Lookups that found no record.
    #[schema(example = 3)]
    pub not_found: u64,
    /// Records created (single-item and bulk).
    #[schema(example = 120)]
    pub created: u64,
    /// Random-sample calls served.
    #[schema(example = 7)]
    pub sampled: u64,
    /// Bulk upload calls completed.
    #[schema(example = 5)]
    pub uploads: u64,
    /// Bulk upload calls that reported failure.
    #[schema(example = 1)]
    pub upload_failures: u64,
}

/// Generic error response returned on failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    #[schema(example = "photo with id 123 not found")]
    pub error: String,
}
