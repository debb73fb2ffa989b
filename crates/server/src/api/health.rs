use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::schemas::{HealthResponse, MetricsResponse};

/// `GET /health` -- returns service status together with a metrics snapshot.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    summary = "Health check",
    description = "Returns service status and a snapshot of catalog operation metrics.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let snap = state.catalog.metrics().snapshot();

    let body = HealthResponse {
        status: "ok".into(),
        metrics: MetricsResponse {
            lookups: snap.lookups,
            not_found: snap.not_found,
            created: snap.created,
            sampled: snap.sampled,
            uploads: snap.uploads,
            upload_failures: snap.upload_failures,
        },
    };

    (StatusCode::OK, Json(body))
}

/// `GET /metrics` -- returns catalog metrics as JSON.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    summary = "Catalog metrics",
    description = "Returns current operation counters for monitoring.",
    responses(
        (status = 200, description = "Current metric counters", body = MetricsResponse)
    )
)]
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snap = state.catalog.metrics().snapshot();

    let body = MetricsResponse {
        lookups: snap.lookups,
        not_found: snap.not_found,
        created: snap.created,
        sampled: snap.sampled,
        uploads: snap.uploads,
        upload_failures: snap.upload_failures,
    };

    (StatusCode::OK, Json(body))
}
