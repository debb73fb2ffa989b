use pholio_core::{NewPhoto, PhotoId, PhotoRecord, Timestamp, UploadSummary};

use super::schemas::{ErrorResponse, HealthResponse, MetricsResponse};

#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "Pholio Catalog API",
        version = "0.1.0",
        description = "HTTP API for the Pholio photo catalog. Store photos, fetch them by id, draw random samples, and bulk-upload over a streamed body.",
        license(name = "Apache-2.0")
    ),
    tags(
        (name = "Health", description = "Service health and metrics"),
        (name = "Photos", description = "Photo record storage and retrieval")
    ),
    paths(
        super::health::health,
        super::health::metrics,
        super::photos::photo,
        super::photos::add_photo,
        super::photos::random_photos,
        super::photos::upload_photos,
    ),
    components(schemas(
        PhotoRecord, PhotoId, Timestamp, NewPhoto, UploadSummary,
        HealthResponse, MetricsResponse, ErrorResponse,
    ))
)]
pub struct ApiDoc;
