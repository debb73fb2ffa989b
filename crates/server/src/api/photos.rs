use axum::Json;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use futures::{StreamExt, TryStreamExt};
use serde::Deserialize;
use tokio_util::codec::{FramedRead, LinesCodec};
use tokio_util::io::StreamReader;

use pholio_core::{NewPhoto, PhotoRecord, UploadSummary};

use crate::error::ServerError;

use super::AppState;
use super::schemas::ErrorResponse;

/// Query parameters for the random sample endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RandomQuery {
    /// Number of records to draw. Missing or zero yields an empty stream.
    #[serde(default)]
    pub count: usize,
}

/// `GET /v1/photos/{id}` -- fetch a single record by id.
///
/// Returns the record as JSON, or a NOT-FOUND error naming the missing id.
#[utoipa::path(
    get,
    path = "/v1/photos/{id}",
    tag = "Photos",
    summary = "Fetch photo",
    description = "Looks up a photo record by exact id.",
    params(
        ("id" = String, Path, description = "Record identifier")
    ),
    responses(
        (status = 200, description = "The matching record", body = PhotoRecord),
        (status = 404, description = "No record with this id", body = ErrorResponse)
    )
)]
pub async fn photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    let record = state.catalog.photo(&id).await?;
    Ok((StatusCode::OK, Json(record)))
}

/// `POST /v1/photos` -- create a single record.
///
/// The body carries description and content only; id and timestamp are
/// assigned by the service and returned in the stored record.
#[utoipa::path(
    post,
    path = "/v1/photos",
    tag = "Photos",
    summary = "Add photo",
    description = "Creates a photo record with a service-assigned id and timestamp.",
    request_body(content = NewPhoto, description = "Photo to create"),
    responses(
        (status = 200, description = "The stored record", body = PhotoRecord)
    )
)]
pub async fn add_photo(
    State(state): State<AppState>,
    Json(new): Json<NewPhoto>,
) -> Result<impl IntoResponse, ServerError> {
    let record = state.catalog.add_photo(new).await?;
    Ok((StatusCode::OK, Json(record)))
}

/// `GET /v1/photos/random?count=N` -- stream a random sample.
///
/// Emits each sampled record as one newline-delimited JSON line, in the
/// repository's shuffled order. `count=0` or an empty store produces an
/// empty body.
#[utoipa::path(
    get,
    path = "/v1/photos/random",
    tag = "Photos",
    summary = "Random photos",
    description = "Draws up to `count` records uniformly at random and streams them as newline-delimited JSON.",
    params(
        ("count" = usize, Query, description = "Number of records to draw")
    ),
    responses(
        (status = 200, description = "NDJSON stream of records", body = String, content_type = "application/x-ndjson")
    )
)]
pub async fn random_photos(
    State(state): State<AppState>,
    Query(query): Query<RandomQuery>,
) -> Result<impl IntoResponse, ServerError> {
    let records = state.catalog.random_photos(query.count).await?;

    let body = Body::from_stream(records.map(|record| {
        serde_json::to_string(&record).map(|mut line| {
            line.push('\n');
            line
        })
    }));

    Ok(([(header::CONTENT_TYPE, "application/x-ndjson")], body))
}

/// `POST /v1/photos/upload` -- bulk ingestion from a streamed body.
///
/// The request body is newline-delimited JSON, one creation request per
/// line, consumed incrementally. The call always completes with a single
/// summary; a malformed line or transport error mid-stream stops
/// processing and is reported inside the summary (`success: false`), with
/// already-inserted records kept.
#[utoipa::path(
    post,
    path = "/v1/photos/upload",
    tag = "Photos",
    summary = "Upload photos",
    description = "Consumes a newline-delimited JSON stream of photos and returns a single upload summary.",
    request_body(content = String, description = "NDJSON stream, one photo per line", content_type = "application/x-ndjson"),
    responses(
        (status = 200, description = "Upload summary; check `success` in the payload", body = UploadSummary)
    )
)]
pub async fn upload_photos(State(state): State<AppState>, body: Body) -> impl IntoResponse {
    let reader = StreamReader::new(body.into_data_stream().map_err(std::io::Error::other));

    let items = FramedRead::new(reader, LinesCodec::new())
        .map_err(std::io::Error::other)
        .try_filter(|line| std::future::ready(!line.trim().is_empty()))
        .and_then(|line| {
            std::future::ready(
                serde_json::from_str::<NewPhoto>(&line).map_err(std::io::Error::other),
            )
        });

    let summary = state.catalog.upload_photos(items).await;
    (StatusCode::OK, Json(summary))
}
