use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use tower::ServiceExt;

use pholio_catalog::CatalogService;
use pholio_core::{NewPhoto, PhotoRecord, UploadSummary};
use pholio_repository_memory::MemoryRepository;
use pholio_server::api::AppState;

// -- Helpers --------------------------------------------------------------

fn build_app() -> axum::Router {
    let repository = Arc::new(MemoryRepository::new());
    let catalog = Arc::new(CatalogService::new(repository));
    pholio_server::api::router(AppState { catalog })
}

async fn read_body(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn add_photo(app: &axum::Router, description: &str, content: &str) -> PhotoRecord {
    let body = serde_json::to_string(&NewPhoto::new(description, content)).unwrap();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri("/v1/photos")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_slice(&read_body(response).await).unwrap()
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn upload(app: &axum::Router, ndjson: &str) -> UploadSummary {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri("/v1/photos/upload")
                .header(http::header::CONTENT_TYPE, "application/x-ndjson")
                .body(Body::from(ndjson.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();
    // Upload always completes at the transport level; failures are in the payload.
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_slice(&read_body(response).await).unwrap()
}

fn parse_ndjson(bytes: &[u8]) -> Vec<PhotoRecord> {
    std::str::from_utf8(bytes)
        .unwrap()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

async fn random_photos(app: &axum::Router, count: usize) -> Vec<PhotoRecord> {
    let response = get(app, &format!("/v1/photos/random?count={count}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    parse_ndjson(&read_body(response).await)
}

// -- Health ---------------------------------------------------------------

#[tokio::test]
async fn health_returns_200() {
    let app = build_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["metrics"].is_object());
}

#[tokio::test]
async fn metrics_count_operations() {
    let app = build_app();
    add_photo(&app, "p", "c").await;
    let _ = get(&app, "/v1/photos/nope").await;

    let response = get(&app, "/metrics").await;
    let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(json["created"], 1);
    assert_eq!(json["not_found"], 1);
}

// -- Photo ----------------------------------------------------------------

#[tokio::test]
async fn photo_unknown_id_returns_404() {
    let app = build_app();

    let response = get(&app, "/v1/photos/no-such-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    let message = json["error"].as_str().unwrap();
    assert!(
        message.contains("no-such-id"),
        "error should name the missing id: {message}"
    );
}

#[tokio::test]
async fn add_then_fetch_returns_identical_record() {
    let app = build_app();
    let created = add_photo(&app, "sunset", "pixels").await;
    assert!(!created.id.as_str().is_empty());

    let response = get(&app, &format!("/v1/photos/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: PhotoRecord = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn record_wire_shape_splits_timestamp() {
    let app = build_app();
    let created = add_photo(&app, "wire", "c").await;

    let response = get(&app, &format!("/v1/photos/{}", created.id)).await;
    let json: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
    assert!(json["timestamp"]["seconds"].is_i64());
    assert!(json["timestamp"]["nanos"].is_u64());
    assert!(json["id"].is_string());
    assert!(json["content"].is_string());
}

// -- AddPhoto -------------------------------------------------------------

#[tokio::test]
async fn caller_supplied_id_is_ignored() {
    let app = build_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri("/v1/photos")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"id": "chosen-by-caller", "description": "d", "content": "c"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let record: PhotoRecord = serde_json::from_slice(&read_body(response).await).unwrap();
    assert_ne!(record.id.as_str(), "chosen-by-caller");

    let response = get(&app, "/v1/photos/chosen-by-caller").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn identical_inputs_produce_distinct_records() {
    let app = build_app();
    let a = add_photo(&app, "same", "same").await;
    let b = add_photo(&app, "same", "same").await;
    assert_ne!(a.id, b.id);

    assert_eq!(
        get(&app, &format!("/v1/photos/{}", a.id)).await.status(),
        StatusCode::OK
    );
    assert_eq!(
        get(&app, &format!("/v1/photos/{}", b.id)).await.status(),
        StatusCode::OK
    );
}

// -- RandomPhotos ---------------------------------------------------------

#[tokio::test]
async fn random_photos_returns_min_of_count_and_size() {
    let app = build_app();
    let mut inserted = HashSet::new();
    for i in 0..4 {
        let record = add_photo(&app, &format!("p{i}"), "c").await;
        inserted.insert(record.id);
    }

    let two = random_photos(&app, 2).await;
    assert_eq!(two.len(), 2);

    let all = random_photos(&app, 100).await;
    assert_eq!(all.len(), 4);

    let ids: HashSet<_> = all.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), 4, "streamed records must be distinct");
    assert_eq!(ids, inserted, "every streamed record is a member of the store");
}

#[tokio::test]
async fn random_photos_empty_cases() {
    let app = build_app();

    // Empty store: any count completes with zero elements.
    assert!(random_photos(&app, 5).await.is_empty());

    // Zero count on a non-empty store.
    add_photo(&app, "p", "c").await;
    assert!(random_photos(&app, 0).await.is_empty());
}

// -- UploadPhotos ---------------------------------------------------------

#[tokio::test]
async fn upload_inserts_all_items() {
    let app = build_app();
    let ndjson = (0..3)
        .map(|i| {
            serde_json::to_string(&NewPhoto::new(format!("photo {i}"), format!("content {i}")))
                .unwrap()
        })
        .collect::<Vec<_>>()
        .join("\n");

    let summary = upload(&app, &ndjson).await;
    assert!(summary.success);
    assert_eq!(summary.uploaded_count, 3);

    let stored = random_photos(&app, 100).await;
    assert_eq!(stored.len(), 3);

    // One upload batch shares a single timestamp.
    let timestamps: HashSet<_> = stored.iter().map(|r| r.created_at).collect();
    assert_eq!(timestamps.len(), 1);
}

#[tokio::test]
async fn upload_empty_body_reports_zero() {
    let app = build_app();
    let summary = upload(&app, "").await;
    assert!(summary.success);
    assert_eq!(summary.uploaded_count, 0);
}

#[tokio::test]
async fn upload_malformed_line_reports_partial_count() {
    let app = build_app();
    let good = serde_json::to_string(&NewPhoto::new("ok", "c")).unwrap();
    let ndjson = format!("{good}\n{good}\nnot-valid-json\n{good}");

    let summary = upload(&app, &ndjson).await;
    assert!(!summary.success, "mid-stream failure must be reported");
    assert_eq!(summary.uploaded_count, 2);

    // No rollback: the two records inserted before the failure remain.
    let stored = random_photos(&app, 100).await;
    assert_eq!(stored.len(), 2);
}
