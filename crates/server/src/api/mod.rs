pub mod health;
pub mod openapi;
pub mod photos;
pub mod schemas;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pholio_catalog::CatalogService;

use self::openapi::ApiDoc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The catalog service instance.
    pub catalog: Arc<CatalogService>,
}

/// Build the Axum router with all API routes, middleware, and Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health & metrics
        .route("/health", get(health::health))
        .route("/metrics", get(health::metrics))
        // Photos
        .route("/v1/photos", post(photos::add_photo))
        .route("/v1/photos/random", get(photos::random_photos))
        .route("/v1/photos/upload", post(photos::upload_photos))
        .route("/v1/photos/{id}", get(photos::photo))
        .with_state(state)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
