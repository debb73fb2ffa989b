use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use pholio_catalog::CatalogError;

/// Errors that can occur when running the Pholio server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog-level error surfaced through the API.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Catalog(CatalogError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            Self::Catalog(CatalogError::Repository(e)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            Self::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
