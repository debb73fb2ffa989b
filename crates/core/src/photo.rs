use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;
use crate::types::PhotoId;

/// A stored photo record.
///
/// Records are created exactly once by the catalog service and never
/// mutated. The `id` and `created_at` fields are always service-assigned;
/// callers supply only `description` and `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", schema(example = json!({
    "id": "550e8400-e29b-41d4-a716-446655440000",
    "description": "sunset over the bay",
    "timestamp": {"seconds": 1717245045, "nanos": 123456789},
    "content": "iVBORw0KGgo..."
})))]
pub struct PhotoRecord {
    /// Unique record identifier.
    pub id: PhotoId,

    /// Caller-supplied free-text description. May be empty.
    pub description: String,

    /// When the record was created, split into seconds and nanos on the
    /// wire.
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,

    /// Opaque caller-supplied payload.
    pub content: String,
}

impl PhotoRecord {
    /// Build a record from a creation request with service-assigned
    /// identity and timestamp.
    #[must_use]
    pub fn from_new(new: NewPhoto, id: PhotoId, created_at: Timestamp) -> Self {
        Self {
            id,
            description: new.description,
            created_at,
            content: new.content,
        }
    }
}

/// A request to create a photo record.
///
/// Carries no id or timestamp field at all; those are assigned by the
/// service on acceptance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewPhoto {
    /// Free-text description. May be empty.
    #[serde(default)]
    pub description: String,

    /// Opaque payload.
    #[serde(default)]
    pub content: String,
}

impl NewPhoto {
    /// Create a new creation request.
    #[must_use]
    pub fn new(description: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content: content.into(),
        }
    }
}
