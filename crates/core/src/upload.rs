use serde::{Deserialize, Serialize};

/// The single summary response of a bulk upload call.
///
/// A mid-stream failure is reported here rather than as a transport-level
/// error: the call still completes normally, `success` flips to `false`,
/// and `uploaded_count` reflects exactly how many records were inserted
/// before processing stopped. Callers must check `success`, not the
/// transport status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UploadSummary {
    /// Whether the whole input stream was consumed without error.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Number of records inserted. On failure, the count before the
    /// failing item; already-inserted records are not rolled back.
    pub uploaded_count: u64,
}

impl UploadSummary {
    /// Summary for a fully consumed input stream.
    #[must_use]
    pub fn completed(uploaded_count: u64) -> Self {
        Self {
            success: true,
            message: format!("uploaded {uploaded_count} photos"),
            uploaded_count,
        }
    }

    /// Summary for a stream that failed after `uploaded_count` inserts.
    #[must_use]
    pub fn failed(uploaded_count: u64, error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("upload failed: {error}"),
            uploaded_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_summary() {
        let summary = UploadSummary::completed(3);
        assert!(summary.success);
        assert_eq!(summary.uploaded_count, 3);
        assert!(summary.message.contains('3'));
    }

    #[test]
    fn failed_summary_keeps_count() {
        let summary = UploadSummary::failed(2, "boom");
        assert!(!summary.success);
        assert_eq!(summary.uploaded_count, 2);
        assert!(summary.message.contains("boom"));
    }

    #[test]
    fn serde_roundtrip() {
        let summary = UploadSummary::completed(7);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("uploaded_count"));
        let back: UploadSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
