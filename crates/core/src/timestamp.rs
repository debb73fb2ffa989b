use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A wall-clock instant split into whole seconds and a sub-second
/// nanosecond component.
///
/// This is the only time representation that crosses the wire boundary;
/// no combined epoch-millis or ISO-string form is used there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch.
    pub seconds: i64,
    /// Sub-second nanoseconds, always in `0..1_000_000_000`.
    pub nanos: u32,
}

impl Timestamp {
    /// Capture the current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Utc::now().into()
    }

    /// Convert back to a [`DateTime<Utc>`]. Returns `None` if the pair is
    /// out of chrono's representable range.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.nanos).single()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos(),
        }
    }
}
