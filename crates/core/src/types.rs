/// Incarnation ids are 64-bit integers assigned by the backend.
pub type IncarnationId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
