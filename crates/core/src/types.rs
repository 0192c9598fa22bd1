/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Row bookkeeping timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Show start times are wall-clock values without a timezone.
pub type ShowTime = chrono::NaiveDateTime;
