use crate::models::PropertyRecord;
use chrono::{DateTime, Duration, Utc};

/// How long a fresh listing stays eligible for the recommended shelf
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Recent, free of anomaly alerts, and still available
pub fn determine_recommended(property: &PropertyRecord, now: DateTime<Utc>) -> bool {
    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
    let is_recent = property.created_at.is_some_and(|created| created > cutoff);

    is_recent && !property.anomaly_alert && property.is_available()
}
