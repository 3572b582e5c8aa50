//! Release-date parsing and the "new release" window.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{ListingError, Result};

/// Days a shoe counts as a new release.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// The default new-release window.
pub fn new_release_window() -> Duration {
    Duration::days(NEW_RELEASE_WINDOW_DAYS)
}

/// Parse a release date.
///
/// Accepts RFC 3339 timestamps (`2024-03-01T09:30:00Z`) and plain calendar
/// dates (`2024-03-01`, read as midnight UTC).
pub fn parse_release_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ListingError::invalid("release date is empty"));
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| ListingError::invalid(format!("invalid release date: {}", raw)))
}

/// Whether a shoe released at `release_date` is still new at `now`.
///
/// The window is half-open: a shoe released exactly 30 days before `now`
/// is no longer new, and a release date after `now` is never new.
pub fn is_new_shoe(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    is_new_shoe_within(release_date, now, new_release_window())
}

/// Same as [`is_new_shoe`] with an explicit window.
pub fn is_new_shoe_within(
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
    window: Duration,
) -> bool {
    let age = now.signed_duration_since(release_date);
    age >= Duration::zero() && age < window
}
