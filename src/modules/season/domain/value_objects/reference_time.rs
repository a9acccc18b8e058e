//! Reference timezone helpers
//!
//! Every "today" computation and every rendered date or time uses Asia/Tokyo,
//! regardless of the host's local timezone.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

pub const REFERENCE_TZ: Tz = chrono_tz::Asia::Tokyo;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// An instant expressed in the reference timezone
pub type ReferenceDateTime = DateTime<Tz>;

pub fn now() -> ReferenceDateTime {
    Utc::now().with_timezone(&REFERENCE_TZ)
}

pub fn to_reference<T: TimeZone>(instant: &DateTime<T>) -> ReferenceDateTime {
    instant.with_timezone(&REFERENCE_TZ)
}

/// Parse an RFC 3339 timestamp and convert it to the reference timezone
pub fn parse_rfc3339(value: &str) -> Option<ReferenceDateTime> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|t| t.with_timezone(&REFERENCE_TZ))
}

pub fn format_date<T: TimeZone>(instant: &DateTime<T>) -> String {
    to_reference(instant).format(DATE_FORMAT).to_string()
}

pub fn format_time<T: TimeZone>(instant: &DateTime<T>) -> String {
    to_reference(instant).format(TIME_FORMAT).to_string()
}

/// Whether both instants fall on the same calendar date in the reference timezone
pub fn is_same_date<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    to_reference(a).date_naive() == to_reference(b).date_naive()
}
