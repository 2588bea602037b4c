//! Wall-clock seam and timestamp formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the timestamp stamped on each result.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// ISO-8601 / RFC 3339 in UTC with millisecond precision and a `Z` suffix,
/// e.g. `2026-02-18T04:23:11.000Z`.
pub fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
