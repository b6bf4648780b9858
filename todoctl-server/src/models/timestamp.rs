//! Timestamp helpers
//!
//! Timestamps are stored as fixed-width RFC 3339 strings with microsecond
//! precision, so `ORDER BY created_at` on the TEXT column is chronological.

use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};

/// Current time truncated to the stored precision.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Render a timestamp in its storage and wire form.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Next `updated_at` for a row last touched at `previous`.
///
/// Always strictly later than `previous`, even if the clock has not moved
/// or went backwards.
pub fn next_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2025, 5, 11, 10, 0, 0).unwrap();
        assert_eq!(format(&whole), "2025-05-11T10:00:00.000000Z");

        let later = whole + Duration::microseconds(1500);
        assert_eq!(format(&later), "2025-05-11T10:00:00.001500Z");
        assert!(format(&whole) < format(&later));
    }

    #[test]
    fn now_has_microsecond_precision() {
        let ts = now();
        assert_eq!(ts.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn next_after_moves_forward_from_the_future() {
        let future = now() + Duration::hours(1);
        assert_eq!(next_after(future), future + Duration::microseconds(1));
    }

    #[test]
    fn next_after_uses_clock_when_ahead() {
        let past = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let next = next_after(past);
        assert!(next > past + Duration::days(1));
    }
}
