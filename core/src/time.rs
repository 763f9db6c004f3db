//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time as unix seconds derived from its milliseconds.
///
/// Whole seconds render without a fraction (`1700000000`), otherwise the
/// millisecond part is kept with trailing zeros trimmed (`1700000000.12`).
pub fn format_unix_timestamp(t: DateTime) -> String {
    let millis = t.timestamp_millis();
    let secs = millis.div_euclid(1000);
    let frac = millis.rem_euclid(1000);

    if frac == 0 {
        return secs.to_string();
    }

    let frac = format!("{frac:03}");
    format!("{secs}.{}", frac.trim_end_matches('0'))
}

/// Build datetime from unix milliseconds.
pub fn from_unix_millis(millis: i64) -> Option<DateTime> {
    chrono::DateTime::from_timestamp_millis(millis)
}
