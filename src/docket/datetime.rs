use chrono::{DateTime, Local, TimeZone, Utc};

/// Backend timestamps are nanoseconds since the Unix epoch.
pub type TimestampNanos = i64;

// Every i64 nanosecond count lands inside chrono's representable range
// (1677..=2262), so conversion never fails.
fn to_utc(timestamp: TimestampNanos) -> DateTime<Utc> {
    Utc.timestamp_nanos(timestamp)
}

/// Long date+time in the runtime's local timezone, e.g.
/// "January 5, 2026 at 03:04 PM".
pub fn format_timestamp(timestamp: TimestampNanos) -> String {
    to_utc(timestamp)
        .with_timezone(&Local)
        .format("%B %-d, %Y at %I:%M %p")
        .to_string()
}

/// ISO form truncated for datetime-local input fields, e.g. "2026-01-05T15:04".
/// Always UTC, matching the ISO serialization the form fields expect.
pub fn format_date_for_input(timestamp: TimestampNanos) -> String {
    to_utc(timestamp).format("%Y-%m-%dT%H:%M").to_string()
}

/// Short local date, e.g. "Jan 5, 2026".
pub fn format_date_short(timestamp: TimestampNanos) -> String {
    to_utc(timestamp)
        .with_timezone(&Local)
        .format("%b %-d, %Y")
        .to_string()
}

/// Wall-clock "Generated:" line used by the summary generators, e.g.
/// "1/5/2026, 3:04:05 PM".
pub fn generated_at_now() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
