// Wall-clock anchors for the contest.
//
// Every duration is measured against local midnight in one fixed zone, so the
// offset must come from the zone database for that exact date rather than a
// constant UTC shift.

use chrono::TimeZone;
use chrono_tz::Tz;

pub const REFERENCE_ZONE: Tz = chrono_tz::America::Toronto;

const MS_PER_SECOND: i64 = 1_000;

/// Epoch milliseconds of local midnight on the given date in [`REFERENCE_ZONE`].
///
/// `None` when the date does not exist or midnight is skipped by a transition.
pub fn zoned_midnight(year: i32, month: u32, day: u32) -> Option<i64> {
    REFERENCE_ZONE
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .earliest()
        .map(|midnight| midnight.timestamp_millis())
}

/// Formats a millisecond duration as `hh:mm:ss`. Hours do not wrap at 24.
pub fn format_duration(duration_ms: i64) -> String {
    let sign = if duration_ms < 0 { "-" } else { "" };
    let total_seconds = duration_ms.unsigned_abs() / MS_PER_SECOND as u64;
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}
