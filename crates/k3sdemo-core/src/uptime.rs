//! Human-readable uptime.
//!
//! Only the two most significant units are kept, so the output is a lossy
//! display string and not a duration format that can be parsed back.

use std::time::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Render whole elapsed seconds, e.g. `45s`, `2m 5s`, `1h 1m`, `1d 1h`.
pub fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / DAY;
    let hours = (total_seconds % DAY) / HOUR;
    let minutes = (total_seconds % HOUR) / MINUTE;
    let seconds = total_seconds % MINUTE;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Same as `format_uptime`, truncating any sub-second remainder.
pub fn format_elapsed(elapsed: Duration) -> String {
    format_uptime(elapsed.as_secs())
}
