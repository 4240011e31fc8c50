//! Wall-clock timestamps for outgoing messages.

use std::time::{SystemTime, UNIX_EPOCH};

/// Microseconds since the Unix epoch.
///
/// Monotonic-enough for the receiver-side statistics as long as the OS
/// clock is; no enforcement beyond what the system clock provides. A
/// pre-epoch clock reads as 0 rather than failing.
pub fn now_micros() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros() as i64
}
