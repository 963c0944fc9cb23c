use chrono::{DateTime, Utc};
use serde::Serialize;

use super::status::SessionStatus;

/// Length of the starting-soon window before a session's start (5 minutes)
pub const STARTING_SOON_WINDOW_MS: i64 = 5 * 60 * 1000;

/// Label shown once a session has started
pub const LIVE_LABEL: &str = "LIVE NOW";

const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_SECOND: i64 = 1000;

/// Result of one clock evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockState {
    pub status: SessionStatus,

    /// Human-readable countdown ("Starts in 1h 2m", "Starting in 2:05", "LIVE NOW")
    pub label: String,

    /// True only on the tick where the status first moves into
    /// starting-soon or live
    pub transitioned: bool,
}

/// Derive the clock state for a session starting at `start_time`.
///
/// `previous` is the status stored from the caller's previous tick; the
/// transition flag is edge-triggered against it.
pub fn derive(
    start_time: DateTime<Utc>,
    now: DateTime<Utc>,
    previous: SessionStatus,
) -> ClockState {
    let diff_ms = remaining_ms(start_time, now);
    let status = status_for(diff_ms);

    ClockState {
        status,
        label: countdown_label(diff_ms),
        transitioned: status != previous && status.fires_transition(),
    }
}

/// Signed milliseconds from `now` until `start_time`
pub fn remaining_ms(start_time: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    start_time.signed_duration_since(now).num_milliseconds()
}

/// Status for a signed remaining duration. The five minute boundary is
/// inclusive on the starting-soon side.
pub fn status_for(diff_ms: i64) -> SessionStatus {
    if diff_ms <= 0 {
        SessionStatus::Live
    } else if diff_ms <= STARTING_SOON_WINDOW_MS {
        SessionStatus::StartingSoon
    } else {
        SessionStatus::Upcoming
    }
}

/// Player-style countdown label for a signed remaining duration
pub fn countdown_label(diff_ms: i64) -> String {
    match status_for(diff_ms) {
        SessionStatus::Live => LIVE_LABEL.to_string(),
        SessionStatus::StartingSoon => {
            let minutes = diff_ms / MS_PER_MINUTE;
            let seconds = (diff_ms % MS_PER_MINUTE) / MS_PER_SECOND;
            format!("Starting in {}:{:02}", minutes, seconds)
        }
        SessionStatus::Upcoming => {
            // Days fold into hours at this granularity
            let hours = diff_ms / MS_PER_HOUR;
            let minutes = (diff_ms % MS_PER_HOUR) / MS_PER_MINUTE;
            format!("Starts in {}h {}m", hours, minutes)
        }
    }
}
