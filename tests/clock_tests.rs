// Tests for status and countdown derivation
//
// Status is a pure function of (start_time - now); the transition flag is
// edge-triggered against the previous tick's status.

use chrono::{DateTime, Duration, TimeZone, Utc};
use livestream_scheduler::clock::{
    countdown_label, derive, status_for, Countdown, SessionStatus, LIVE_LABEL,
    STARTING_SOON_WINDOW_MS,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn start_in(ms: i64) -> DateTime<Utc> {
    now() + Duration::milliseconds(ms)
}

#[test]
fn test_more_than_five_minutes_is_upcoming() {
    for ms in [STARTING_SOON_WINDOW_MS + 1, 6 * 60_000, 3_723_000, 36 * 3_600_000] {
        let state = derive(start_in(ms), now(), SessionStatus::Upcoming);
        assert_eq!(state.status, SessionStatus::Upcoming, "diff = {}ms", ms);
        assert!(!state.transitioned);
    }
}

#[test]
fn test_inside_window_is_starting_soon() {
    for ms in [1, 1_000, 125_000, 270_000, STARTING_SOON_WINDOW_MS] {
        assert_eq!(status_for(ms), SessionStatus::StartingSoon, "diff = {}ms", ms);
    }
}

#[test]
fn test_at_or_past_start_is_live() {
    for ms in [0, -1, -1_000, -3_600_000] {
        let state = derive(start_in(ms), now(), SessionStatus::Upcoming);
        assert_eq!(state.status, SessionStatus::Live, "diff = {}ms", ms);
        assert_eq!(state.label, LIVE_LABEL);
    }
}

#[test]
fn test_five_minute_boundary_is_inclusive() {
    let state = derive(start_in(STARTING_SOON_WINDOW_MS), now(), SessionStatus::Upcoming);
    assert_eq!(state.status, SessionStatus::StartingSoon);
    assert_eq!(state.label, "Starting in 5:00");

    let state = derive(start_in(STARTING_SOON_WINDOW_MS + 1), now(), SessionStatus::Upcoming);
    assert_eq!(state.status, SessionStatus::Upcoming);
    assert_eq!(state.label, "Starts in 0h 5m");
}

#[test]
fn test_starting_soon_label_pads_seconds() {
    assert_eq!(countdown_label(125_000), "Starting in 2:05");
    assert_eq!(countdown_label(270_000), "Starting in 4:30");
    assert_eq!(countdown_label(59_999), "Starting in 0:59");
    assert_eq!(countdown_label(1), "Starting in 0:00");
}

#[test]
fn test_upcoming_label_hours_and_minutes() {
    assert_eq!(countdown_label(3_723_000), "Starts in 1h 2m");
    // Days are folded into hours
    assert_eq!(countdown_label(51 * 3_600_000 + 59_999), "Starts in 51h 0m");
}

#[test]
fn test_transition_is_edge_triggered() {
    use SessionStatus::*;

    let cases = [
        (Upcoming, 270_000, true),
        (StartingSoon, 269_000, false),
        (StartingSoon, 0, true),
        (Live, -1_000, false),
        (Upcoming, -1_000, true),
        (Upcoming, 3_600_000, false),
        (Live, 3_600_000, false),
    ];

    for (previous, ms, expected) in cases {
        let state = derive(start_in(ms), now(), previous);
        assert_eq!(
            state.transitioned, expected,
            "previous = {}, diff = {}ms",
            previous, ms
        );
    }
}

#[test]
fn test_one_second_sweep_fires_each_transition_once() {
    // Tick every second from six minutes out to one minute past the start
    let start = now() + Duration::minutes(6);
    let mut previous = SessionStatus::default();
    let mut fired = Vec::new();

    for tick in 0..=(7 * 60) {
        let at = now() + Duration::seconds(tick);
        let state = derive(start, at, previous);
        if state.transitioned {
            fired.push((tick, state.status));
        }
        previous = state.status;
    }

    assert_eq!(
        fired,
        vec![(60, SessionStatus::StartingSoon), (360, SessionStatus::Live)]
    );
}

#[test]
fn test_countdown_fields_use_modulo_chaining() {
    let ms = 86_400_000 + 2 * 3_600_000 + 3 * 60_000 + 4_000 + 500;
    let countdown = Countdown::from_remaining_ms(ms);

    assert_eq!(countdown.days, 1);
    assert_eq!(countdown.hours, 2);
    assert_eq!(countdown.minutes, 3);
    assert_eq!(countdown.seconds, 4);
    assert_eq!(countdown.to_string(), "01:02:03:04");
}

#[test]
fn test_countdown_is_zero_once_live() {
    assert!(Countdown::from_remaining_ms(0).is_zero());
    assert!(Countdown::from_remaining_ms(-5_000).is_zero());
    assert!(!Countdown::from_remaining_ms(1_000).is_zero());
}

#[test]
fn test_countdown_field_captions() {
    let captions: Vec<&str> = Countdown::default()
        .fields()
        .iter()
        .map(|(_, unit)| *unit)
        .collect();

    assert_eq!(captions, vec!["Days", "Hours", "Minutes", "Seconds"]);
}

#[test]
fn test_status_serializes_kebab_case() {
    let json = serde_json::to_string(&SessionStatus::StartingSoon).unwrap();
    assert_eq!(json, "\"starting-soon\"");
}
