// Tests for the built-in session list sources

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc, Weekday};
use livestream_scheduler::session::{sample_schedule, weekly_schedule};
use livestream_scheduler::DisplayZone;

fn new_york() -> DisplayZone {
    DisplayZone::parse("America/New_York").unwrap()
}

fn monday() -> DateTime<Utc> {
    // Monday 2026-10-19, 8:00 AM in New York
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

#[test]
fn test_weekly_schedule_has_every_city_sorted() {
    let sessions = weekly_schedule(&new_york(), monday());

    assert_eq!(sessions.len(), 18);
    assert!(sessions
        .windows(2)
        .all(|pair| pair[0].start_time <= pair[1].start_time));
}

#[test]
fn test_weekly_schedule_alternates_thursday_and_sunday_evenings() {
    let zone = new_york();
    let sessions = weekly_schedule(&zone, monday());

    for session in &sessions {
        let local = zone.local(session.start_time);
        assert!(
            matches!(local.weekday(), Weekday::Thu | Weekday::Sun),
            "{} falls on {}",
            session.location,
            local.weekday()
        );
        // Local 7:30 PM across the November DST change
        assert_eq!((local.hour(), local.minute()), (19, 30), "{}", session.location);
    }

    let first = &sessions[0];
    assert_eq!(first.id, "1");
    assert_eq!(first.location, "New York, US");
    assert_eq!(first.start_time, Utc.with_ymd_and_hms(2026, 10, 22, 23, 30, 0).unwrap());
    assert_eq!(first.description.as_deref(), Some("Join us live from New York, US."));
    assert_eq!(first.languages.as_deref(), Some("English and Persian"));

    let second = &sessions[1];
    assert_eq!(second.location, "Boston, US");
    assert_eq!(second.start_time, Utc.with_ymd_and_hms(2026, 10, 25, 23, 30, 0).unwrap());

    // Third session is the following Thursday, after clocks change
    let third = &sessions[2];
    assert_eq!(third.start_time, Utc.with_ymd_and_hms(2026, 10, 29, 23, 30, 0).unwrap());
    let fifth = &sessions[4];
    assert_eq!(fifth.start_time, Utc.with_ymd_and_hms(2026, 11, 6, 0, 30, 0).unwrap());
}

#[test]
fn test_weekly_schedule_skips_today() {
    let zone = new_york();
    // Thursday 2026-10-22, 10:00 AM in New York
    let thursday = Utc.with_ymd_and_hms(2026, 10, 22, 14, 0, 0).unwrap();

    let sessions = weekly_schedule(&zone, thursday);
    let first_thursday = sessions
        .iter()
        .find(|s| zone.local(s.start_time).weekday() == Weekday::Thu)
        .unwrap();

    assert_eq!(
        zone.local(first_thursday.start_time).date_naive(),
        chrono::NaiveDate::from_ymd_opt(2026, 10, 29).unwrap()
    );
    // Sunday comes first this time
    assert_eq!(sessions[0].location, "Boston, US");
}

#[test]
fn test_weekly_schedule_follows_display_zone() {
    let zone = DisplayZone::parse("Asia/Tokyo").unwrap();
    let sessions = weekly_schedule(&zone, monday());

    let local = zone.local(sessions[0].start_time);
    assert_eq!((local.hour(), local.minute()), (19, 30));
    assert_eq!(local.weekday(), Weekday::Thu);
}

#[test]
fn test_sample_schedule_offsets() {
    let now = monday();
    let sessions = sample_schedule(now);

    let offsets: Vec<i64> = sessions
        .iter()
        .map(|s| (s.start_time - now).num_hours())
        .collect();
    assert_eq!(offsets, vec![2, 5, 8, 12, 24, 36]);

    assert_eq!(sessions[0].title, "Morning Meditation");
    assert_eq!(sessions[0].location, "Tokyo, Japan");
    assert!(sessions.iter().all(|s| s.description.is_some()));
    assert_eq!(sessions[5].start_time, now + Duration::hours(36));
}
