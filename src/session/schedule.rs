use chrono::{DateTime, Datelike, Days, NaiveTime, TimeZone, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use super::session::{sort_by_start, Session};
use crate::timezone::DisplayZone;

/// Where the session list comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleSource {
    /// Recurring Thursday/Sunday evening broadcasts from each city
    #[default]
    Weekly,
    /// A handful of demo sessions a few hours apart
    Sample,
    /// Sessions listed in the config file
    Inline,
}

/// Local start time of the weekly broadcasts (7:30pm)
const WEEKLY_START_HOUR: u32 = 19;
const WEEKLY_START_MINUTE: u32 = 30;

const THURSDAY: u32 = 4;
const SUNDAY: u32 = 0;

/// (location, languages) for each weekly broadcast, in id order
const CITIES: &[(&str, &str)] = &[
    ("New York, US", "English and Persian"),
    ("Boston, US", "English and Persian"),
    ("Washington DC, US", "English and Persian"),
    ("Toronto, Canada", "English and Persian"),
    ("Montreal, Canada", "French and Persian"),
    ("Chicago, US", "English and Persian"),
    ("Seattle, US", "English and Persian"),
    ("San Francisco, US", "English and Persian"),
    ("Santa Cruz, US", "English and Persian"),
    ("Los Angeles, US", "English and Persian"),
    ("San Diego, US", "Spanish and Persian"),
    ("San Miguel de Allende, Mexico", "Spanish and Persian"),
    ("Sydney, Australia", "English and Persian"),
    ("Moscow, Russia", "Russian and Persian"),
    ("Vienna, Austria", "German and Persian"),
    ("Koln, Germany", "German and Persian"),
    ("Paris, France", "French and Persian"),
    ("London, UK", "English and Persian"),
];

/// (title, location, hours from now, description)
const SAMPLES: &[(&str, &str, i64, &str)] = &[
    (
        "Morning Meditation",
        "Tokyo, Japan",
        2,
        "Start your day with a calming meditation session from Tokyo.",
    ),
    (
        "Afternoon Jazz",
        "New York, USA",
        5,
        "Enjoy smooth jazz tunes live from New York City.",
    ),
    (
        "Evening Classical",
        "Vienna, Austria",
        8,
        "Experience classical music from the heart of Vienna.",
    ),
    (
        "Late Night Talk Show",
        "London, UK",
        12,
        "Join our late night discussion on current events.",
    ),
    (
        "Sunrise Ambient Sounds",
        "Bali, Indonesia",
        24,
        "Experience the peaceful sounds of Bali at sunrise.",
    ),
    (
        "Desert Winds",
        "Marrakech, Morocco",
        36,
        "Listen to the unique sounds of the Moroccan desert.",
    ),
];

/// Build the weekly city schedule as seen from `zone`.
///
/// Sessions alternate between the next Thursday and the next Sunday at 7:30pm
/// local time (a weekday that is today counts as next week), each pair one
/// week later than the previous one.
pub fn weekly_schedule(zone: &DisplayZone, now: DateTime<Utc>) -> Vec<Session> {
    let today = zone.local(now).date_naive();
    let weekday = today.weekday().num_days_from_sunday();

    let next = |target: u32| {
        let mut ahead = (target + 7 - weekday) % 7;
        if ahead == 0 {
            ahead = 7;
        }
        today + Days::new(ahead as u64)
    };
    let next_thursday = next(THURSDAY);
    let next_sunday = next(SUNDAY);

    let Some(start_time) = NaiveTime::from_hms_opt(WEEKLY_START_HOUR, WEEKLY_START_MINUTE, 0)
    else {
        return Vec::new();
    };

    let mut sessions = Vec::with_capacity(CITIES.len());

    for (i, (location, languages)) in CITIES.iter().enumerate() {
        let base = if i % 2 == 0 { next_thursday } else { next_sunday };
        let date = base + Days::new((i / 2) as u64 * 7);
        let local = date.and_time(start_time);

        let Some(start) = zone.tz().from_local_datetime(&local).earliest() else {
            warn!(
                "Skipping {}: {} does not exist in {}",
                location,
                local,
                zone.name()
            );
            continue;
        };

        sessions.push(
            Session::new((i + 1).to_string(), *location, *location, start.with_timezone(&Utc))
                .with_description(format!("Join us live from {}.", location))
                .with_languages(*languages),
        );
    }

    sort_by_start(&mut sessions);

    info!(
        "Generated weekly schedule: {} sessions in {}",
        sessions.len(),
        zone.name()
    );

    sessions
}

/// Demo sessions starting 2, 5, 8, 12, 24 and 36 hours after `now`
pub fn sample_schedule(now: DateTime<Utc>) -> Vec<Session> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(i, (title, location, hours, description))| {
            Session::new(
                (i + 1).to_string(),
                *title,
                *location,
                now + chrono::Duration::hours(*hours),
            )
            .with_description(*description)
        })
        .collect()
}
