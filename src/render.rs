//! Plain-text rendering of the views for the terminal

use chrono::{DateTime, Utc};

use crate::clock::SessionStatus;
use crate::player::PlayerSnapshot;
use crate::scheduler::Listing;
use crate::timezone::{DisplayZone, KNOWN_ZONES};
use crate::view::CountdownSnapshot;

pub const EMPTY_LISTING: &str = "No upcoming sessions available";

pub fn listing(listing: &Listing) -> String {
    let (timezone, rows) = match listing {
        Listing::Empty => return EMPTY_LISTING.to_string(),
        Listing::Sessions { timezone, rows } => (timezone, rows),
    };

    let mut out = format!("Upcoming Sessions ({})\n", timezone);
    for row in rows {
        let marker = if row.selected { '>' } else { ' ' };
        out.push_str(&format!(
            "{} [{}] {:<32} {}\n",
            marker, row.session_id, row.location, row.starts
        ));
        if row.title != row.location {
            out.push_str(&format!("      {}\n", row.title));
        }
        if let Some(languages) = &row.languages {
            out.push_str(&format!("      Languages: {}\n", languages));
        }
    }
    out
}

/// Known zones with their current offsets, marking `selected`
pub fn zones(selected: &DisplayZone, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for option in KNOWN_ZONES {
        let marker = if option.value == selected.name() { '*' } else { ' ' };
        let offset = DisplayZone::parse(option.value)
            .map(|z| z.offset_label(now))
            .unwrap_or_default();
        out.push_str(&format!(
            "{} {:<14} {:<22} {}\n",
            marker, option.label, option.value, offset
        ));
    }
    if !KNOWN_ZONES.iter().any(|z| z.value == selected.name()) {
        out.push_str(&format!(
            "* {:<14} {:<22} {}\n",
            selected.label(),
            selected.name(),
            selected.offset_label(now)
        ));
    }
    out
}

pub fn countdown(snapshot: &CountdownSnapshot) -> String {
    let mut out = snapshot.heading.to_string();
    if let Some(countdown) = &snapshot.countdown {
        let fields: Vec<String> = countdown
            .fields()
            .iter()
            .map(|(value, unit)| format!("{:02} {}", value, unit))
            .collect();
        out.push_str(&format!(" | {}", fields.join("  ")));
    }
    if let Some(message) = snapshot.message {
        out.push_str(&format!(" | {}", message));
    }
    out
}

pub fn player(snapshot: &PlayerSnapshot) -> String {
    let badge = match snapshot.status {
        SessionStatus::Live => format!("[{}]", snapshot.badge),
        _ => format!("({})", snapshot.badge),
    };
    let transport = match (snapshot.controls_enabled, snapshot.is_playing) {
        (false, _) => "play (disabled)",
        (true, true) => "pause",
        (true, false) => "play",
    };
    let volume = if snapshot.muted {
        "muted".to_string()
    } else {
        format!("{}%", snapshot.volume_percent)
    };

    format!(
        "{} {} - {} | {} | vol {} | {}",
        badge, snapshot.title, snapshot.location, transport, volume, snapshot.footer
    )
}
