//! Display timezone selection and formatting
//!
//! All clock math happens in UTC; a [`DisplayZone`] is only used to turn an
//! instant into something readable for the viewer.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::warn;

/// Zone used when neither the requested nor the configured zone is usable
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// A zone offered in the timezone picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneOption {
    /// IANA identifier
    pub value: &'static str,
    /// Short display label
    pub label: &'static str,
}

pub const KNOWN_ZONES: &[ZoneOption] = &[
    ZoneOption { value: "America/New_York", label: "New York" },
    ZoneOption { value: "America/Chicago", label: "Chicago" },
    ZoneOption { value: "America/Denver", label: "Denver" },
    ZoneOption { value: "America/Los_Angeles", label: "Los Angeles" },
    ZoneOption { value: "Europe/London", label: "London" },
    ZoneOption { value: "Europe/Paris", label: "Paris" },
    ZoneOption { value: "Asia/Tokyo", label: "Tokyo" },
    ZoneOption { value: "Australia/Sydney", label: "Sydney" },
    ZoneOption { value: "Pacific/Auckland", label: "Auckland" },
];

/// The viewer's selected timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone {
    tz: Tz,
}

impl DisplayZone {
    /// Parse an IANA zone name (e.g., "Europe/Paris")
    pub fn parse(name: &str) -> Result<Self> {
        let tz: Tz = name
            .trim()
            .parse()
            .map_err(|e| anyhow!("Unknown timezone '{}': {}", name, e))?;
        Ok(Self { tz })
    }

    /// Parse `name`, falling back to `fallback` (and then to
    /// [`DEFAULT_TIMEZONE`]) when it is missing or invalid
    pub fn parse_or_fallback(name: Option<&str>, fallback: &str) -> Self {
        if let Some(name) = name {
            match Self::parse(name) {
                Ok(zone) => return zone,
                Err(e) => warn!("{}; falling back to {}", e, fallback),
            }
        }

        Self::parse(fallback).unwrap_or_else(|e| {
            warn!("{}; falling back to {}", e, DEFAULT_TIMEZONE);
            Self::default()
        })
    }

    /// The zone named by `$TZ`, if set, otherwise `fallback`
    pub fn detect(fallback: &str) -> Self {
        let from_env = std::env::var("TZ").ok();
        Self::parse_or_fallback(from_env.as_deref(), fallback)
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// IANA identifier
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// Picker label: the known label, or the last path segment with
    /// underscores as spaces ("America/Argentina/Buenos_Aires" -> "Buenos Aires")
    pub fn label(&self) -> String {
        let name = self.name();
        match KNOWN_ZONES.iter().find(|z| z.value == name) {
            Some(known) => known.label.to_string(),
            None => name.rsplit('/').next().unwrap_or(name).replace('_', " "),
        }
    }

    pub fn local(&self, at: DateTime<Utc>) -> DateTime<Tz> {
        at.with_timezone(&self.tz)
    }

    /// UTC offset in effect at `at`, e.g. "UTC-04:00"
    pub fn offset_label(&self, at: DateTime<Utc>) -> String {
        let secs = self.local(at).offset().fix().local_minus_utc();
        let sign = if secs < 0 { '-' } else { '+' };
        let secs = secs.abs();
        format!("UTC{}{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60)
    }

    /// Session start as shown in the list, e.g. "Thu, Oct 23, 7:30 PM"
    pub fn format(&self, at: DateTime<Utc>) -> String {
        self.local(at).format("%a, %b %-d, %-I:%M %p").to_string()
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self {
            tz: chrono_tz::America::New_York,
        }
    }
}

impl std::fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
