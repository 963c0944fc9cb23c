use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;

use crate::player::DEFAULT_VOLUME_PERCENT;
use crate::session::{sample_schedule, sort_by_start, weekly_schedule, ScheduleSource, Session};
use crate::timezone::{DisplayZone, DEFAULT_TIMEZONE};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub player: PlayerConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// IANA zone to display times in (falls back to $TZ, then `fallback_timezone`)
    pub timezone: Option<String>,
    pub fallback_timezone: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Stream URL handed to the media element
    pub stream_url: String,
    /// Initial volume percentage
    pub volume: u8,
    /// How often mounted views re-evaluate the clock
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub source: ScheduleSource,
    /// Sessions used when `source = "inline"`
    pub sessions: Vec<Session>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: None,
            fallback_timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            stream_url: "https://example.com/stream".to_string(),
            volume: DEFAULT_VOLUME_PERCENT,
            tick_interval_ms: 1000,
        }
    }
}

impl Config {
    /// Load from a config file (extension optional, e.g. "config/livestream-scheduler")
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .with_context(|| format!("Failed to read config {}", path))?;

        let cfg: Self = settings
            .try_deserialize()
            .with_context(|| format!("Invalid config {}", path))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Like [`Config::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()
            .with_context(|| format!("Failed to read config {}", path))?;

        let cfg: Self = settings
            .try_deserialize()
            .with_context(|| format!("Invalid config {}", path))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.player.tick_interval_ms == 0 {
            anyhow::bail!("player.tick_interval_ms must be greater than zero");
        }
        if self.player.volume > 100 {
            anyhow::bail!("player.volume must be between 0 and 100, got {}", self.player.volume);
        }

        let mut ids = HashSet::new();
        for session in &self.schedule.sessions {
            if !ids.insert(session.id.as_str()) {
                anyhow::bail!("schedule.sessions: duplicate session id '{}'", session.id);
            }
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.player.tick_interval_ms)
    }

    /// Display zone from `override_name`, the config, or `$TZ`, with fallback
    pub fn display_zone(&self, override_name: Option<&str>) -> DisplayZone {
        let fallback = &self.display.fallback_timezone;
        match override_name.or(self.display.timezone.as_deref()) {
            Some(name) => DisplayZone::parse_or_fallback(Some(name), fallback),
            None => DisplayZone::detect(fallback),
        }
    }

    /// Build the session list for the configured source, sorted by start
    pub fn sessions(&self, zone: &DisplayZone, now: DateTime<Utc>) -> Vec<Session> {
        let mut sessions = match self.schedule.source {
            ScheduleSource::Weekly => weekly_schedule(zone, now),
            ScheduleSource::Sample => sample_schedule(now),
            ScheduleSource::Inline => self.schedule.sessions.clone(),
        };
        sort_by_start(&mut sessions);
        sessions
    }
}
