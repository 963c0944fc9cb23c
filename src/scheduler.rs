//! Schedule browser
//!
//! Holds the session list, the viewer's display timezone and at most one
//! mounted player. Selecting a different session (or closing the player)
//! unmounts the old player and releases its playback handle before the next
//! one is acquired.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::clock::{Clock, SessionStatus};
use crate::player::{AudioPlayer, MediaBackend, Volume};
use crate::session::{sort_by_start, Session};
use crate::timezone::DisplayZone;
use crate::view::{MountedView, DEFAULT_TICK_INTERVAL};

/// Player settings applied to every session the viewer selects
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    pub stream_url: String,
    pub volume: Volume,
    pub tick_interval: Duration,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            stream_url: "https://example.com/stream".to_string(),
            volume: Volume::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// One row of the session list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub session_id: String,
    pub title: String,
    pub location: String,
    pub languages: Option<String>,
    pub description: Option<String>,
    /// Start time formatted in the display zone
    pub starts: String,
    pub selected: bool,
}

/// The session list as shown to the viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Listing {
    /// No sessions to show
    Empty,
    Sessions { timezone: String, rows: Vec<ListingRow> },
}

pub struct Scheduler {
    sessions: Vec<Session>,
    zone: DisplayZone,
    fallback_timezone: String,
    backend: Arc<dyn MediaBackend>,
    clock: Arc<dyn Clock>,
    settings: PlayerSettings,

    selected_id: Option<String>,

    /// Mounted player for the selected session
    player: Option<MountedView<AudioPlayer>>,
}

impl Scheduler {
    /// Sessions are sorted by start. Ids must be unique; later duplicates
    /// are dropped.
    pub fn new(
        mut sessions: Vec<Session>,
        zone: DisplayZone,
        backend: Arc<dyn MediaBackend>,
        clock: Arc<dyn Clock>,
        settings: PlayerSettings,
    ) -> Self {
        let mut seen = HashSet::new();
        sessions.retain(|s| {
            let first = seen.insert(s.id.clone());
            if !first {
                warn!("Dropping session '{}': duplicate id {}", s.title, s.id);
            }
            first
        });
        sort_by_start(&mut sessions);

        info!(
            "Scheduler ready: {} sessions, displaying in {}",
            sessions.len(),
            zone
        );

        Self {
            sessions,
            zone,
            fallback_timezone: zone.name().to_string(),
            backend,
            clock,
            settings,
            selected_id: None,
            player: None,
        }
    }

    /// Zone used when [`Scheduler::set_timezone`] gets an unusable name
    pub fn with_fallback_timezone(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_timezone = fallback.into();
        self
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn timezone(&self) -> DisplayZone {
        self.zone
    }

    /// Switch the display zone. Unknown names fall back instead of failing.
    pub fn set_timezone(&mut self, name: &str) -> DisplayZone {
        self.zone = DisplayZone::parse_or_fallback(Some(name), &self.fallback_timezone);
        info!("Display timezone set to {}", self.zone);
        self.zone
    }

    pub fn listing(&self) -> Listing {
        if self.sessions.is_empty() {
            return Listing::Empty;
        }

        let selected = self.selected_id();
        let rows = self
            .sessions
            .iter()
            .map(|s| ListingRow {
                session_id: s.id.clone(),
                title: s.title.clone(),
                location: s.location.clone(),
                languages: s.languages.clone(),
                description: s.description.clone(),
                starts: self.zone.format(s.start_time),
                selected: selected == Some(s.id.as_str()),
            })
            .collect();

        Listing::Sessions {
            timezone: self.zone.name().to_string(),
            rows,
        }
    }

    pub fn find(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    /// Select a session and mount a player for it, releasing any previous one
    pub async fn select(&mut self, session_id: &str) -> Result<()> {
        if self.selected_id() == Some(session_id) {
            return Ok(());
        }

        let Some(session) = self.find(session_id).cloned() else {
            anyhow::bail!("Session {} not found", session_id);
        };

        self.close_player().await;

        let player = AudioPlayer::open(
            session,
            self.backend.as_ref(),
            &self.settings.stream_url,
            self.settings.volume,
        )?;

        self.selected_id = Some(session_id.to_string());
        self.player = Some(MountedView::mount(
            format!("player:{}", session_id),
            player,
            Arc::clone(&self.clock),
            self.settings.tick_interval,
        ));

        info!("Selected session {}", session_id);
        Ok(())
    }

    /// Unmount the player (if any) and release its playback handle
    pub async fn close_player(&mut self) {
        self.selected_id = None;
        if let Some(player) = self.player.take() {
            // Dropping the unmounted view drops the player and its handle
            player.unmount().await;
            info!("Closed player");
        }
    }

    pub fn player(&self) -> Option<&MountedView<AudioPlayer>> {
        self.player.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected(&self) -> Option<&Session> {
        self.selected_id().and_then(|id| self.find(id))
    }

    /// Status of the selected session at `now`, without transition history
    pub fn selected_status(&self, now: DateTime<Utc>) -> Option<SessionStatus> {
        self.selected().map(|s| s.status_at(now))
    }

    /// Whether the player panel is active (starting soon or live) at `now`
    pub fn player_active(&self, now: DateTime<Utc>) -> bool {
        matches!(
            self.selected_status(now),
            Some(SessionStatus::StartingSoon | SessionStatus::Live)
        )
    }
}
