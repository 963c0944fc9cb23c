use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info};

use super::handle::PlaybackHandle;
use super::media::MediaBackend;
use super::volume::Volume;
use crate::clock::{ClockState, SessionStatus, LIVE_LABEL};
use crate::session::Session;
use crate::view::TickTarget;

/// Player for one selected session.
///
/// Shows the countdown until the session starts, then starts playback on its
/// own exactly once when the session goes live. Pausing is left to the user.
pub struct AudioPlayer {
    session: Session,

    /// Playback resource, released when the player is dropped
    handle: PlaybackHandle,

    volume: Volume,

    /// Status stored from the previous tick
    status: SessionStatus,

    /// Countdown label from the latest tick
    label: String,

    /// Whether playback is (believed to be) running
    is_playing: bool,

    /// Set when the user pauses; automatic triggers never override it
    user_paused: bool,

    /// Number of play requests issued to the media element
    play_requests: usize,
}

/// What the player view shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub session_id: String,
    pub title: String,
    pub location: String,
    pub status: SessionStatus,
    /// Badge text: "LIVE NOW" or the countdown label
    pub badge: String,
    /// Countdown line shown next to the controls while starting soon
    pub countdown: Option<String>,
    pub is_playing: bool,
    /// Play/pause only works once the session is live
    pub controls_enabled: bool,
    pub volume_percent: u8,
    pub muted: bool,
    pub footer: &'static str,
}

impl AudioPlayer {
    /// Acquire a playback handle for `stream_url` and set up the player
    pub fn open(
        session: Session,
        backend: &dyn MediaBackend,
        stream_url: &str,
        volume: Volume,
    ) -> Result<Self> {
        let handle = PlaybackHandle::acquire(backend, stream_url, volume.fraction())?;

        info!("Opened player for session {} ({})", session.id, session.title);

        Ok(Self {
            session,
            handle,
            volume,
            status: SessionStatus::default(),
            label: String::new(),
            is_playing: false,
            user_paused: false,
            play_requests: 0,
        })
    }

    /// Re-derive the clock for `now` and apply its side effects
    pub async fn evaluate(&mut self, now: DateTime<Utc>) -> ClockState {
        let state = self.session.clock_state(now, self.status);

        if state.transitioned {
            info!(
                "Session {} is now {} ({})",
                self.session.id, state.status, state.label
            );
        }

        self.status = state.status;
        self.label = state.label.clone();

        match state.status {
            SessionStatus::Live => {
                if state.transitioned && !self.is_playing && !self.user_paused {
                    info!("Auto-playing session {}", self.session.id);
                    self.start_playback().await;
                }
            }
            _ => {
                if self.is_playing {
                    self.handle.pause();
                    self.is_playing = false;
                }
            }
        }

        state
    }

    /// Play/pause control. Ignored until the session is live.
    pub async fn toggle_play_pause(&mut self) {
        if self.status != SessionStatus::Live {
            debug!(
                "Ignoring play/pause for session {}: {}",
                self.session.id, self.status
            );
            return;
        }

        if self.is_playing {
            self.handle.pause();
            self.is_playing = false;
            self.user_paused = true;
            info!("Paused session {}", self.session.id);
        } else {
            self.user_paused = false;
            self.start_playback().await;
        }
    }

    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.handle.set_volume(self.volume.fraction());
    }

    /// Mute or unmute explicitly, regardless of the current state
    pub fn set_muted(&mut self, muted: bool) {
        self.volume.set_muted(muted);
        self.handle.set_volume(self.volume.fraction());
    }

    pub fn set_volume(&mut self, percent: u8) {
        self.volume.set_percent(percent);
        self.handle.set_volume(self.volume.fraction());
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn play_requests(&self) -> usize {
        self.play_requests
    }

    pub fn handle(&self) -> &PlaybackHandle {
        &self.handle
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        let live = self.status == SessionStatus::Live;

        PlayerSnapshot {
            session_id: self.session.id.clone(),
            title: self.session.title.clone(),
            location: self.session.location.clone(),
            status: self.status,
            badge: if live {
                LIVE_LABEL.to_string()
            } else {
                self.label.clone()
            },
            countdown: (self.status == SessionStatus::StartingSoon).then(|| self.label.clone()),
            is_playing: self.is_playing,
            controls_enabled: live,
            volume_percent: self.volume.percent(),
            muted: self.volume.is_muted(),
            footer: if live {
                "Streaming live"
            } else {
                "Audio will begin automatically when the session starts"
            },
        }
    }

    /// Issue one play request. The player only counts as playing once the
    /// element accepts it; a failure or a cancelled request leaves it stopped.
    async fn start_playback(&mut self) {
        self.is_playing = false;
        self.play_requests += 1;

        match self.handle.play().await {
            Ok(()) => self.is_playing = true,
            Err(e) => {
                error!("Error playing audio for session {}: {:#}", self.session.id, e);
            }
        }
    }
}

#[async_trait::async_trait]
impl TickTarget for AudioPlayer {
    async fn tick(&mut self, now: DateTime<Utc>) {
        self.evaluate(now).await;
    }
}
