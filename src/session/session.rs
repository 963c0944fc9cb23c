use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{self, ClockState, SessionStatus};

/// A scheduled audio broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (e.g., "1", "tokyo-morning")
    pub id: String,

    /// Display title
    pub title: String,

    /// Where the broadcast comes from (e.g., "Tokyo, Japan")
    pub location: String,

    /// Scheduled start instant
    pub start_time: DateTime<Utc>,

    /// Optional blurb shown with the session
    #[serde(default)]
    pub description: Option<String>,

    /// Broadcast languages (e.g., "English and Persian")
    #[serde(default)]
    pub languages: Option<String>,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            start_time,
            description: None,
            languages: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = Some(languages.into());
        self
    }

    /// Current status, ignoring transition history
    pub fn status_at(&self, now: DateTime<Utc>) -> SessionStatus {
        clock::status_for(clock::remaining_ms(self.start_time, now))
    }

    /// Evaluate the clock for this session against the previous tick's status
    pub fn clock_state(&self, now: DateTime<Utc>, previous: SessionStatus) -> ClockState {
        clock::derive(self.start_time, now, previous)
    }
}

/// Sort sessions by start time, earliest first
pub fn sort_by_start(sessions: &mut [Session]) {
    sessions.sort_by_key(|s| s.start_time);
}
