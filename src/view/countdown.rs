use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::ticker::TickTarget;
use crate::clock::{self, Countdown, SessionStatus};
use crate::session::Session;

/// One-shot notice sent when a session crosses into starting-soon or live
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionNotice {
    pub session_id: String,
    pub title: String,
    pub status: SessionStatus,
    pub at: DateTime<Utc>,
}

/// Standalone countdown for a single session
pub struct CountdownView {
    session: Session,

    /// Status stored from the previous tick
    status: SessionStatus,

    countdown: Countdown,

    /// Number of ticks applied so far
    ticks: u64,

    notices: Option<mpsc::UnboundedSender<SessionNotice>>,
}

/// What the countdown view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownSnapshot {
    pub session_id: String,
    pub status: SessionStatus,
    pub heading: &'static str,
    /// Hidden once the session is live
    pub countdown: Option<Countdown>,
    pub message: Option<&'static str>,
}

impl CountdownView {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            status: SessionStatus::default(),
            countdown: Countdown::default(),
            ticks: 0,
            notices: None,
        }
    }

    /// Send a [`SessionNotice`] on every transition
    pub fn with_notices(mut self, notices: mpsc::UnboundedSender<SessionNotice>) -> Self {
        self.notices = Some(notices);
        self
    }

    /// Re-derive status and countdown fields for `now`
    pub fn update(&mut self, now: DateTime<Utc>) {
        let diff_ms = clock::remaining_ms(self.session.start_time, now);
        let state = clock::derive(self.session.start_time, now, self.status);

        self.status = state.status;
        self.countdown = Countdown::from_remaining_ms(diff_ms);
        self.ticks += 1;

        if state.transitioned {
            info!("Session {} is {}", self.session.id, state.status);
            self.notify(state.status, now);
        }
    }

    fn notify(&self, status: SessionStatus, at: DateTime<Utc>) {
        let Some(notices) = &self.notices else {
            return;
        };

        let notice = SessionNotice {
            session_id: self.session.id.clone(),
            title: self.session.title.clone(),
            status,
            at,
        };

        if notices.send(notice).is_err() {
            warn!(
                "Notice receiver for session {} is gone; dropping {} notice",
                self.session.id, status
            );
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        let (heading, message) = match self.status {
            SessionStatus::Upcoming => ("Countdown to Session", None),
            SessionStatus::StartingSoon => (
                "Starting Soon",
                Some("The session will begin in less than 5 minutes!"),
            ),
            SessionStatus::Live => (
                "Live Now",
                Some("The session has started. Enjoy the stream!"),
            ),
        };

        CountdownSnapshot {
            session_id: self.session.id.clone(),
            status: self.status,
            heading,
            countdown: (self.status != SessionStatus::Live).then_some(self.countdown),
            message,
        }
    }
}

#[async_trait::async_trait]
impl TickTarget for CountdownView {
    async fn tick(&mut self, now: DateTime<Utc>) {
        self.update(now);
    }
}
