use serde::{Deserialize, Serialize};

/// Where a session stands relative to its scheduled start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    /// More than five minutes before the start
    #[default]
    Upcoming,
    /// Inside the five minute window before the start
    StartingSoon,
    /// The start instant has been reached
    Live,
}

impl SessionStatus {
    /// Whether entering this status fires the one-shot transition hooks
    /// (starting-soon notification, auto-play)
    pub fn fires_transition(self) -> bool {
        matches!(self, SessionStatus::StartingSoon | SessionStatus::Live)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "upcoming",
            SessionStatus::StartingSoon => "starting-soon",
            SessionStatus::Live => "live",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
