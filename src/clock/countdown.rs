use serde::Serialize;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_SECOND: i64 = 1000;

/// Remaining time split into the four fields of the standalone countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Split a signed remaining duration. Anything at or past the start
    /// collapses to all zeros.
    pub fn from_remaining_ms(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::default();
        }

        Self {
            days: (diff_ms / MS_PER_DAY) as u64,
            hours: ((diff_ms % MS_PER_DAY) / MS_PER_HOUR) as u64,
            minutes: ((diff_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u64,
            seconds: ((diff_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u64,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Fields in display order with their unit captions
    pub fn fields(&self) -> [(u64, &'static str); 4] {
        [
            (self.days, "Days"),
            (self.hours, "Hours"),
            (self.minutes, "Minutes"),
            (self.seconds, "Seconds"),
        ]
    }
}

impl std::fmt::Display for Countdown {
    /// Each field zero-padded to two digits: `01:02:03:04`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}
