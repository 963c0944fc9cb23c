use serde::{Deserialize, Serialize};

/// Default player volume percentage
pub const DEFAULT_VOLUME_PERCENT: u8 = 80;

/// Player volume: a percentage plus a mute flag.
///
/// A percentage of zero counts as muted. The last audible percentage is kept
/// so that unmuting brings it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    percent: u8,
    muted: bool,
    last_audible: u8,
}

impl Volume {
    pub fn new(percent: u8) -> Self {
        let percent = percent.min(100);
        Self {
            percent,
            muted: false,
            last_audible: if percent > 0 {
                percent
            } else {
                DEFAULT_VOLUME_PERCENT
            },
        }
    }

    /// Slider position (0-100)
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Muted explicitly or by a zero percentage
    pub fn is_muted(&self) -> bool {
        self.muted || self.percent == 0
    }

    /// Fraction handed to the media element
    pub fn fraction(&self) -> f32 {
        if self.is_muted() {
            0.0
        } else {
            self.percent as f32 / 100.0
        }
    }

    /// Move the slider. Any audible value clears the mute flag.
    pub fn set_percent(&mut self, percent: u8) {
        let percent = percent.min(100);
        if percent > 0 {
            self.last_audible = percent;
            self.muted = false;
        }
        self.percent = percent;
    }

    /// Unmuting a zero slider brings back the last audible percentage
    pub fn set_muted(&mut self, muted: bool) {
        if muted {
            self.muted = true;
        } else {
            self.muted = false;
            if self.percent == 0 {
                self.percent = self.last_audible;
            }
        }
    }

    pub fn toggle_mute(&mut self) {
        self.set_muted(!self.is_muted());
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME_PERCENT)
    }
}
