//! Audio player
//!
//! Wraps one playback handle per selected session:
//! - countdown badge until the session starts
//! - a single automatic play request when it goes live
//! - user play/pause, mute and volume, applied to the active handle only

mod handle;
mod media;
mod player;
mod volume;

pub use handle::PlaybackHandle;
pub use media::{MediaBackend, MediaElement, TracingBackend, TracingMedia};
pub use player::{AudioPlayer, PlayerSnapshot};
pub use volume::{Volume, DEFAULT_VOLUME_PERCENT};
