//! Session timing
//!
//! Derives a session's status and countdown from its start instant and the
//! current instant:
//! - more than five minutes out: upcoming ("Starts in Hh Mm")
//! - five minutes or less: starting soon ("Starting in M:SS")
//! - at or past the start: live ("LIVE NOW")
//!
//! Both the standalone countdown and the audio player call [`derive`] on every
//! tick, passing the status they stored on the previous tick so that
//! transitions are edge-triggered.

mod countdown;
mod derivation;
mod source;
mod status;

pub use countdown::Countdown;
pub use derivation::{
    countdown_label, derive, remaining_ms, status_for, ClockState, LIVE_LABEL,
    STARTING_SOON_WINDOW_MS,
};
pub use source::{Clock, ManualClock, OffsetClock, SystemClock};
pub use status::SessionStatus;
