//! Timer-driven views
//!
//! Each view owns its own interval timer and its own derived state; the only
//! thing two views share is the session start instant they both read.

mod countdown;
mod ticker;

pub use countdown::{CountdownSnapshot, CountdownView, SessionNotice};
pub use ticker::{MountedView, TickTarget, DEFAULT_TICK_INTERVAL};
