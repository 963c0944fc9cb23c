pub mod clock;
pub mod config;
pub mod player;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod timezone;
pub mod view;

pub use clock::{derive, Clock, ClockState, Countdown, ManualClock, SessionStatus, SystemClock};
pub use config::Config;
pub use player::{AudioPlayer, MediaBackend, MediaElement, PlaybackHandle, PlayerSnapshot, Volume};
pub use scheduler::{Listing, PlayerSettings, Scheduler};
pub use session::{ScheduleSource, Session};
pub use timezone::DisplayZone;
pub use view::{CountdownView, MountedView, SessionNotice, TickTarget};
