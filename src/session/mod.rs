//! Session data
//!
//! Sessions are immutable values built once when the list is created:
//! - from the recurring weekly city schedule
//! - from the demo sample list
//! - or straight from configuration

mod schedule;
mod session;

pub use schedule::{sample_schedule, weekly_schedule, ScheduleSource};
pub use session::{sort_by_start, Session};
