use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::clock::Clock;

/// Default re-evaluation period for mounted views
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// View state re-evaluated on every tick
#[async_trait::async_trait]
pub trait TickTarget: Send + 'static {
    async fn tick(&mut self, now: DateTime<Utc>);
}

/// A view mounted on its own interval timer.
///
/// The first tick runs immediately, then once per period. Missed ticks are
/// skipped rather than replayed; every tick reads absolute time from the
/// clock, so nothing drifts.
///
/// Unmounting (explicitly or by dropping) stops the timer. Once
/// [`MountedView::unmount`] returns, the view's state is never touched again.
pub struct MountedView<T: TickTarget> {
    name: String,

    /// View state, shared with the timer task
    state: Arc<Mutex<T>>,

    /// Checked under the state lock before every tick
    mounted: Arc<AtomicBool>,

    /// Handle for the timer task
    task: Option<JoinHandle<()>>,
}

impl<T: TickTarget> MountedView<T> {
    /// Mount `target` and start its timer. Must be called inside a tokio runtime.
    pub fn mount(
        name: impl Into<String>,
        target: T,
        clock: Arc<dyn Clock>,
        period: Duration,
    ) -> Self {
        let name = name.into();
        let state = Arc::new(Mutex::new(target));
        let mounted = Arc::new(AtomicBool::new(true));

        let task_state = Arc::clone(&state);
        let task_mounted = Arc::clone(&mounted);
        let task_name = name.clone();

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;

                let mut view = task_state.lock().await;
                if !task_mounted.load(Ordering::SeqCst) {
                    break;
                }

                let now = clock.now();
                debug!("Tick for {} at {}", task_name, now);
                view.tick(now).await;
            }

            debug!("Timer for {} stopped", task_name);
        });

        info!("Mounted {} (tick every {:?})", name, period);

        Self {
            name,
            state,
            mounted,
            task: Some(task),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Lock the view state, e.g. to read a snapshot or apply a user command.
    /// Commands and ticks are serialized on this lock.
    pub async fn lock(&self) -> MutexGuard<'_, T> {
        self.state.lock().await
    }

    /// Shared handle to the view state that outlives the mount
    pub fn state(&self) -> Arc<Mutex<T>> {
        Arc::clone(&self.state)
    }

    /// Stop the timer and wait for it to finish
    pub async fn unmount(mut self) {
        {
            // Flip the flag under the lock so an in-flight tick completes
            // first and no later tick can start.
            let _view = self.state.lock().await;
            self.mounted.store(false, Ordering::SeqCst);
        }

        if let Some(task) = self.task.take() {
            task.abort();
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    error!("Timer task for {} panicked: {}", self.name, e);
                }
            }
        }

        info!("Unmounted {}", self.name);
    }
}

/// Dropping aborts the timer without waiting for an in-flight tick, which is
/// cancelled at its next await point. Use [`MountedView::unmount`] to let it
/// finish first.
impl<T: TickTarget> Drop for MountedView<T> {
    fn drop(&mut self) {
        self.mounted.store(false, Ordering::SeqCst);
        if let Some(task) = self.task.take() {
            task.abort();
            info!("Unmounted {} on drop", self.name);
        }
    }
}
