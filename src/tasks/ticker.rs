//! Timer engine background task
//!
//! Keeps at most one periodic callback alive: the one the widget's current
//! schedule asks for. Every schedule change cancels the armed timer before a
//! new one is armed.

use std::sync::Arc;
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::state::{AppState, Schedule};

/// Handle to one armed periodic callback. Dropping it cancels the callback.
#[derive(Debug)]
pub struct TimerHandle {
    schedule: Schedule,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Spawn the periodic callback for `schedule`
    pub fn arm(state: Arc<AppState>, schedule: Schedule) -> Self {
        debug!("Arming {:?} timer every {:?}", schedule, schedule.period());

        // The clock samples right away; timed modes wait one full period
        let period = schedule.period();
        let first = match schedule {
            Schedule::Clock => Instant::now(),
            _ => Instant::now() + period,
        };

        let task = tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if let Err(e) = state.tick(schedule) {
                    error!("Failed to apply {:?} tick: {}", schedule, e);
                }
            }
        });

        Self { schedule, task }
    }

    /// Cancel the callback now
    pub fn cancel(self) {
        debug!("Cancelling {:?} timer", self.schedule);
        self.task.abort();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Background task that re-arms the periodic callback on every schedule change
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting ticker task");

    let mut schedule_rx = state.schedule_tx.subscribe();
    let mut current: Option<TimerHandle> = None;

    loop {
        let schedule = *schedule_rx.borrow_and_update();

        if let Some(handle) = current.take() {
            handle.cancel();
        }
        current = schedule.map(|s| TimerHandle::arm(Arc::clone(&state), s));

        if schedule_rx.changed().await.is_err() {
            info!("Schedule channel closed, stopping ticker");
            break;
        }
    }
}
