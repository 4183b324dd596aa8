//! Shared widget handle used by the HTTP handlers and the ticker

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Local, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{CountdownEvent, Mode, Schedule, StopwatchEvent, WidgetState};
use crate::view::{self, WidgetView};

/// Main application state: the widget record plus the channel that tells the
/// ticker which periodic callback to keep armed
#[derive(Debug)]
pub struct AppState {
    /// The widget's display state
    pub widget: Arc<Mutex<WidgetState>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for schedule changes
    pub schedule_tx: watch::Sender<Option<Schedule>>,
    /// Keep the receiver alive to prevent channel closure
    pub _schedule_rx: watch::Receiver<Option<Schedule>>,
}

/// Monotonic "now", driven by the tokio clock so paused-time tests advance it
fn monotonic_now() -> Instant {
    tokio::time::Instant::now().into_std()
}

impl AppState {
    /// Create a new AppState showing `mode`, with the countdown input preset
    pub fn new(port: u16, host: String, mode: Mode, countdown_minutes: i64) -> Self {
        let widget = WidgetState::new(mode, countdown_minutes);
        let (schedule_tx, schedule_rx) = watch::channel(widget.schedule());

        Self {
            widget: Arc::new(Mutex::new(widget)),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            schedule_tx,
            _schedule_rx: schedule_rx,
        }
    }

    /// Apply a transition to the widget, record it and republish the schedule
    pub fn update_widget<F, R>(&self, action: &str, transition: F) -> Result<(R, WidgetView), String>
    where
        F: FnOnce(&mut WidgetState, Instant) -> R,
    {
        let mut widget = self.widget.lock()
            .map_err(|e| format!("Failed to lock widget state: {}", e))?;

        let outcome = transition(&mut *widget, monotonic_now());
        let rendered = view::render(&widget);
        // Publish under the lock so schedules reach the ticker in transition order
        self.publish_schedule(widget.schedule());
        drop(widget);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok((outcome, rendered))
    }

    /// Mode selector press
    pub fn switch_mode(&self, mode: Mode) -> Result<WidgetView, String> {
        let (changed, rendered) = self.update_widget(mode.as_str(), |w, _| w.switch_mode(mode))?;
        if changed {
            info!("Switched to {} mode", mode);
        } else {
            debug!("Already in {} mode", mode);
        }
        Ok(rendered)
    }

    /// Stopwatch Start/Stop toggle
    pub fn toggle_stopwatch(&self) -> Result<(StopwatchEvent, WidgetView), String> {
        let result = self.update_widget("stopwatch-toggle", |w, now| w.toggle_stopwatch(now))?;
        log_stopwatch_event(&result.0);
        Ok(result)
    }

    /// Stopwatch Pause/Resume
    pub fn toggle_stopwatch_pause(&self) -> Result<(StopwatchEvent, WidgetView), String> {
        let result = self.update_widget("stopwatch-pause", |w, now| w.toggle_stopwatch_pause(now))?;
        log_stopwatch_event(&result.0);
        Ok(result)
    }

    /// Countdown minutes input change
    pub fn set_countdown_input(&self, minutes: i64) -> Result<(CountdownEvent, WidgetView), String> {
        let result = self.update_widget("countdown-input", |w, _| w.set_countdown_input(minutes))?;
        log_countdown_event(&result.0);
        Ok(result)
    }

    pub fn start_countdown(&self) -> Result<(CountdownEvent, WidgetView), String> {
        let result = self.update_widget("countdown-start", |w, _| w.start_countdown())?;
        log_countdown_event(&result.0);
        Ok(result)
    }

    pub fn stop_countdown(&self) -> Result<(CountdownEvent, WidgetView), String> {
        let result = self.update_widget("countdown-stop", |w, _| w.stop_countdown())?;
        log_countdown_event(&result.0);
        Ok(result)
    }

    pub fn toggle_countdown_pause(&self) -> Result<(CountdownEvent, WidgetView), String> {
        let result = self.update_widget("countdown-pause", |w, _| w.toggle_countdown_pause())?;
        log_countdown_event(&result.0);
        Ok(result)
    }

    /// Run one tick of `schedule`. Returns whether the tick was applied.
    pub fn tick(&self, schedule: Schedule) -> Result<bool, String> {
        let mut widget = self.widget.lock()
            .map_err(|e| format!("Failed to lock widget state: {}", e))?;

        let applied = widget.tick(schedule, monotonic_now(), Local::now().time());
        let next = widget.schedule();
        if schedule == Schedule::Countdown && applied && next.is_none() {
            info!("Countdown finished");
        }

        // A countdown reaching zero switches its own tick off
        self.publish_schedule(next);
        drop(widget);
        Ok(applied)
    }

    /// Notify the ticker, but only when the required callback actually changed
    pub fn publish_schedule(&self, schedule: Option<Schedule>) {
        let changed = self.schedule_tx.send_if_modified(|current| {
            if *current == schedule {
                false
            } else {
                *current = schedule;
                true
            }
        });
        if changed {
            debug!("Schedule changed to {:?}", schedule);
        }
    }

    /// Current rendering of the widget
    pub fn get_view(&self) -> Result<WidgetView, String> {
        self.widget.lock()
            .map(|widget| view::render(&widget))
            .map_err(|e| format!("Failed to lock widget state: {}", e))
    }

    /// Periodic callback currently requested
    pub fn get_schedule(&self) -> Option<Schedule> {
        *self.schedule_tx.borrow()
    }

    /// Snapshot of the widget record
    pub fn get_widget_state(&self) -> Result<WidgetState, String> {
        self.widget.lock()
            .map(|widget| widget.clone())
            .map_err(|e| format!("Failed to lock widget state: {}", e))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;
        
        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

fn log_stopwatch_event(event: &StopwatchEvent) {
    match event {
        StopwatchEvent::Started => info!("Stopwatch started"),
        StopwatchEvent::Stopped { elapsed } => info!("Stopwatch stopped at {:.2}s", elapsed),
        StopwatchEvent::Paused => info!("Stopwatch paused"),
        StopwatchEvent::Resumed => info!("Stopwatch resumed"),
        StopwatchEvent::Ignored => warn!("Stopwatch control is not available right now"),
    }
}

fn log_countdown_event(event: &CountdownEvent) {
    match event {
        CountdownEvent::InputChanged(minutes) => info!("Countdown input set to {} minutes", minutes),
        CountdownEvent::Started { remaining } => info!("Countdown started with {}s", remaining),
        CountdownEvent::Stopped => info!("Countdown stopped"),
        CountdownEvent::Paused => info!("Countdown paused"),
        CountdownEvent::Resumed => info!("Countdown resumed"),
        CountdownEvent::Finished => info!("Countdown finished"),
        CountdownEvent::Ticked { remaining } => debug!("Countdown at {}s", remaining),
        CountdownEvent::Ignored => warn!("Countdown control is not available right now"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mode: Mode) -> AppState {
        AppState::new(0, "127.0.0.1".to_string(), mode, 1)
    }

    #[test]
    fn initial_schedule_matches_mode() {
        assert_eq!(state(Mode::Clock).get_schedule(), Some(Schedule::Clock));
        assert_eq!(state(Mode::Stopwatch).get_schedule(), None);
    }

    #[test]
    fn transitions_publish_schedule_changes() {
        let app = state(Mode::Clock);
        let mut rx = app.schedule_tx.subscribe();

        app.switch_mode(Mode::Countdown).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), None);

        // Input changes leave the schedule alone
        app.set_countdown_input(2).unwrap();
        assert!(!rx.has_changed().unwrap());

        let (event, view) = app.start_countdown().unwrap();
        assert_eq!(event, CountdownEvent::Started { remaining: 120 });
        assert_eq!(view.display, "02:00");
        assert_eq!(*rx.borrow_and_update(), Some(Schedule::Countdown));

        app.toggle_countdown_pause().unwrap();
        assert_eq!(*rx.borrow_and_update(), None);
    }

    #[test]
    fn countdown_tick_to_zero_turns_schedule_off() {
        let app = state(Mode::Countdown);
        app.start_countdown().unwrap();
        for _ in 0..60 {
            assert!(app.tick(Schedule::Countdown).unwrap());
        }
        assert_eq!(app.get_schedule(), None);
        assert!(!app.tick(Schedule::Countdown).unwrap());
        assert_eq!(app.get_view().unwrap().display, "00:00");
    }

    #[test]
    fn concurrent_pause_presses_leave_matching_schedule() {
        for round in 0..200 {
            let app = Arc::new(state(Mode::Stopwatch));
            app.toggle_stopwatch().unwrap();

            let workers: Vec<_> = (0..4)
                .map(|_| {
                    let app = Arc::clone(&app);
                    std::thread::spawn(move || {
                        for _ in 0..51 {
                            app.toggle_stopwatch_pause().unwrap();
                        }
                    })
                })
                .collect();
            for worker in workers {
                worker.join().unwrap();
            }

            let widget = app.get_widget_state().unwrap();
            assert!(widget.stopwatch().is_running());
            assert_eq!(app.get_schedule(), widget.schedule(), "round {}", round);
        }
    }

    #[test]
    fn concurrent_stop_and_ticks_leave_matching_schedule() {
        for round in 0..200 {
            let app = Arc::new(state(Mode::Countdown));
            app.start_countdown().unwrap();

            let ticker = {
                let app = Arc::clone(&app);
                std::thread::spawn(move || {
                    for _ in 0..20 {
                        app.tick(Schedule::Countdown).unwrap();
                    }
                })
            };
            app.stop_countdown().unwrap();
            ticker.join().unwrap();

            assert_eq!(app.get_schedule(), None, "round {}", round);
            assert_eq!(app.get_widget_state().unwrap().schedule(), None);
        }
    }

    #[test]
    fn last_action_is_recorded() {
        let app = state(Mode::Clock);
        assert_eq!(app.get_last_action(), (None, None));
        app.switch_mode(Mode::Stopwatch).unwrap();
        app.toggle_stopwatch().unwrap();
        let (action, time) = app.get_last_action();
        assert_eq!(action.as_deref(), Some("stopwatch-toggle"));
        assert!(time.is_some());
    }
}
