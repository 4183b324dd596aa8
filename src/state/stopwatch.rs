//! Stopwatch state machine
//!
//! Idle -> Running -> Paused -> Running -> Stopped (= Idle). Elapsed time is
//! accumulated from the delta between successive ticks and kept rounded to
//! hundredths of a second.

use std::time::Instant;

/// Outcome of a stopwatch control press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopwatchEvent {
    Started,
    /// Carries the final reading taken just before the reset
    Stopped { elapsed: f64 },
    Paused,
    Resumed,
    /// The control is disabled in the current state
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct StopwatchState {
    elapsed: f64,
    running: bool,
    paused: bool,
    reference: Option<Instant>,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the 10ms tick should currently be armed
    pub fn is_ticking(&self) -> bool {
        self.running && !self.paused
    }

    /// Start/Stop toggle. Starting always begins from zero; stopping reports
    /// the final reading and resets the display.
    pub fn toggle(&mut self, now: Instant) -> StopwatchEvent {
        if self.running {
            self.advance(now);
            let elapsed = self.elapsed;
            self.reset();
            StopwatchEvent::Stopped { elapsed }
        } else {
            self.elapsed = 0.0;
            self.running = true;
            self.paused = false;
            self.reference = Some(now);
            StopwatchEvent::Started
        }
    }

    /// Pause/Resume, only available while running
    pub fn toggle_pause(&mut self, now: Instant) -> StopwatchEvent {
        if !self.running {
            return StopwatchEvent::Ignored;
        }

        if self.paused {
            // Re-anchor so the paused interval is not counted
            self.reference = Some(now);
            self.paused = false;
            StopwatchEvent::Resumed
        } else {
            self.advance(now);
            self.reference = None;
            self.paused = true;
            StopwatchEvent::Paused
        }
    }

    /// Periodic update; returns false when the tick was ignored
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_ticking() {
            return false;
        }
        self.advance(now);
        true
    }

    /// Back to idle with nothing on the display
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
        self.paused = false;
        self.reference = None;
    }

    /// Current reading as `HH:MM:SS.hh`
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed)
    }

    fn advance(&mut self, now: Instant) {
        if !self.is_ticking() {
            return;
        }
        if let Some(reference) = self.reference {
            let delta = now.saturating_duration_since(reference).as_secs_f64();
            self.elapsed = round_hundredths(self.elapsed + delta);
            self.reference = Some(now);
        }
    }
}

/// Round a seconds value to two decimal places
pub fn round_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

/// Format seconds as `HH:MM:SS.hh`, every field zero-padded to two digits
pub fn format_elapsed(seconds: f64) -> String {
    let total = (seconds.max(0.0) * 100.0).round() as u64;
    let hours = total / 360_000;
    let minutes = (total / 6_000) % 60;
    let secs = (total / 100) % 60;
    let hundredths = total % 100;
    format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, secs, hundredths)
}
