//! Countdown state machine
//!
//! Configuring -> Running -> Paused -> Running -> Finished/Stopped.

/// Minutes pre-filled in the countdown input
pub const DEFAULT_INPUT_MINUTES: i64 = 10;

/// Outcome of a countdown control press or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    InputChanged(i64),
    Started { remaining: u64 },
    Stopped,
    Paused,
    Resumed,
    Ticked { remaining: u64 },
    /// Reached zero on its own
    Finished,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct CountdownState {
    remaining: u64,
    input_minutes: i64,
    running: bool,
    paused: bool,
}

impl CountdownState {
    pub fn new(input_minutes: i64) -> Self {
        Self {
            remaining: 0,
            input_minutes,
            running: false,
            paused: false,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn input_minutes(&self) -> i64 {
        self.input_minutes
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the 1s tick should currently be armed
    pub fn is_ticking(&self) -> bool {
        self.running && !self.paused
    }

    /// Change the minutes input; the input is hidden while running
    pub fn set_input(&mut self, minutes: i64) -> CountdownEvent {
        if self.running {
            return CountdownEvent::Ignored;
        }
        self.input_minutes = minutes;
        CountdownEvent::InputChanged(minutes)
    }

    /// Load the input into the display and begin counting down
    pub fn start(&mut self) -> CountdownEvent {
        if self.running {
            return CountdownEvent::Ignored;
        }
        self.remaining = u64::try_from(self.input_minutes)
            .unwrap_or(0)
            .saturating_mul(60);
        self.running = true;
        self.paused = false;
        CountdownEvent::Started { remaining: self.remaining }
    }

    /// Manual abort
    pub fn stop(&mut self) -> CountdownEvent {
        if !self.running {
            return CountdownEvent::Ignored;
        }
        self.reset();
        CountdownEvent::Stopped
    }

    pub fn toggle_pause(&mut self) -> CountdownEvent {
        if !self.running {
            return CountdownEvent::Ignored;
        }
        self.paused = !self.paused;
        if self.paused {
            CountdownEvent::Paused
        } else {
            CountdownEvent::Resumed
        }
    }

    /// One second passed. Hitting zero halts the countdown.
    pub fn tick(&mut self) -> CountdownEvent {
        if !self.is_ticking() {
            return CountdownEvent::Ignored;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            self.paused = false;
            CountdownEvent::Finished
        } else {
            CountdownEvent::Ticked { remaining: self.remaining }
        }
    }

    /// Clear timing state; the minutes input is kept
    pub fn reset(&mut self) {
        self.remaining = 0;
        self.running = false;
        self.paused = false;
    }

    /// Current reading as `MM:SS`
    pub fn display(&self) -> String {
        format_remaining(self.remaining)
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_MINUTES)
    }
}

/// Format whole seconds as `MM:SS`; minutes are not wrapped into hours
pub fn format_remaining(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
