//! The widget's finite-state record and its transition functions

use std::time::{Duration, Instant};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ClockState, CountdownEvent, CountdownState, Mode, StopwatchEvent, StopwatchState};

/// The one periodic callback the current state needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    Clock,
    Stopwatch,
    Countdown,
}

impl Schedule {
    /// Tick period for this callback
    pub fn period(&self) -> Duration {
        match self {
            Schedule::Clock => Duration::from_millis(1000),
            Schedule::Stopwatch => Duration::from_millis(10),
            Schedule::Countdown => Duration::from_millis(1000),
        }
    }
}

/// Everything the widget displays. Only the transition functions below
/// mutate it; each one leaves `schedule()` describing the callback to arm.
#[derive(Debug, Clone)]
pub struct WidgetState {
    mode: Mode,
    clock: ClockState,
    stopwatch: StopwatchState,
    countdown: CountdownState,
}

impl WidgetState {
    pub fn new(mode: Mode, countdown_minutes: i64) -> Self {
        Self {
            mode,
            clock: ClockState::new(),
            stopwatch: StopwatchState::new(),
            countdown: CountdownState::new(countdown_minutes),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    pub fn stopwatch(&self) -> &StopwatchState {
        &self.stopwatch
    }

    pub fn countdown(&self) -> &CountdownState {
        &self.countdown
    }

    /// Running flag of the active timed mode
    pub fn is_running(&self) -> bool {
        match self.mode {
            Mode::Clock => false,
            Mode::Stopwatch => self.stopwatch.is_running(),
            Mode::Countdown => self.countdown.is_running(),
        }
    }

    /// Paused flag of the active timed mode
    pub fn is_paused(&self) -> bool {
        match self.mode {
            Mode::Clock => false,
            Mode::Stopwatch => self.stopwatch.is_paused(),
            Mode::Countdown => self.countdown.is_paused(),
        }
    }

    pub fn schedule(&self) -> Option<Schedule> {
        match self.mode {
            Mode::Clock => Some(Schedule::Clock),
            Mode::Stopwatch if self.stopwatch.is_ticking() => Some(Schedule::Stopwatch),
            Mode::Countdown if self.countdown.is_ticking() => Some(Schedule::Countdown),
            _ => None,
        }
    }

    /// Switch the active mode. Returns false (and resets nothing) when the
    /// mode is already active.
    pub fn switch_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.clock.reset();
        self.stopwatch.reset();
        self.countdown.reset();
        self.mode = mode;
        true
    }

    pub fn toggle_stopwatch(&mut self, now: Instant) -> StopwatchEvent {
        if self.mode != Mode::Stopwatch {
            return StopwatchEvent::Ignored;
        }
        self.stopwatch.toggle(now)
    }

    pub fn toggle_stopwatch_pause(&mut self, now: Instant) -> StopwatchEvent {
        if self.mode != Mode::Stopwatch {
            return StopwatchEvent::Ignored;
        }
        self.stopwatch.toggle_pause(now)
    }

    pub fn set_countdown_input(&mut self, minutes: i64) -> CountdownEvent {
        if self.mode != Mode::Countdown {
            return CountdownEvent::Ignored;
        }
        self.countdown.set_input(minutes)
    }

    pub fn start_countdown(&mut self) -> CountdownEvent {
        if self.mode != Mode::Countdown {
            return CountdownEvent::Ignored;
        }
        self.countdown.start()
    }

    pub fn stop_countdown(&mut self) -> CountdownEvent {
        if self.mode != Mode::Countdown {
            return CountdownEvent::Ignored;
        }
        self.countdown.stop()
    }

    pub fn toggle_countdown_pause(&mut self) -> CountdownEvent {
        if self.mode != Mode::Countdown {
            return CountdownEvent::Ignored;
        }
        self.countdown.toggle_pause()
    }

    /// Apply one tick of `schedule`. Ticks from a schedule that is no longer
    /// current are dropped and reported as `false`.
    pub fn tick(&mut self, schedule: Schedule, now: Instant, wall: NaiveTime) -> bool {
        if self.schedule() != Some(schedule) {
            debug!("Dropping stale {:?} tick", schedule);
            return false;
        }

        match schedule {
            Schedule::Clock => {
                self.clock.sample(wall);
                true
            }
            Schedule::Stopwatch => self.stopwatch.tick(now),
            Schedule::Countdown => self.countdown.tick() != CountdownEvent::Ignored,
        }
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(Mode::Clock, super::countdown::DEFAULT_INPUT_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> NaiveTime {
        NaiveTime::from_hms_opt(14, 5, 9).unwrap()
    }

    fn assert_reset(state: &WidgetState) {
        assert!(!state.is_running());
        assert!(!state.is_paused());
        assert_eq!(state.stopwatch().elapsed(), 0.0);
        assert!(!state.stopwatch().is_running());
        assert_eq!(state.countdown().remaining(), 0);
        assert!(!state.countdown().is_running());
    }

    #[test]
    fn every_switch_resets_timing_state() {
        let t0 = Instant::now();
        for from in Mode::ALL {
            for to in Mode::ALL {
                if from == to {
                    continue;
                }
                let mut state = WidgetState::new(Mode::Stopwatch, 1);
                state.toggle_stopwatch(t0);
                state.tick(Schedule::Stopwatch, t0 + Duration::from_millis(300), wall());
                state.switch_mode(Mode::Countdown);
                state.start_countdown();
                state.switch_mode(from);
                match from {
                    Mode::Stopwatch => {
                        state.toggle_stopwatch(t0);
                        state.toggle_stopwatch_pause(t0);
                    }
                    Mode::Countdown => {
                        state.start_countdown();
                        state.toggle_countdown_pause();
                    }
                    Mode::Clock => {
                        state.tick(Schedule::Clock, t0, wall());
                    }
                }

                assert!(state.switch_mode(to));
                assert_eq!(state.mode(), to);
                assert_reset(&state);
                assert!(state.clock().sampled().is_none());
            }
        }
    }

    #[test]
    fn switching_to_the_active_mode_keeps_state() {
        let t0 = Instant::now();
        let mut state = WidgetState::new(Mode::Stopwatch, 10);
        state.toggle_stopwatch(t0);
        state.tick(Schedule::Stopwatch, t0 + Duration::from_millis(420), wall());
        assert!(!state.switch_mode(Mode::Stopwatch));
        assert!(state.is_running());
        assert_eq!(state.stopwatch().display(), "00:00:00.42");
    }

    #[test]
    fn schedule_follows_mode_running_and_paused() {
        let t0 = Instant::now();
        let mut state = WidgetState::default();
        assert_eq!(state.schedule(), Some(Schedule::Clock));

        state.switch_mode(Mode::Stopwatch);
        assert_eq!(state.schedule(), None);
        state.toggle_stopwatch(t0);
        assert_eq!(state.schedule(), Some(Schedule::Stopwatch));
        state.toggle_stopwatch_pause(t0);
        assert_eq!(state.schedule(), None);
        state.toggle_stopwatch_pause(t0);
        assert_eq!(state.schedule(), Some(Schedule::Stopwatch));

        state.switch_mode(Mode::Countdown);
        assert_eq!(state.schedule(), None);
        state.set_countdown_input(1);
        state.start_countdown();
        assert_eq!(state.schedule(), Some(Schedule::Countdown));
        for _ in 0..60 {
            state.tick(Schedule::Countdown, t0, wall());
        }
        assert_eq!(state.countdown().display(), "00:00");
        assert_eq!(state.schedule(), None);
    }

    #[test]
    fn stale_ticks_are_dropped() {
        let t0 = Instant::now();
        let mut state = WidgetState::new(Mode::Countdown, 1);
        state.start_countdown();
        state.toggle_countdown_pause();
        assert!(!state.tick(Schedule::Countdown, t0, wall()));
        assert!(!state.tick(Schedule::Clock, t0, wall()));
        assert_eq!(state.countdown().remaining(), 60);
        assert!(state.clock().sampled().is_none());
    }

    #[test]
    fn controls_of_other_modes_are_ignored() {
        let t0 = Instant::now();
        let mut state = WidgetState::default();
        assert_eq!(state.toggle_stopwatch(t0), StopwatchEvent::Ignored);
        assert_eq!(state.start_countdown(), CountdownEvent::Ignored);
        assert_eq!(state.set_countdown_input(3), CountdownEvent::Ignored);
        assert_eq!(state.countdown().input_minutes(), 10);
        assert_eq!(state.schedule(), Some(Schedule::Clock));
    }
}
