//! Live clock state and 12-hour face derivation

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Last wall-clock sample taken while the clock mode is active
#[derive(Debug, Clone, Default)]
pub struct ClockState {
    sampled: Option<NaiveTime>,
}

impl ClockState {
    /// Create a clock that has not been sampled yet
    pub fn new() -> Self {
        Self { sampled: None }
    }

    /// Record the current time of day
    pub fn sample(&mut self, now: NaiveTime) {
        self.sampled = Some(now);
    }

    /// Forget the last sample
    pub fn reset(&mut self) {
        self.sampled = None;
    }

    pub fn sampled(&self) -> Option<NaiveTime> {
        self.sampled
    }

    /// Derive the displayed face from the last sample
    pub fn face(&self) -> ClockFace {
        match self.sampled {
            Some(time) => ClockFace::from_time(&time),
            None => ClockFace::unsampled(),
        }
    }
}

/// Zero-padded 12-hour clock fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFace {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub period: Period,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    AM,
    PM,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::AM => "AM",
            Period::PM => "PM",
        }
    }
}

impl ClockFace {
    /// Build the face for any time-of-day value; hour 0 shows as 12
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        let (is_pm, hour12) = time.hour12();
        Self {
            hours: format!("{:02}", hour12),
            minutes: format!("{:02}", time.minute()),
            seconds: format!("{:02}", time.second()),
            period: if is_pm { Period::PM } else { Period::AM },
        }
    }

    /// Face shown before the first sample arrives
    pub fn unsampled() -> Self {
        Self {
            hours: "00".to_string(),
            minutes: "00".to_string(),
            seconds: "00".to_string(),
            period: Period::PM,
        }
    }

    /// `hh:mm:ss` without the period
    pub fn display(&self) -> String {
        format!("{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}
