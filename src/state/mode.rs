//! Display mode selection

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The exclusive active display of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Clock,
    Stopwatch,
    Countdown,
}

impl Mode {
    /// All modes in selector order
    pub const ALL: [Mode; 3] = [Mode::Clock, Mode::Stopwatch, Mode::Countdown];

    /// Machine name used in routes and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Clock => "clock",
            Mode::Stopwatch => "stopwatch",
            Mode::Countdown => "countdown",
        }
    }

    /// Label shown on the mode selector button
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Clock => "Clock",
            Mode::Stopwatch => "Stopwatch",
            Mode::Countdown => "Countdown",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clock" => Ok(Mode::Clock),
            "stopwatch" => Ok(Mode::Stopwatch),
            "countdown" => Ok(Mode::Countdown),
            other => Err(format!("Unknown mode '{}' (expected clock, stopwatch or countdown)", other)),
        }
    }
}
