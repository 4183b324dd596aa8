//! Visual surface of the widget
//!
//! Describes what a page shows for the current state: the mode selector,
//! the display text and every control with its label, visibility and
//! enabled flag. A renderer only has to draw this.

use serde::{Deserialize, Serialize};

use crate::state::{Mode, WidgetState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetView {
    pub mode: Mode,
    pub modes: Vec<ModeButton>,
    /// Main display text (`hh:mm:ss`, `HH:MM:SS.hh` or `MM:SS`)
    pub display: String,
    /// AM/PM badge, clock mode only
    pub period: Option<String>,
    pub running: bool,
    pub paused: bool,
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeButton {
    pub mode: Mode,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub kind: ControlKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub visible: bool,
    pub enabled: bool,
    /// Current value of an input control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    /// Minimum hint of an input control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Button,
    Number,
}

impl Control {
    fn button(id: &str, label: &str, visible: bool, enabled: bool) -> Self {
        Self {
            id: id.to_string(),
            kind: ControlKind::Button,
            label: label.to_string(),
            icon: None,
            visible,
            enabled,
            value: None,
            min: None,
        }
    }

    fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    fn number(id: &str, label: &str, visible: bool, value: i64, min: i64) -> Self {
        Self {
            id: id.to_string(),
            kind: ControlKind::Number,
            label: label.to_string(),
            icon: None,
            visible,
            enabled: visible,
            value: Some(value),
            min: Some(min),
        }
    }
}

impl WidgetView {
    /// Look up a control by id
    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }
}

/// Render the current widget state
pub fn render(state: &WidgetState) -> WidgetView {
    let mode = state.mode();
    let modes = Mode::ALL
        .iter()
        .map(|&m| ModeButton {
            mode: m,
            label: m.label().to_string(),
            active: m == mode,
        })
        .collect();

    let (display, period, controls) = match mode {
        Mode::Clock => {
            let face = state.clock().face();
            (face.display(), Some(face.period.as_str().to_string()), Vec::new())
        }
        Mode::Stopwatch => {
            let sw = state.stopwatch();
            let running = sw.is_running();
            let paused = sw.is_paused();
            let controls = vec![
                Control::button("start_stop", if running { "Stop" } else { "Start" }, true, true)
                    .with_icon(if running { "stop-circle" } else { "play" }),
                Control::button("pause", if paused { "Resume" } else { "Pause" }, true, running)
                    .with_icon(if paused { "play" } else { "pause" }),
            ];
            (sw.display(), None, controls)
        }
        Mode::Countdown => {
            let cd = state.countdown();
            let running = cd.is_running();
            let controls = vec![
                Control::number("minutes", "minutes", !running, cd.input_minutes(), 1),
                Control::button("start", "Start Countdown", !running, !running),
                Control::button("stop", "Stop Countdown", running, running),
                Control::button("pause", if cd.is_paused() { "Unpause" } else { "Pause" }, running, running),
            ];
            (cd.display(), None, controls)
        }
    };

    WidgetView {
        mode,
        modes,
        display,
        period,
        running: state.is_running(),
        paused: state.is_paused(),
        controls,
    }
}
