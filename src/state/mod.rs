//! State management module
//! 
//! The widget's display state, its per-mode sub-states, and the shared
//! handle the HTTP handlers and the ticker operate on.

pub mod mode;
pub mod clock;
pub mod stopwatch;
pub mod countdown;
pub mod widget_state;
pub mod app_state;

// Re-export main types
pub use mode::Mode;
pub use clock::{ClockFace, ClockState, Period};
pub use stopwatch::{StopwatchEvent, StopwatchState};
pub use countdown::{CountdownEvent, CountdownState};
pub use widget_state::{Schedule, WidgetState};
pub use app_state::AppState;
