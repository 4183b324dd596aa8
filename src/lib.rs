//! Timepiece - a clock, stopwatch and countdown widget
//! 
//! The widget state lives in [`state`], its periodic callbacks are driven by
//! the [`tasks::ticker`] task, and [`api`] serves its visual surface.

pub mod config;
pub mod state;
pub mod view;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Mode, WidgetState};
pub use view::WidgetView;
pub use api::create_router;
pub use tasks::ticker_task;
pub use utils::signals::shutdown_signal;
