//! Background tasks module
//! 
//! This module contains the timer engine that runs alongside the HTTP server.

pub mod ticker;

// Re-export main functions
pub use ticker::{ticker_task, TimerHandle};
