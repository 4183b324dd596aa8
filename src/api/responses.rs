//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{state::Schedule, view::WidgetView};

/// API response structure for control presses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub view: WidgetView,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, view: WidgetView) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            view,
        }
    }

    /// The press changed the widget
    pub fn applied(message: String, view: WidgetView) -> Self {
        Self::new("applied".to_string(), message, view)
    }

    /// The pressed control is hidden or disabled in the current state
    pub fn ignored(message: String, view: WidgetView) -> Self {
        Self::new("ignored".to_string(), message, view)
    }
}

/// Body of `PUT /countdown/input`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownInput {
    pub minutes: i64,
}

/// Status response with timer information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub view: WidgetView,
    pub schedule: Option<Schedule>,
    pub tick_interval_ms: Option<u64>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
