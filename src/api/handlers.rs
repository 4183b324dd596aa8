//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, warn};

use crate::{
    state::{AppState, CountdownEvent, Mode, StopwatchEvent},
    view::WidgetView,
};
use super::responses::{ApiResponse, CountdownInput, HealthResponse, StatusResponse};

fn stopwatch_response(result: Result<(StopwatchEvent, WidgetView), String>, action: &str) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok((event, view)) => {
            let response = match event {
                StopwatchEvent::Started => ApiResponse::applied("Stopwatch started".to_string(), view),
                StopwatchEvent::Stopped { elapsed } => {
                    ApiResponse::applied(format!("Stopwatch stopped at {:.2}s", elapsed), view)
                }
                StopwatchEvent::Paused => ApiResponse::applied("Stopwatch paused".to_string(), view),
                StopwatchEvent::Resumed => ApiResponse::applied("Stopwatch resumed".to_string(), view),
                StopwatchEvent::Ignored => {
                    ApiResponse::ignored(format!("Stopwatch {} is not available", action), view)
                }
            };
            Ok(Json(response))
        }
        Err(e) => {
            error!("Failed to apply stopwatch {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn countdown_response(result: Result<(CountdownEvent, WidgetView), String>, action: &str) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok((event, view)) => {
            let message = match event {
                CountdownEvent::InputChanged(minutes) => format!("Countdown set to {} minutes", minutes),
                CountdownEvent::Started { remaining } => format!("Countdown started with {}s", remaining),
                CountdownEvent::Stopped => "Countdown stopped".to_string(),
                CountdownEvent::Paused => "Countdown paused".to_string(),
                CountdownEvent::Resumed => "Countdown resumed".to_string(),
                CountdownEvent::Ticked { .. } | CountdownEvent::Finished => "Countdown updated".to_string(),
                CountdownEvent::Ignored => {
                    return Ok(Json(ApiResponse::ignored(
                        format!("Countdown {} is not available", action),
                        view,
                    )));
                }
            };
            Ok(Json(ApiResponse::applied(message, view)))
        }
        Err(e) => {
            error!("Failed to apply countdown {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /view - Current visual surface
pub async fn view_handler(State(state): State<Arc<AppState>>) -> Result<Json<WidgetView>, StatusCode> {
    state.get_view().map(Json).map_err(|e| {
        error!("Failed to render view: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Handle POST /mode/:mode - Mode selector press
pub async fn mode_handler(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let mode: Mode = mode.parse().map_err(|e| {
        warn!("{}", e);
        StatusCode::BAD_REQUEST
    })?;

    match state.switch_mode(mode) {
        Ok(view) => Ok(Json(ApiResponse::applied(format!("{} mode", mode.label()), view))),
        Err(e) => {
            error!("Failed to switch to {} mode: {}", mode, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /stopwatch/toggle - Start/Stop
pub async fn stopwatch_toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    stopwatch_response(state.toggle_stopwatch(), "toggle")
}

/// Handle POST /stopwatch/pause - Pause/Resume
pub async fn stopwatch_pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    stopwatch_response(state.toggle_stopwatch_pause(), "pause")
}

/// Handle PUT /countdown/input - Minutes input change
pub async fn countdown_input_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CountdownInput>,
) -> Result<Json<ApiResponse>, StatusCode> {
    countdown_response(state.set_countdown_input(input.minutes), "input")
}

/// Handle POST /countdown/start - Start Countdown
pub async fn countdown_start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    countdown_response(state.start_countdown(), "start")
}

/// Handle POST /countdown/stop - Stop Countdown
pub async fn countdown_stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    countdown_response(state.stop_countdown(), "stop")
}

/// Handle POST /countdown/pause - Pause/Unpause
pub async fn countdown_pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    countdown_response(state.toggle_countdown_pause(), "pause")
}

/// Handle GET /status - Widget view plus timer and server details
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let view = match state.get_view() {
        Ok(view) => view,
        Err(e) => {
            error!("Failed to get widget view: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let schedule = state.get_schedule();
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        view,
        schedule,
        tick_interval_ms: schedule.map(|s| s.period().as_millis() as u64),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
