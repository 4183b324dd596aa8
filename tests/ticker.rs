use std::{sync::Arc, time::Duration};

use timepiece::{
    state::{AppState, Mode, Schedule, StopwatchEvent},
    tasks::ticker_task,
};
use tokio::time::sleep;

fn app(mode: Mode, minutes: i64) -> Arc<AppState> {
    Arc::new(AppState::new(0, "127.0.0.1".to_string(), mode, minutes))
}

async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn clock_is_sampled_while_active_only() {
    let state = app(Mode::Clock, 10);
    let ticker = tokio::spawn(ticker_task(Arc::clone(&state)));

    sleep(Duration::from_millis(10)).await;
    assert!(state.get_widget_state().unwrap().clock().sampled().is_some());

    state.switch_mode(Mode::Stopwatch).unwrap();
    settle().await;
    sleep(Duration::from_secs(3)).await;
    assert!(state.get_widget_state().unwrap().clock().sampled().is_none());
    assert_eq!(state.get_view().unwrap().period, None);

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn stopwatch_runs_for_one_second() {
    let state = app(Mode::Stopwatch, 10);
    let ticker = tokio::spawn(ticker_task(Arc::clone(&state)));
    settle().await;

    state.toggle_stopwatch().unwrap();
    sleep(Duration::from_millis(500)).await;
    let halfway = state.get_widget_state().unwrap().stopwatch().elapsed();
    assert!((0.48..=0.50).contains(&halfway), "halfway reading was {}", halfway);

    sleep(Duration::from_millis(500)).await;
    let (event, view) = state.toggle_stopwatch().unwrap();
    match event {
        StopwatchEvent::Stopped { elapsed } => assert!((elapsed - 1.0).abs() < 0.011, "elapsed {}", elapsed),
        other => panic!("expected a stop, got {:?}", other),
    }
    assert_eq!(view.display, "00:00:00.00");
    assert!(!view.control("pause").unwrap().enabled);
    assert_eq!(state.get_schedule(), None);

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn paused_stopwatch_does_not_advance() {
    let state = app(Mode::Stopwatch, 10);
    let ticker = tokio::spawn(ticker_task(Arc::clone(&state)));
    settle().await;

    state.toggle_stopwatch().unwrap();
    sleep(Duration::from_millis(300)).await;
    state.toggle_stopwatch_pause().unwrap();
    let at_pause = state.get_widget_state().unwrap().stopwatch().elapsed();

    sleep(Duration::from_secs(2)).await;
    assert_eq!(state.get_widget_state().unwrap().stopwatch().elapsed(), at_pause);

    state.toggle_stopwatch_pause().unwrap();
    sleep(Duration::from_millis(200)).await;
    let (event, _) = state.toggle_stopwatch().unwrap();
    match event {
        StopwatchEvent::Stopped { elapsed } => assert!((elapsed - 0.5).abs() < 0.011, "elapsed {}", elapsed),
        other => panic!("expected a stop, got {:?}", other),
    }

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn countdown_stops_itself_at_zero() {
    let state = app(Mode::Countdown, 1);
    let ticker = tokio::spawn(ticker_task(Arc::clone(&state)));
    settle().await;

    let (_, view) = state.start_countdown().unwrap();
    assert_eq!(view.display, "01:00");
    assert_eq!(state.get_schedule(), Some(Schedule::Countdown));

    sleep(Duration::from_millis(30_500)).await;
    assert_eq!(state.get_view().unwrap().display, "00:30");

    sleep(Duration::from_secs(30)).await;
    let view = state.get_view().unwrap();
    assert_eq!(view.display, "00:00");
    assert!(!view.running);
    assert_eq!(state.get_schedule(), None);
    assert!(view.control("start").unwrap().visible);

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn stopping_the_ticker_releases_the_timer() {
    let state = app(Mode::Countdown, 1);
    let ticker = tokio::spawn(ticker_task(Arc::clone(&state)));
    settle().await;

    state.start_countdown().unwrap();
    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(state.get_widget_state().unwrap().countdown().remaining(), 58);

    ticker.abort();
    let _ = ticker.await;
    sleep(Duration::from_secs(5)).await;
    assert_eq!(state.get_widget_state().unwrap().countdown().remaining(), 58);
}
