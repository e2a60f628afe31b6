use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tock::app::{App, AppAction, Moment, Tab};
use tock::config::Config;
use tock::runtime::{ClockEvent, FixedTicker, Runner, TestEventSource, STOPWATCH_PERIOD};

fn key(c: char) -> ClockEvent {
    ClockEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn start() -> Moment {
    Moment {
        instant: Instant::now(),
        wall: Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 58).unwrap(),
    }
}

/// Drive `app` with the events queued on `tx`, advancing a synthetic clock by
/// one stopwatch period per step. Returns the last moment seen.
fn drive(app: &mut App, runner: &Runner<TestEventSource, FixedTicker>, from: Moment, steps: u32) -> Moment {
    let mut at = from;
    for _ in 0..steps {
        let event = runner.step();
        at = at.advance(STOPWATCH_PERIOD);
        app.on_tick(at);
        match event {
            ClockEvent::Closed => break,
            ClockEvent::Key(k) if app.on_key(k, at) == AppAction::Quit => break,
            _ => {}
        }
    }
    at
}

fn runner() -> (mpsc::Sender<ClockEvent>, Runner<TestEventSource, FixedTicker>) {
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );
    (tx, runner)
}

// Headless integration using the internal runtime + App without a TTY
#[test]
fn headless_clock_rolls_over_midnight() {
    let config = Config {
        use_utc: true,
        ..Config::default()
    };
    let at = start();
    let mut app = App::new(&config, Tab::Clock, at);
    assert_eq!(app.clock_text.time, "23:59:58");

    let (_tx, runner) = runner();
    // ~3s of 30ms steps
    drive(&mut app, &runner, at, 100);

    assert_eq!(app.clock_text.time, "00:00:01");
    assert!(app.clock_text.date.starts_with("Monday, March 02, 2026"));
}

#[test]
fn headless_stopwatch_flow() {
    let at = start();
    let mut app = App::new(&Config::default(), Tab::Stopwatch, at);
    let (tx, runner) = runner();

    tx.send(key(' ')).unwrap();
    let at = drive(&mut app, &runner, at, 1);
    assert!(app.stopwatch.is_running());

    let at = drive(&mut app, &runner, at, 50);
    assert_eq!(app.stopwatch_text, "00:01.50");

    tx.send(key(' ')).unwrap();
    let at = drive(&mut app, &runner, at, 1);
    assert!(!app.stopwatch.is_running());
    let frozen = app.stopwatch_text.clone();

    drive(&mut app, &runner, at, 40);
    assert_eq!(app.stopwatch_text, frozen);
}

#[test]
fn headless_timer_expires_once() {
    let config = Config {
        timer_minutes: 1,
        ..Config::default()
    };
    let at = start();
    let mut app = App::new(&config, Tab::Timer, at);
    let (tx, runner) = runner();

    tx.send(key(' ')).unwrap();
    // 62s worth of steps
    drive(&mut app, &runner, at, 2067);

    assert_eq!(app.countdown.remaining_secs(), 0);
    assert!(!app.countdown.is_running());
    assert_eq!(app.timer_info, "Time is up!");
}

#[test]
fn headless_quit_stops_processing() {
    let at = start();
    let mut app = App::new(&Config::default(), Tab::Stopwatch, at);
    let (tx, runner) = runner();

    tx.send(ClockEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
        .unwrap();
    tx.send(key(' ')).unwrap();
    drive(&mut app, &runner, at, 5);

    assert!(!app.stopwatch.is_running());
}

#[test]
fn headless_loop_ends_when_input_closes() {
    let at = start();
    let mut app = App::new(&Config::default(), Tab::Stopwatch, at);
    let (tx, runner) = runner();

    tx.send(key(' ')).unwrap();
    drop(tx);
    let end = drive(&mut app, &runner, at, 1000);

    // the queued key is handled, then the closed source stops the loop
    assert!(app.stopwatch.is_running());
    assert_eq!(end.instant, at.instant + STOPWATCH_PERIOD * 2);
}
