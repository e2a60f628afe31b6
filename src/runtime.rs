use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// Redraw period of the wall clock
pub const CLOCK_PERIOD: Duration = Duration::from_millis(200);
/// Redraw period of the stopwatch; also the runner's base tick
pub const STOPWATCH_PERIOD: Duration = Duration::from_millis(30);
/// One countdown tick removes one second
pub const COUNTDOWN_PERIOD: Duration = Duration::from_millis(1000);

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum ClockEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    /// The input source is gone; no further keys will arrive, quit included
    Closed,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait ClockEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<ClockEvent, RecvTimeoutError>;
}

/// Production event source using crossterm. Input is read on a background
/// thread and handed over a channel so all session mutation stays on the
/// thread that owns the sessions.
pub struct CrosstermEventSource {
    rx: Receiver<ClockEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                // Windows reports both press and release
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(ClockEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(ClockEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("terminal input closed: {e}");
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<ClockEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<ClockEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<ClockEvent>) -> Self {
        Self { rx }
    }
}

impl ClockEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<ClockEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: ClockEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: ClockEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to tick interval and returns the next event, Tick on
    /// timeout, or Closed once the input source has hung up.
    pub fn step(&self) -> ClockEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => ClockEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => ClockEvent::Closed,
        }
    }
}

/// A periodic deadline polled from the event loop.
///
/// The runner's base tick is shorter than most session periods, so each
/// session keeps its own schedule and asks it whether a period has passed.
#[derive(Clone, Copy, Debug)]
pub struct Schedule {
    period: Duration,
    next_due: Instant,
}

impl Schedule {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of whole periods that elapsed since the last due call.
    /// Returns 0 before the next deadline.
    pub fn due(&mut self, now: Instant) -> u32 {
        if now < self.next_due || self.period.is_zero() {
            return 0;
        }

        let overdue = now.duration_since(self.next_due);
        let extra = (overdue.as_nanos() / self.period.as_nanos()) as u32;
        let fired = extra.saturating_add(1);
        self.next_due += self.period * fired;
        fired
    }

    /// Restart the period from `now`, dropping any pending deadline.
    pub fn restart(&mut self, now: Instant) {
        self.next_due = now + self.period;
    }
}
