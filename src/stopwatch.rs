use std::time::{Duration, Instant};

use chrono::TimeDelta;

use crate::error::{ClockError, Result};
use crate::formatter::format_elapsed;

/// Elapsed-time tracker driven by a monotonic clock.
///
/// All operations take the current [`Instant`] explicitly so the session never
/// reads a clock on its own; the shell passes `Instant::now()` and tests pass
/// synthetic instants.
#[derive(Debug, Clone, Default)]
pub struct StopwatchSession {
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl StopwatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Begin (or continue) measuring from `now`. Ignored while running.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
            log::debug!("stopwatch started at {:?} accumulated", self.accumulated);
        }
    }

    /// Fold the running segment into the accumulated total. Ignored while paused.
    pub fn pause(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(started_at);
            log::debug!("stopwatch paused at {:?}", self.accumulated);
        }
    }

    /// Returns the new running state.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
        self.is_running()
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + now.saturating_duration_since(started_at),
            None => self.accumulated,
        }
    }

    /// `MM:SS.CC` reading at `now`.
    pub fn tick(&self, now: Instant) -> Result<String> {
        let elapsed = TimeDelta::from_std(self.elapsed(now))
            .map_err(|e| ClockError::InvalidInput(e.to_string()))?;
        format_elapsed(elapsed)
    }
}
