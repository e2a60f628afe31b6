use crate::error::{ClockError, Result};
use crate::formatter::format_countdown;

pub const DEFAULT_MINUTES: u32 = 5;
/// Largest duration whose second count still fits in a `u32`
pub const MAX_MINUTES: u32 = u32::MAX / 60;

const INVALID_MINUTES: &str = "Enter a positive whole minute value.";

/// Outcome of a single countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Paused, or already at zero; nothing changed
    Idle,
    Ticked { remaining: u32 },
    /// Reached zero on this tick. Emitted exactly once per run.
    Expired,
}

/// Whole-second countdown timer.
///
/// The session counts ticks rather than reading a clock: each [`tick`] while
/// running removes exactly one second.
///
/// [`tick`]: CountdownSession::tick
#[derive(Debug, Clone)]
pub struct CountdownSession {
    remaining_secs: u32,
    running: bool,
    configured_minutes: u32,
}

impl Default for CountdownSession {
    fn default() -> Self {
        Self {
            remaining_secs: DEFAULT_MINUTES * 60,
            running: false,
            configured_minutes: DEFAULT_MINUTES,
        }
    }
}

impl CountdownSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a validated minute count instead of the default.
    pub fn with_minutes(minutes: i64) -> Result<Self> {
        let mut session = Self::default();
        session.configure(minutes)?;
        Ok(session)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn configured_minutes(&self) -> u32 {
        self.configured_minutes
    }

    /// Set a new duration and pause. Rejects non-positive values without
    /// touching the current state.
    pub fn configure(&mut self, minutes: i64) -> Result<()> {
        let minutes = u32::try_from(minutes)
            .ok()
            .filter(|m| (1..=MAX_MINUTES).contains(m))
            .map(|m| (m, m * 60));

        let Some((minutes, secs)) = minutes else {
            return Err(ClockError::Validation(INVALID_MINUTES.to_string()));
        };

        self.configured_minutes = minutes;
        self.remaining_secs = secs;
        self.running = false;
        log::debug!("countdown configured for {minutes} minutes");
        Ok(())
    }

    /// Parse free-form user input (e.g. the timer tab's entry field) and
    /// configure from it. Only plain positive integers are accepted.
    pub fn configure_from_input(&mut self, input: &str) -> Result<()> {
        let input = input.trim();
        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(ClockError::Validation(INVALID_MINUTES.to_string()));
        }
        let minutes = input
            .parse::<i64>()
            .map_err(|_| ClockError::Validation(INVALID_MINUTES.to_string()))?;
        self.configure(minutes)
    }

    /// Flip running state and return it. Refuses to start at zero remaining;
    /// a `reset` or `configure` is needed first.
    pub fn toggle(&mut self) -> bool {
        if !self.running && self.remaining_secs == 0 {
            log::debug!("countdown at zero, ignoring start");
            return false;
        }
        self.running = !self.running;
        self.running
    }

    pub fn reset(&mut self) {
        self.remaining_secs = self.configured_minutes * 60;
        self.running = false;
    }

    pub fn tick(&mut self) -> TickResult {
        if !self.running || self.remaining_secs == 0 {
            return TickResult::Idle;
        }

        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            log::info!("countdown of {} minutes expired", self.configured_minutes);
            return TickResult::Expired;
        }

        TickResult::Ticked {
            remaining: self.remaining_secs,
        }
    }

    /// `MM:SS` of the remaining time
    pub fn display(&self) -> String {
        // remaining_secs is unsigned so formatting cannot fail
        format_countdown(i64::from(self.remaining_secs)).unwrap_or_default()
    }
}
