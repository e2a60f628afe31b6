use std::time::{Duration, Instant};

use chrono::{DateTime, TimeDelta, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clock::{ClockOption, ClockSession, DisplayText};
use crate::config::Config;
use crate::countdown::{CountdownSession, TickResult, DEFAULT_MINUTES};
use crate::runtime::{Schedule, CLOCK_PERIOD, COUNTDOWN_PERIOD, STOPWATCH_PERIOD};
use crate::stopwatch::StopwatchSession;

/// How long a transient status like "Copied: ..." stays up
pub const STATUS_TIMEOUT: Duration = Duration::from_millis(1800);

const MAX_MINUTES_INPUT: usize = 6;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum_macros::Display,
)]
pub enum Tab {
    Clock,
    Stopwatch,
    Timer,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Clock, Tab::Stopwatch, Tab::Timer];

    pub fn index(self) -> usize {
        match self {
            Tab::Clock => 0,
            Tab::Stopwatch => 1,
            Tab::Timer => 2,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// The two clocks every handler needs: monotonic for scheduling and elapsed
/// math, wall for the clock face.
#[derive(Debug, Clone, Copy)]
pub struct Moment {
    pub instant: Instant,
    pub wall: DateTime<Utc>,
}

impl Moment {
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
            wall: Utc::now(),
        }
    }

    pub fn advance(self, by: Duration) -> Self {
        Self {
            instant: self.instant + by,
            wall: self.wall + TimeDelta::from_std(by).unwrap_or(TimeDelta::zero()),
        }
    }
}

/// Side effects the app asks the shell to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    None,
    Redraw,
    Copy(String),
    Quit,
}

#[derive(Debug, Clone)]
struct TransientStatus {
    text: String,
    until: Instant,
}

#[derive(Debug)]
pub struct App {
    pub tab: Tab,
    pub clock: ClockSession,
    pub clock_text: DisplayText,
    pub stopwatch: StopwatchSession,
    pub stopwatch_text: String,
    pub countdown: CountdownSession,
    pub minutes_input: String,
    pub timer_info: String,
    status: Option<TransientStatus>,
    /// Monotonic time of the latest tick or key
    now: Instant,
    clock_schedule: Schedule,
    stopwatch_schedule: Schedule,
    countdown_schedule: Schedule,
}

impl App {
    pub fn new(config: &Config, tab: Tab, at: Moment) -> Self {
        let clock = ClockSession::new(config.display_options());
        let (countdown, timer_info) =
            match CountdownSession::with_minutes(i64::from(config.timer_minutes)) {
                Ok(countdown) => (countdown, String::new()),
                Err(e) => {
                    log::warn!(
                        "timer_minutes {} rejected, falling back to {DEFAULT_MINUTES}: {e}",
                        config.timer_minutes
                    );
                    (
                        CountdownSession::default(),
                        format!("{e} Using {DEFAULT_MINUTES} minutes."),
                    )
                }
            };
        let stopwatch = StopwatchSession::new();

        Self {
            tab,
            clock_text: clock.render(at.wall),
            clock,
            stopwatch_text: stopwatch.tick(at.instant).unwrap_or_default(),
            stopwatch,
            minutes_input: countdown.configured_minutes().to_string(),
            countdown,
            timer_info,
            status: None,
            now: at.instant,
            clock_schedule: Schedule::new(CLOCK_PERIOD, at.instant),
            stopwatch_schedule: Schedule::new(STOPWATCH_PERIOD, at.instant),
            countdown_schedule: Schedule::new(COUNTDOWN_PERIOD, at.instant),
        }
    }

    /// A short-lived message such as "Copied: ...", if one is still up at
    /// the app's current time.
    pub fn transient_status(&self) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|status| self.now < status.until)
            .map(|status| status.text.as_str())
    }

    /// Status line under the clock face
    pub fn clock_status(&self) -> String {
        match self.transient_status() {
            Some(text) => text.to_string(),
            None if self.clock.is_running() => "Running".to_string(),
            None => "Paused".to_string(),
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, now: Instant) {
        self.status = Some(TransientStatus {
            text: text.into(),
            until: now + STATUS_TIMEOUT,
        });
    }

    /// Poll every session's schedule. Returns true if anything visible changed.
    pub fn on_tick(&mut self, at: Moment) -> bool {
        self.now = self.now.max(at.instant);
        let mut changed = false;

        if self.clock_schedule.due(at.instant) > 0 {
            if let Some(text) = self.clock.tick(at.wall) {
                changed |= text != self.clock_text;
                self.clock_text = text;
            }
            if let Some(status) = &self.status {
                if at.instant >= status.until {
                    self.status = None;
                    changed = true;
                }
            }
        }

        if self.stopwatch_schedule.due(at.instant) > 0 && self.stopwatch.is_running() {
            self.refresh_stopwatch(at.instant);
            changed = true;
        }

        for _ in 0..self.countdown_schedule.due(at.instant) {
            match self.countdown.tick() {
                TickResult::Idle => break,
                TickResult::Ticked { .. } => changed = true,
                TickResult::Expired => {
                    self.timer_info = "Time is up!".to_string();
                    changed = true;
                    break;
                }
            }
        }

        changed
    }

    pub fn on_key(&mut self, key: KeyEvent, at: Moment) -> AppAction {
        self.now = self.now.max(at.instant);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('q') if ctrl => return AppAction::Quit,
            KeyCode::Char('c') if ctrl => return self.copy_time(at),
            KeyCode::Tab | KeyCode::Right => {
                self.tab = self.tab.next();
                return AppAction::Redraw;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.tab = self.tab.prev();
                return AppAction::Redraw;
            }
            _ => {}
        }

        match self.tab {
            Tab::Clock => self.on_clock_key(key, at),
            Tab::Stopwatch => self.on_stopwatch_key(key, at),
            Tab::Timer => self.on_timer_key(key, at),
        }
    }

    fn on_clock_key(&mut self, key: KeyEvent, at: Moment) -> AppAction {
        let option = match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char(' ') => {
                self.clock.toggle_running();
                // drop any "Copied" message so the new state shows right away
                self.status = None;
                if self.clock.is_running() {
                    self.clock_text = self.clock.render(at.wall);
                    self.clock_schedule.restart(at.instant);
                }
                return AppAction::Redraw;
            }
            KeyCode::Char('c') => return self.copy_time(at),
            KeyCode::Char('h') => ClockOption::Use24Hour,
            KeyCode::Char('s') => ClockOption::ShowSeconds,
            KeyCode::Char('u') => ClockOption::UseUtc,
            KeyCode::Char('d') => ClockOption::DarkMode,
            KeyCode::Char('o') => ClockOption::AlwaysOnTop,
            _ => return AppAction::None,
        };

        self.clock.toggle_option(option);
        if matches!(
            option,
            ClockOption::Use24Hour | ClockOption::ShowSeconds | ClockOption::UseUtc
        ) {
            self.clock_text = self.clock.render(at.wall);
        }
        AppAction::Redraw
    }

    fn on_stopwatch_key(&mut self, key: KeyEvent, at: Moment) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char(' ') => {
                self.stopwatch.toggle(at.instant);
                self.stopwatch_schedule.restart(at.instant);
            }
            KeyCode::Char('r') => self.stopwatch.reset(),
            _ => return AppAction::None,
        }
        self.refresh_stopwatch(at.instant);
        AppAction::Redraw
    }

    fn on_timer_key(&mut self, key: KeyEvent, at: Moment) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char(' ') => {
                let was_running = self.countdown.is_running();
                if self.countdown.toggle() {
                    // a fresh second starts whenever the timer (re)starts
                    self.countdown_schedule.restart(at.instant);
                    self.timer_info.clear();
                } else if !was_running {
                    self.timer_info = "Set or reset the timer first.".to_string();
                }
            }
            KeyCode::Char('r') => {
                self.countdown.reset();
                self.minutes_input = self.countdown.configured_minutes().to_string();
                self.timer_info = "Timer reset.".to_string();
            }
            KeyCode::Enter => self.apply_minutes_input(),
            KeyCode::Backspace => {
                self.minutes_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '.' => {
                if self.minutes_input.len() < MAX_MINUTES_INPUT {
                    self.minutes_input.push(c);
                }
            }
            _ => return AppAction::None,
        }
        AppAction::Redraw
    }

    fn apply_minutes_input(&mut self) {
        self.timer_info = match self.countdown.configure_from_input(&self.minutes_input) {
            Ok(()) => "Timer configured.".to_string(),
            Err(e) => e.to_string(),
        };
    }

    fn copy_time(&self, at: Moment) -> AppAction {
        AppAction::Copy(self.clock.render(at.wall).time)
    }

    /// Record the outcome of a clipboard copy requested via [`AppAction::Copy`].
    pub fn on_copied(&mut self, result: Result<String, String>, now: Instant) {
        match result {
            Ok(text) => self.set_status(format!("Copied: {text}"), now),
            Err(e) => {
                log::warn!("clipboard copy failed: {e}");
                self.set_status("Clipboard unavailable", now);
            }
        }
    }

    fn refresh_stopwatch(&mut self, now: Instant) {
        match self.stopwatch.tick(now) {
            Ok(text) => self.stopwatch_text = text,
            Err(e) => log::error!("stopwatch reading failed: {e}"),
        }
    }
}
