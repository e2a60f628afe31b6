use chrono::{DateTime, Local, TimeZone, Utc};

use crate::formatter::{format_clock, format_date};

/// The user-togglable display flags of the clock tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub use_24_hour: bool,
    pub show_seconds: bool,
    pub use_utc: bool,
    pub always_on_top: bool,
    pub dark_mode: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            use_24_hour: true,
            show_seconds: true,
            use_utc: false,
            always_on_top: false,
            dark_mode: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ClockOption {
    #[strum(serialize = "24-hour")]
    Use24Hour,
    #[strum(serialize = "Seconds")]
    ShowSeconds,
    #[strum(serialize = "UTC")]
    UseUtc,
    #[strum(serialize = "Always on top")]
    AlwaysOnTop,
    #[strum(serialize = "Dark mode")]
    DarkMode,
}

impl ClockOption {
    pub const ALL: [ClockOption; 5] = [
        ClockOption::Use24Hour,
        ClockOption::ShowSeconds,
        ClockOption::UseUtc,
        ClockOption::AlwaysOnTop,
        ClockOption::DarkMode,
    ];
}

impl DisplayOptions {
    pub fn get(&self, option: ClockOption) -> bool {
        match option {
            ClockOption::Use24Hour => self.use_24_hour,
            ClockOption::ShowSeconds => self.show_seconds,
            ClockOption::UseUtc => self.use_utc,
            ClockOption::AlwaysOnTop => self.always_on_top,
            ClockOption::DarkMode => self.dark_mode,
        }
    }

    fn set(&mut self, option: ClockOption, value: bool) {
        let field = match option {
            ClockOption::Use24Hour => &mut self.use_24_hour,
            ClockOption::ShowSeconds => &mut self.show_seconds,
            ClockOption::UseUtc => &mut self.use_utc,
            ClockOption::AlwaysOnTop => &mut self.always_on_top,
            ClockOption::DarkMode => &mut self.dark_mode,
        };
        *field = value;
    }
}

/// Formatted output of one clock tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    pub time: String,
    pub date: String,
}

/// Wall clock display state: paused or running, plus how to render.
#[derive(Debug, Clone)]
pub struct ClockSession {
    running: bool,
    options: DisplayOptions,
}

impl Default for ClockSession {
    fn default() -> Self {
        Self::new(DisplayOptions::default())
    }
}

impl ClockSession {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            running: true,
            options,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    /// Flip between running and paused. Missed ticks are not buffered, so the
    /// caller should render immediately after resuming.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        log::debug!(
            "clock {}",
            if self.running { "resumed" } else { "paused" }
        );
        self.running
    }

    pub fn set_option(&mut self, option: ClockOption, value: bool) -> DisplayOptions {
        self.options.set(option, value);
        log::debug!("clock option {option} set to {value}");
        self.options
    }

    pub fn toggle_option(&mut self, option: ClockOption) -> DisplayOptions {
        let value = !self.options.get(option);
        self.set_option(option, value)
    }

    /// Produce fresh display text, or `None` while paused so the last rendered
    /// text stays on screen.
    pub fn tick(&self, now: DateTime<Utc>) -> Option<DisplayText> {
        self.running.then(|| self.render(now))
    }

    /// Format `now` regardless of the running flag, in UTC or the system's
    /// local zone depending on the options.
    pub fn render(&self, now: DateTime<Utc>) -> DisplayText {
        if self.options.use_utc {
            self.render_in(&now)
        } else {
            self.render_in(&now.with_timezone(&Local))
        }
    }

    /// Format an instant that already carries the zone to display.
    pub fn render_in<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DisplayText {
        DisplayText {
            time: format_clock(now, self.options.use_24_hour, self.options.show_seconds),
            date: format_date(now, self.options.use_utc),
        }
    }
}
