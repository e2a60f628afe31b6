//! Pure formatting of wall-clock instants and durations into display strings.
//!
//! Nothing in here holds state. Sessions call into these helpers on every tick
//! and the clipboard action calls [`format_clock`] on demand.

use chrono::{DateTime, Offset, TimeDelta, TimeZone, Timelike};

use crate::error::{ClockError, Result};

/// Separates the calendar date from the zone label on the date line.
pub const DATE_SEPARATOR: &str = "  •  ";

/// Render the time of day, either `HH:MM[:SS]` or `hh:mm[:ss] AM|PM`.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>, use_24_hour: bool, show_seconds: bool) -> String {
    let minute = now.minute();
    let second = now.second();

    if use_24_hour {
        let hour = now.hour();
        return if show_seconds {
            format!("{hour:02}:{minute:02}:{second:02}")
        } else {
            format!("{hour:02}:{minute:02}")
        };
    }

    // hour12 already maps midnight and noon to 12
    let (is_pm, hour) = now.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    if show_seconds {
        format!("{hour:02}:{minute:02}:{second:02} {meridiem}")
    } else {
        format!("{hour:02}:{minute:02} {meridiem}")
    }
}

/// Render e.g. `Monday, January 05, 2026  •  UTC+02`.
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>, use_utc: bool) -> String {
    let (date, zone) = if use_utc {
        (now.naive_utc(), "UTC".to_string())
    } else {
        let offset = now.offset().fix().local_minus_utc();
        (now.naive_local(), zone_label(Some(offset)))
    };

    format!("{}{DATE_SEPARATOR}{zone}", date.format("%A, %B %d, %Y"))
}

/// Label for a local UTC offset in seconds. Whole-hour offsets render as
/// `UTC±HH`, anything else keeps its minutes (`UTC+05:30`). An unknown offset
/// falls back to `Local`.
pub fn zone_label(offset_secs: Option<i32>) -> String {
    let Some(secs) = offset_secs else {
        return "Local".to_string();
    };

    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;

    if minutes == 0 {
        format!("UTC{sign}{hours:02}")
    } else {
        format!("UTC{sign}{hours:02}:{minutes:02}")
    }
}

/// Render a stopwatch reading as `MM:SS.CC`. Minutes are not wrapped into
/// hours and hundredths are truncated.
pub fn format_elapsed(elapsed: TimeDelta) -> Result<String> {
    if elapsed < TimeDelta::zero() {
        return Err(ClockError::InvalidInput(format!(
            "elapsed duration must not be negative, got {}ms",
            elapsed.num_milliseconds()
        )));
    }

    let centis = elapsed.num_milliseconds() / 10;
    let minutes = centis / 6000;
    let seconds = (centis / 100) % 60;
    let hundredths = centis % 100;

    Ok(format!("{minutes:02}:{seconds:02}.{hundredths:02}"))
}

/// Render a countdown as `MM:SS`.
pub fn format_countdown(remaining_secs: i64) -> Result<String> {
    if remaining_secs < 0 {
        return Err(ClockError::InvalidInput(format!(
            "remaining seconds must not be negative, got {remaining_secs}"
        )));
    }

    Ok(format!(
        "{:02}:{:02}",
        remaining_secs / 60,
        remaining_secs % 60
    ))
}
