use std::time::{Duration, Instant};

use assert_matches::assert_matches;
use chrono::{FixedOffset, TimeDelta, TimeZone, Utc};

use tock::clock::{ClockOption, ClockSession};
use tock::countdown::{CountdownSession, TickResult};
use tock::formatter::{format_clock, format_countdown, format_elapsed};
use tock::stopwatch::StopwatchSession;
use tock::ClockError;

#[test]
fn clock_format_shapes_across_a_day() {
    let tz = FixedOffset::east_opt(9 * 3600).unwrap();
    let mut now = tz.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
    let end = now + TimeDelta::days(1);

    while now < end {
        let h24 = format_clock(&now, true, true);
        assert_eq!(h24.len(), 8, "{h24}");
        assert_eq!(format_clock(&now, true, false).len(), 5);

        let h12 = format_clock(&now, false, true);
        assert!(h12.ends_with(" AM") || h12.ends_with(" PM"), "{h12}");
        assert_ne!(&h12[..2], "00");
        assert_eq!(format_clock(&now, false, false).len(), 8);

        now += TimeDelta::minutes(17) + TimeDelta::seconds(13);
    }
}

#[test]
fn elapsed_and_countdown_reference_values() {
    assert_eq!(format_elapsed(TimeDelta::zero()).unwrap(), "00:00.00");
    assert_eq!(format_elapsed(TimeDelta::milliseconds(65_500)).unwrap(), "01:05.50");
    assert_eq!(format_elapsed(TimeDelta::milliseconds(3_661_004)).unwrap(), "61:01.00");

    assert_eq!(format_countdown(0).unwrap(), "00:00");
    assert_eq!(format_countdown(300).unwrap(), "05:00");
    assert_eq!(format_countdown(61).unwrap(), "01:01");
}

#[test]
fn negative_inputs_are_contract_violations() {
    assert_matches!(
        format_elapsed(TimeDelta::seconds(-1)),
        Err(ClockError::InvalidInput(_))
    );
    assert_matches!(format_countdown(-1), Err(ClockError::InvalidInput(_)));
}

#[test]
fn stopwatch_freezes_after_pause() {
    let t0 = Instant::now();
    let mut sw = StopwatchSession::new();
    sw.start(t0);
    sw.pause(t0 + Duration::from_millis(2500));

    for later in [2500, 4000, 60_000] {
        assert_eq!(sw.elapsed(t0 + Duration::from_millis(later)), Duration::from_millis(2500));
    }

    sw.pause(t0 + Duration::from_secs(100));
    assert_eq!(sw.elapsed(t0), Duration::from_millis(2500));

    sw.reset();
    assert_eq!(sw.elapsed(t0 + Duration::from_secs(100)), Duration::ZERO);
    assert!(!sw.is_running());
}

#[test]
fn countdown_three_hundred_ticks() {
    let mut cd = CountdownSession::new();
    cd.configure(5).unwrap();
    cd.toggle();

    let results: Vec<TickResult> = (0..300).map(|_| cd.tick()).collect();
    let expired: Vec<usize> = results
        .iter()
        .enumerate()
        .filter(|(_, r)| **r == TickResult::Expired)
        .map(|(i, _)| i)
        .collect();

    assert_eq!(expired, vec![299]);
    assert_eq!(results[298], TickResult::Ticked { remaining: 1 });
    assert_eq!(cd.remaining_secs(), 0);
    assert!(!cd.is_running());
}

#[test]
fn countdown_validation_leaves_state() {
    let mut cd = CountdownSession::new();
    for bad in ["0", "-3", "2.5"] {
        assert_matches!(cd.configure_from_input(bad), Err(ClockError::Validation(_)));
    }
    assert_matches!(cd.configure(0), Err(ClockError::Validation(_)));
    assert_matches!(cd.configure(-3), Err(ClockError::Validation(_)));
    assert_eq!(cd.remaining_secs(), 300);
}

#[test]
fn countdown_configure_reset_round_trip() {
    let mut cd = CountdownSession::new();
    for n in 1..=120 {
        cd.configure(n).unwrap();
        cd.reset();
        assert_eq!(i64::from(cd.remaining_secs()), n * 60);
    }
}

#[test]
fn clock_toggle_round_trip_and_paused_ticks() {
    let mut clock = ClockSession::default();
    clock.set_option(ClockOption::UseUtc, true);
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();

    clock.toggle_running();
    for hours in 0..48 {
        assert!(clock.tick(now + TimeDelta::hours(hours)).is_none());
    }
    clock.toggle_running();
    assert!(clock.is_running());
    assert_eq!(clock.tick(now).unwrap().time, "00:00:00");
}
