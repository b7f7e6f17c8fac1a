#![cfg(feature="format")]

use calpoint::clock::{with_clock, FixedClock};
use calpoint::{patterns, Instant, PointInTime, Preset};


fn pinned<R>(f: impl FnOnce() -> R) -> R {
    with_clock(FixedClock::new(Instant::at(1_744_113_125), 2 * 60 * 60), f)
}

fn afternoon() -> PointInTime {
    PointInTime::local(2025, 4, 8, 13, 52, 5).unwrap()
}


#[test]
fn date_time() {
    pinned(|| assert_eq!(afternoon().format("yyyy-MM-dd HH:mm:ss"), "2025-04-08 13:52:05"))
}

#[test]
fn presets() {
    pinned(|| {
        let when = afternoon();
        assert_eq!(when.format(patterns::ISO_DATE), "2025-04-08");
        assert_eq!(when.format(patterns::DATE_TIME), "2025-04-08 13:52:05");
        assert_eq!(when.format(patterns::TIME_24), "13:52:05");
        assert_eq!(when.format(patterns::TIME_12), "01:52 PM");
        assert_eq!(when.format(patterns::RFC_1123), "Tue, 08 Apr 2025 13:52:05");
        assert_eq!(when.format(patterns::LONG_DATE), "Tuesday, April 8, 2025");
    })
}

#[test]
fn utc_presets_convert() {
    pinned(|| {
        let when = afternoon();
        assert_eq!(when.format_preset(Preset::Iso8601Utc), "2025-04-08T11:52:05Z");
        assert_eq!(when.format_utc(patterns::ISO_8601_UTC_MICROS), "2025-04-08T11:52:05.000000Z");
        assert_eq!(when.format_in(patterns::HOUR_MINUTE, true), "11:52");
        assert_eq!(when.format_in(patterns::HOUR_MINUTE, false), "13:52");
    })
}

#[test]
fn utc_points_stay_utc() {
    let when = PointInTime::utc(1999, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(when.format(patterns::ISO_DATE_TIME), "1999-12-31T23:59:59");
    assert_eq!(when.format("yy MMM d, h a"), "99 Dec 31, 11 PM");
}

#[test]
fn display() {
    pinned(|| {
        assert_eq!(afternoon().to_string(), "2025-04-08T13:52:05.000000");
        assert_eq!(afternoon().to_utc().to_string(), "2025-04-08T11:52:05.000000Z");
    })
}

#[test]
fn literals() {
    let when = PointInTime::utc(2025, 4, 8, 9, 5, 0).unwrap();
    assert_eq!(when.format("'Week day' E, 'at' H:mm"), "Week day Tue, at 9:05");
    assert_eq!(when.format("h 'o''clock'"), "9 o'clock");
    assert_eq!(when.format("[yyyy]"), "[2025]");
}
