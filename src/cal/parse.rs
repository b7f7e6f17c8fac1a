//! Reading points in time back out of text.
//!
//! Parsing happens in two passes. The first accepts a full ISO 8601
//! timestamp: a calendar, week, or ordinal date, optionally followed by a
//! time of day with a fractional second and a UTC offset or `Z`. The
//! second accepts a bare `HH:mm`, `HH:mm:ss`, or `HH:mm:ss.ffffff` and puts
//! it on today’s date. Anything else is not a point in time, which is an
//! ordinary outcome rather than an error.

use std::str::FromStr;

use thiserror::Error as ThisError;
use tracing::trace;

use crate::cal::datetime::{Month, Weekday, TimeOfDay, YMD};
use crate::cal::point::{PointInTime, Zone};
use crate::duration::{Duration, SECONDS_IN_HOUR, SECONDS_IN_MINUTE};


impl PointInTime {

    /// Reads a point in time from text, returning `None` if the text is
    /// neither a timestamp nor a time of day.
    ///
    /// A timestamp with a UTC offset or `Z` is converted to local time. One
    /// without is read as local time already. A time of day on its own is
    /// placed on today’s date in local time.
    ///
    /// ```
    /// use calpoint::PointInTime;
    ///
    /// let when = PointInTime::parse("2025-04-08T11:52:05Z").unwrap();
    /// assert_eq!(when, PointInTime::utc(2025, 4, 8, 11, 52, 5).unwrap());
    /// assert!(!when.is_utc());
    ///
    /// assert!(PointInTime::parse("half past one").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Some(when) = parse_timestamp(input) {
            trace!(%input, "parsed as a timestamp");
            return Some(when);
        }

        if let Some(time) = parse_time_of_day(input) {
            trace!(%input, "parsed as a time of day");
            return Some(Self::today_at(time));
        }

        trace!(%input, "not a point in time");
        None
    }
}

/// The error returned when parsing a point in time through `FromStr`.
#[derive(PartialEq, Eq, Debug, Copy, Clone, ThisError)]
#[error("input is neither a timestamp nor a time of day")]
pub struct ParseError;

impl FromStr for PointInTime {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input).ok_or(ParseError)
    }
}


fn parse_timestamp(input: &str) -> Option<PointInTime> {
    let (date_text, time_text) = match input.find(|c: char| c == 'T' || c == 't' || c == ' ') {
        Some(pos) => (&input[.. pos], Some(&input[pos + 1 ..])),
        None      => (input, None),
    };

    if !has_shape(date_text, DATE_SHAPES) {
        return None;
    }

    let time_text = match time_text {
        Some(text) => text,
        None => {
            let date = fields_to_date(iso8601::date(date_text).ok()?)?;
            return Some(PointInTime::from_wall(Zone::Local, date, TimeOfDay::midnight()));
        }
    };

    let (time_text, offset) = split_offset(time_text)?;
    let (time_text, microsecond) = split_fraction(time_text)?;

    if !has_shape(time_text, TIME_SHAPES) {
        return None;
    }

    let fields = iso8601::datetime(&format!("{}T{}", date_text, time_text)).ok()?;
    let date = fields_to_date(fields.date)?;
    let time = TimeOfDay::hms_us(fields.time.hour as i8, fields.time.minute as i8, fields.time.second as i8, microsecond).ok()?;

    Some(match offset {
        None => PointInTime::from_wall(Zone::Local, date, time),
        Some(seconds) => {
            let as_utc = PointInTime::from_wall(Zone::Utc, date, time).instant();
            PointInTime::from_instant(as_utc - Duration::of(seconds), Zone::Local)
        }
    })
}

/// Calendar, week, and ordinal dates, extended then basic, with `d`
/// standing for any digit. The date parser stops at the first character
/// it doesn't expect, so the whole text has to be one of these first.
const DATE_SHAPES: &[&str] = &["dddd-dd-dd", "dddddddd", "dddd-Wdd-d", "ddddWddd", "dddd-ddd", "ddddddd"];

/// Times of day once any fraction and offset have been taken off.
const TIME_SHAPES: &[&str] = &["dd:dd:dd", "dd:dd", "dddddd", "dddd"];

fn has_shape(text: &str, shapes: &[&str]) -> bool {
    shapes.iter().any(|shape| {
        shape.len() == text.len()
            && shape.bytes().zip(text.bytes()).all(|(s, t)| if s == b'd' { t.is_ascii_digit() } else { s == t })
    })
}

fn fields_to_date(fields: iso8601::Date) -> Option<YMD> {
    let date = match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month = Month::from_one(month as i8).ok()?;
            YMD::new(year as i64, month, day as i8)
        }
        iso8601::Date::Week { year, ww, d } => {
            let weekday = Weekday::from_one(d as i8).ok()?;
            YMD::from_week_date(year as i64, ww as i64, weekday)
        }
        iso8601::Date::Ordinal { year, ddd } => {
            YMD::from_yearday(year as i64, ddd as i64)
        }
    };

    date.ok().filter(|date| date.year >= 1)
}

/// Takes a trailing `Z`, `±HH`, `±HHMM`, or `±HH:MM` off a time, returning
/// the offset in seconds if there was one. Returns `None` if something
/// follows the sign that isn’t an offset.
fn split_offset(text: &str) -> Option<(&str, Option<i64>)> {
    if let Some(rest) = text.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        return Some((rest, Some(0)));
    }

    let pos = match text.rfind(|c: char| c == '+' || c == '-') {
        Some(pos) => pos,
        None      => return Some((text, None)),
    };

    let sign = if text[pos ..].starts_with('-') { -1 } else { 1 };
    let digits: String = text[pos + 1 ..].chars().filter(|&c| c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i64>().ok()?, 0),
        4 => (digits[.. 2].parse::<i64>().ok()?, digits[2 ..].parse::<i64>().ok()?),
        _ => return None,
    };

    if hours > 23 || minutes > 59 {
        return None;
    }

    Some((&text[.. pos], Some(sign * (hours * SECONDS_IN_HOUR + minutes * SECONDS_IN_MINUTE))))
}

/// Takes a fractional second off the end of a time, returning it as a
/// number of microseconds. The digits are padded or cut to six.
fn split_fraction(text: &str) -> Option<(&str, i32)> {
    let pos = match text.find(|c: char| c == '.' || c == ',') {
        Some(pos) => pos,
        None      => return Some((text, 0)),
    };

    let digits = &text[pos + 1 ..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let six: String = digits.chars().chain(std::iter::repeat('0')).take(6).collect();
    Some((&text[.. pos], six.parse().ok()?))
}

/// Reads `HH:mm`, `HH:mm:ss`, or `HH:mm:ss.f…` with two-digit fields.
fn parse_time_of_day(input: &str) -> Option<TimeOfDay> {
    let (clock, microsecond) = split_fraction(input)?;
    let mut parts = clock.split(':');

    let hour   = two_digits(parts.next()?)?;
    let minute = two_digits(parts.next()?)?;
    let second = match parts.next() {
        Some(text) => two_digits(text)?,
        None if clock.len() < input.len() => return None,
        None => 0,
    };

    if parts.next().is_some() {
        return None;
    }

    TimeOfDay::hms_us(hour, minute, second, microsecond).ok()
}

fn two_digits(text: &str) -> Option<i8> {
    if text.len() == 2 && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().ok()
    }
    else {
        None
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::clock::{with_clock, FixedClock};
    use crate::instant::Instant;

    fn pinned<R>(f: impl FnOnce() -> R) -> R {
        with_clock(FixedClock::new(Instant::at(1_744_113_125), 2 * 60 * 60), f)
    }

    mod timestamps {
        use super::*;

        #[test]
        fn utc_marker() {
            pinned(|| {
                let when = PointInTime::parse("2025-04-08T11:52:05Z").unwrap();
                assert_eq!(when.instant(), Instant::at(1_744_113_125));
                assert_eq!(when.zone(), Zone::Local);
                assert_eq!(when.hour(), 13);
            })
        }

        #[test]
        fn numeric_offset() {
            pinned(|| {
                let when = PointInTime::parse("2025-04-08T16:22:05+04:30").unwrap();
                assert_eq!(when.instant(), Instant::at(1_744_113_125));

                let when = PointInTime::parse("2025-04-08T06:52:05-0500").unwrap();
                assert_eq!(when.instant(), Instant::at(1_744_113_125));
            })
        }

        #[test]
        fn no_offset_is_local() {
            pinned(|| {
                let when = PointInTime::parse("2025-04-08T13:52:05").unwrap();
                assert_eq!(when.instant(), Instant::at(1_744_113_125));
            })
        }

        #[test]
        fn space_separator() {
            pinned(|| {
                let when = PointInTime::parse(" 2025-04-08 13:52:05 ").unwrap();
                assert_eq!(when.instant(), Instant::at(1_744_113_125));
            })
        }

        #[test]
        fn microseconds_kept() {
            pinned(|| {
                let when = PointInTime::parse("2025-04-08T11:52:05.123456Z").unwrap();
                assert_eq!(when.millisecond(), 123);
                assert_eq!(when.microsecond(), 456);

                let when = PointInTime::parse("2025-04-08T11:52:05.5Z").unwrap();
                assert_eq!(when.millisecond(), 500);
                assert_eq!(when.microsecond(), 0);

                let when = PointInTime::parse("2025-04-08T11:52:05.123456789Z").unwrap();
                assert_eq!(when.microsecond(), 456);
            })
        }

        #[test]
        fn date_only_is_midnight() {
            pinned(|| {
                let when = PointInTime::parse("2025-04-08").unwrap();
                assert_eq!((when.hour(), when.minute(), when.second()), (0, 0, 0));
                assert_eq!(when.day().value(), 8);
            })
        }

        #[test]
        fn week_date() {
            pinned(|| {
                let when = PointInTime::parse("2025-W15-2").unwrap();
                assert_eq!(when.month(), Month::April);
                assert_eq!(when.day().value(), 8);
            })
        }

        #[test]
        fn ordinal_date() {
            pinned(|| {
                let when = PointInTime::parse("2025-098").unwrap();
                assert_eq!(when.month(), Month::April);
                assert_eq!(when.day().value(), 8);
            })
        }

        #[test]
        fn impossible_dates() {
            assert_eq!(PointInTime::parse("2025-02-29T00:00:00Z"), None);
            assert_eq!(PointInTime::parse("2025-04-31"), None);
            assert_eq!(PointInTime::parse("2025-13-01"), None);
            assert_eq!(PointInTime::parse("0000-01-01"), None);
        }

        #[test]
        fn impossible_times() {
            assert_eq!(PointInTime::parse("2025-04-08T25:00:00Z"), None);
            assert_eq!(PointInTime::parse("2025-04-08T12:60:00Z"), None);
            assert_eq!(PointInTime::parse("2025-04-08T12:00:00+25:00"), None);
        }

        #[test]
        fn trailing_junk() {
            assert_eq!(PointInTime::parse("2025-04-08T12:00:00Zulu"), None);
            assert_eq!(PointInTime::parse("2025-04-08T12:00:00+02:00x"), None);
            assert_eq!(PointInTime::parse("2025-04-08x"), None);
            assert_eq!(PointInTime::parse("2025-04-08T12:00:00."), None);
            assert_eq!(PointInTime::parse("2025-04-0899"), None);
            assert_eq!(PointInTime::parse("2025-04-08T13:52:0599"), None);
            assert_eq!(PointInTime::parse("2025-04-08-17"), None);
            assert_eq!(PointInTime::parse("2025-W15-23"), None);
            assert_eq!(PointInTime::parse("2025-0981"), None);
        }

        #[test]
        fn shapes() {
            assert!(has_shape("2025-04-08", DATE_SHAPES));
            assert!(has_shape("2025W152", DATE_SHAPES));
            assert!(!has_shape("2025-04-0899", DATE_SHAPES));
            assert!(!has_shape("2025-04-08-17", DATE_SHAPES));
            assert!(has_shape("13:52", TIME_SHAPES));
            assert!(!has_shape("13:52:0599", TIME_SHAPES));
            assert!(!has_shape("", TIME_SHAPES));
        }
    }

    mod times_of_day {
        use super::*;

        #[test]
        fn today() {
            pinned(|| {
                let when = PointInTime::parse("09:15:30").unwrap();
                assert!(when.is_today());
                assert_eq!((when.hour(), when.minute(), when.second()), (9, 15, 30));
            })
        }

        #[test]
        fn hours_and_minutes() {
            pinned(|| {
                let when = PointInTime::parse("23:59").unwrap();
                assert_eq!((when.hour(), when.minute(), when.second()), (23, 59, 0));
            })
        }

        #[test]
        fn fraction_is_padded() {
            pinned(|| {
                let when = PointInTime::parse("13:52:05.12").unwrap();
                assert_eq!(when.millisecond(), 120);
                assert_eq!(when.microsecond(), 0);

                let when = PointInTime::parse("13:52:05.000789").unwrap();
                assert_eq!(when.millisecond(), 0);
                assert_eq!(when.microsecond(), 789);
            })
        }

        #[test]
        fn rejected() {
            pinned(|| {
                assert_eq!(PointInTime::parse("24:00"), None);
                assert_eq!(PointInTime::parse("9:15"), None);
                assert_eq!(PointInTime::parse("09:15.5"), None);
                assert_eq!(PointInTime::parse("09:15:30:00"), None);
                assert_eq!(PointInTime::parse("09:1x"), None);
                assert_eq!(PointInTime::parse(""), None);
            })
        }
    }

    #[test]
    fn from_str() {
        pinned(|| {
            assert!("2025-04-08T11:52:05Z".parse::<PointInTime>().is_ok());
            assert_eq!("nonsense".parse::<PointInTime>(), Err(ParseError));
        })
    }
}
