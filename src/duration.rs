//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Mul, Neg};


pub(crate) const MICROS_IN_SECOND: i64 = 1_000_000;
pub(crate) const SECONDS_IN_MINUTE: i64 = 60;
pub(crate) const SECONDS_IN_HOUR: i64 = 60 * SECONDS_IN_MINUTE;
pub(crate) const SECONDS_IN_DAY: i64 = 24 * SECONDS_IN_HOUR;


/// A **duration** is a signed length of time on the timeline, irrespective
/// of time zone or calendar format, with microsecond precision.
///
/// The microsecond portion is always kept between 0 and 999,999, so a
/// negative duration of half a second is stored as −1 seconds plus
/// 500,000 microseconds.
///
/// Arithmetic saturates at the ends of the `i64` range of seconds rather
/// than overflowing.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    microseconds: i32,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, microseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, microseconds: 0 }
    }

    pub fn of_days(days: i64) -> Self {
        Self::of(days.saturating_mul(SECONDS_IN_DAY))
    }

    pub fn of_hours(hours: i64) -> Self {
        Self::of(hours.saturating_mul(SECONDS_IN_HOUR))
    }

    pub fn of_minutes(minutes: i64) -> Self {
        Self::of(minutes.saturating_mul(SECONDS_IN_MINUTE))
    }

    pub fn of_millis(milliseconds: i64) -> Self {
        Self::of_micros(milliseconds.saturating_mul(1000))
    }

    /// Create a new duration that’s the given number of microseconds long,
    /// splitting it into whole seconds and leftover microseconds.
    pub fn of_micros(microseconds: i64) -> Self {
        let seconds = microseconds.div_euclid(MICROS_IN_SECOND);
        let micros  = microseconds.rem_euclid(MICROS_IN_SECOND);
        Self { seconds, microseconds: micros as i32 }
    }

    /// Return the seconds and microseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.microseconds)
    }

    // Like `lengths` above, the `whole_*` functions below return the
    // *total* length in the given unit, never just one portion of it.

    /// The total length in microseconds, saturating for durations longer
    /// than about 292,000 years.
    pub fn in_microseconds(&self) -> i64 {
        self.seconds.saturating_mul(MICROS_IN_SECOND).saturating_add(self.microseconds as i64)
    }

    /// The total length in milliseconds, truncated toward zero.
    pub fn in_milliseconds(&self) -> i64 {
        self.in_microseconds() / 1000
    }

    /// The number of whole seconds, truncated toward zero.
    pub fn whole_seconds(&self) -> i64 {
        if self.seconds < 0 && self.microseconds > 0 {
            self.seconds + 1
        }
        else {
            self.seconds
        }
    }

    pub fn whole_minutes(&self) -> i64 {
        self.whole_seconds() / SECONDS_IN_MINUTE
    }

    pub fn whole_hours(&self) -> i64 {
        self.whole_seconds() / SECONDS_IN_HOUR
    }

    pub fn whole_days(&self) -> i64 {
        self.whole_seconds() / SECONDS_IN_DAY
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let us = self.microseconds + rhs.microseconds;
        let seconds = self.seconds.saturating_add(rhs.seconds);
        if us as i64 >= MICROS_IN_SECOND {
            Self { seconds: seconds.saturating_add(1), microseconds: us - MICROS_IN_SECOND as i32 }
        }
        else {
            Self { seconds, microseconds: us }
        }
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        if self.microseconds == 0 {
            Self { seconds: self.seconds.saturating_neg(), microseconds: 0 }
        }
        else {
            Self { seconds: self.seconds.saturating_neg().saturating_sub(1), microseconds: MICROS_IN_SECOND as i32 - self.microseconds }
        }
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self::of(self.seconds.saturating_mul(amount))
            + Self::of_micros((self.microseconds as i64).saturating_mul(amount))
    }
}
