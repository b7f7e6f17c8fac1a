//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::duration::{Duration, MICROS_IN_SECOND};
use crate::system::sys_time;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with microsecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and a 32-bit integer of microseconds that is always between
/// 0 and 999,999. Keeping the microseconds positive means the derived
/// ordering is the ordering of the timeline. Moving an instant past either
/// end of that range pins it to the end.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    microseconds: i32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero microseconds.
    pub fn at(seconds: i64) -> Self {
        Self { seconds, microseconds: 0 }
    }

    /// Creates a new Instant set to the number of microseconds since the
    /// Unix epoch.
    pub fn at_micros(microseconds: i64) -> Self {
        Self::at(0) + Duration::of_micros(microseconds)
    }

    /// Creates a new Instant set to the number of milliseconds since the
    /// Unix epoch.
    pub fn at_millis(milliseconds: i64) -> Self {
        Self::at_micros(milliseconds.saturating_mul(1000))
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, microseconds) = sys_time();
        Self::at(seconds) + Duration::of_micros(microseconds as i64)
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of whole seconds since the epoch, rounding
    /// toward negative infinity.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of microseconds into the current second.
    pub fn microseconds(&self) -> i32 {
        self.microseconds
    }

    pub fn epoch_micros(&self) -> i64 {
        self.seconds.saturating_mul(MICROS_IN_SECOND).saturating_add(self.microseconds as i64)
    }

    /// Milliseconds since the epoch, truncated toward zero.
    pub fn epoch_millis(&self) -> i64 {
        self.epoch_micros() / 1000
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}s/{}us)", self.seconds, self.microseconds)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        let (seconds, microseconds) = duration.lengths();
        let us = self.microseconds + microseconds;
        let seconds = self.seconds.saturating_add(seconds);

        if us as i64 >= MICROS_IN_SECOND {
            Self { seconds: seconds.saturating_add(1), microseconds: us - MICROS_IN_SECOND as i32 }
        }
        else {
            Self { seconds, microseconds: us }
        }
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self + (-duration)
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, other: Self) -> Duration {
        Duration::of(self.seconds.saturating_sub(other.seconds))
            + Duration::of_micros((self.microseconds - other.microseconds) as i64)
    }
}
