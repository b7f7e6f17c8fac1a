//! Errors raised when a value would break a range invariant.

use thiserror::Error as ThisError;


/// The error returned by every fallible constructor in this crate.
///
/// These are always raised at construction time: if a `Year`, `Month`,
/// `Day`, time of day, or point in time exists, it is in range.
#[derive(PartialEq, Eq, Debug, Copy, Clone, ThisError)]
pub enum Error {

    /// Years run from 1 to 9999.
    #[error("year {0} is out of range (must be 1 to 9999)")]
    YearOutOfRange(i64),

    #[error("month {0} is out of range (must be 1 to 12)")]
    MonthOutOfRange(i64),

    #[error("weekday {0} is out of range (must be 1 to 7)")]
    WeekdayOutOfRange(i64),

    #[error("day {0} is out of range (must be 1 to 31)")]
    DayOutOfRange(i64),

    /// An hour, minute, second, or sub-second field outside its natural
    /// range.
    #[error("{field} {value} is out of range")]
    TimeOutOfRange { field: TimeField, value: i64 },

    /// Every field was in range on its own, but the combination does not
    /// exist on the calendar, such as the 31st of April.
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i64, month: i8, day: i8 },
}

/// Which time-of-day field was out of range.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            TimeField::Hour         => "hour",
            TimeField::Minute       => "minute",
            TimeField::Second       => "second",
            TimeField::Millisecond  => "millisecond",
            TimeField::Microsecond  => "microsecond",
        })
    }
}
