//! Calendar calculations, which use years, months, days, hours, minutes,
//! and seconds.

pub(crate) mod datetime;
pub(crate) mod point;
pub mod clock;
pub mod fmt;
#[cfg(feature="parse")] pub(crate) mod parse;

use self::datetime::{Day, Month, Weekday, Year};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    fn year(&self) -> Year;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> Day;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year().value().rem_euclid(100) }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16;

    /// The microsecond of the millisecond.
    fn microsecond(&self) -> i16;
}
