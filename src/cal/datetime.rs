//! Years, months, weekdays, days, and times of day.

use std::cmp::min;
use std::fmt;

use crate::cal::point::PointInTime;
use crate::duration::{SECONDS_IN_HOUR, SECONDS_IN_MINUTE};
use crate::error::{Error, TimeField};
use crate::util::{split_cycles, RangeExt};

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is a wrapper around `i64` that performs year-related tests. Years
/// run from 1 to 9999, so there is no year zero to construct.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct Year(i64);

impl Year {

    /// The first year that can be constructed.
    pub const MIN: i64 = 1;

    /// The last year that can be constructed, which is also the last year
    /// that fits the four digits of an ISO 8601 timestamp.
    pub const MAX: i64 = 9999;

    /// Creates a year, failing if it is outside 1 to 9999.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calpoint::Year;
    ///
    /// assert_eq!(Year::new(2024).unwrap().value(), 2024);
    /// assert!(Year::new(0).is_err());
    /// assert!(Year::new(10_000).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, Error> {
        if value.is_within(Self::MIN .. Self::MAX + 1) {
            Ok(Year(value))
        }
        else {
            Err(Error::YearOutOfRange(value))
        }
    }

    /// Points in time before the year 1 or after 9999 still have a
    /// (proleptic) year number; this is the only way to get hold of one.
    pub(crate) fn unchecked(value: i64) -> Self {
        Year(value)
    }

    /// The current year in the local time zone.
    pub fn now() -> Self {
        PointInTime::now().year()
    }

    /// The year of the given point in time, in that point’s own zone.
    pub fn from_point(when: &PointInTime) -> Self {
        when.year()
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use calpoint::Year;
    ///
    /// assert_eq!(Year::new(2000).unwrap().is_leap_year(), true);
    /// assert_eq!(Year::new(1900).unwrap().is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        leap_year_calculations(self.0).1
    }

    pub fn days_in_year(self) -> i16 {
        if self.is_leap_year() { 366 } else { 365 }
    }

    /// The year after this one, which fails for the year 9999.
    pub fn next(self) -> Result<Self, Error> {
        Self::new(self.0.saturating_add(1))
    }

    /// The year before this one, which fails for the year 1.
    pub fn previous(self) -> Result<Self, Error> {
        Self::new(self.0.saturating_sub(1))
    }
}

/// Performs two related calculations for leap years, returning the
/// results as a two-part tuple:
///
/// 1. The number of leap years that have elapsed between the year 2000 and
///    this year;
/// 2. Whether this year is a leap year or not.
fn leap_year_calculations(year: i64) -> (i64, bool) {
    let year = year - 2000;

    // This calculation is the reverse of YMD::from_days_since_epoch.
    let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

    // Standard leap-year calculations, performed on the remainder
    let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

    let num_100y_cycles = remainder / 100;
    remainder -= num_100y_cycles * 100;

    let leap_years_elapsed = remainder / 4
        + 97 * num_400y_cycles  // There are 97 leap years in 400 years
        + 24 * num_100y_cycles  // There are 24 leap years in 100 years
        - if currently_leap_year { 1 } else { 0 };

    (leap_years_elapsed, currently_leap_year)
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i8` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

/// Full and short English names, in calendar order.
static MONTH_NAMES: [(&str, &str); 12] = [
    ("January",   "Jan"),  ("February",  "Feb"),  ("March",     "Mar"),
    ("April",     "Apr"),  ("May",       "May"),  ("June",      "Jun"),
    ("July",      "Jul"),  ("August",    "Aug"),  ("September", "Sep"),
    ("October",   "Oct"),  ("November",  "Nov"),  ("December",  "Dec"),
];

#[allow(clippy::match_same_arms)]
impl Month {

    /// Every month, in calendar order.
    pub const ALL: [Month; 12] = [
        January,  February,  March,
        April,    May,       June,
        July,     August,    September,
        October,  November,  December,
    ];

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use calpoint::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1..13) {
            Ok(Self::ALL[month as usize - 1])
        }
        else {
            Err(Error::MonthOutOfRange(month as i64))
        }
    }

    /// The month of the given point in time, in that point’s own zone.
    pub fn from_point(when: &PointInTime) -> Self {
        when.month()
    }

    pub fn number(self) -> i8 {
        self as i8
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.months_from_january()].0
    }

    pub fn short_name(self) -> &'static str {
        MONTH_NAMES[self.months_from_january()].1
    }

    /// The following month; December wraps around to January.
    pub fn next(self) -> Self {
        Self::ALL[(self.months_from_january() + 1) % 12]
    }

    /// The preceding month; January wraps around to December.
    pub fn previous(self) -> Self {
        Self::ALL[(self.months_from_january() + 11) % 12]
    }

    /// Returns the number of days in this month in the given year, which
    /// settles whether February has 28 or 29.
    ///
    /// ```rust
    /// use calpoint::{Month, Year};
    /// assert_eq!(Month::February.days_in_month(Year::new(2024).unwrap()), 29);
    /// assert_eq!(Month::February.days_in_month(Year::new(2023).unwrap()), 28);
    /// ```
    pub fn days_in_month(self, year: Year) -> i8 {
        self.day_count(year.is_leap_year())
    }

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub(crate) fn day_count(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    pub fn days_before_start(self) -> i16 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    pub(crate) fn months_from_january(self) -> usize {
        self as usize - 1
    }
}


/// A named day of the week, numbered from Monday as 1 to Sunday as 7.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Monday = 1, Tuesday = 2, Wednesday = 3, Thursday = 4,
    Friday = 5, Saturday = 6, Sunday = 7,
}

struct WeekdayInfo {
    name:     &'static str,
    short:    &'static str,
    shortest: &'static str,
    weekend:  bool,
}

static WEEKDAYS: [WeekdayInfo; 7] = [
    WeekdayInfo { name: "Monday",    short: "Mon", shortest: "Mo", weekend: false },
    WeekdayInfo { name: "Tuesday",   short: "Tue", shortest: "Tu", weekend: false },
    WeekdayInfo { name: "Wednesday", short: "Wed", shortest: "We", weekend: false },
    WeekdayInfo { name: "Thursday",  short: "Thu", shortest: "Th", weekend: false },
    WeekdayInfo { name: "Friday",    short: "Fri", shortest: "Fr", weekend: false },
    WeekdayInfo { name: "Saturday",  short: "Sat", shortest: "Sa", weekend: true  },
    WeekdayInfo { name: "Sunday",    short: "Sun", shortest: "Su", weekend: true  },
];

impl Weekday {

    /// Every weekday, starting from Monday.
    pub const ALL: [Weekday; 7] = [
        Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday,
    ];

    /// Return the weekday based on a number, with Monday as Day 1, and
    /// Sunday as Day 7.
    ///
    /// ```rust
    /// use calpoint::Weekday;
    /// assert_eq!(Weekday::from_one(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_one(0).is_err());
    /// ```
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(1..8) {
            Ok(Self::ALL[weekday as usize - 1])
        }
        else {
            Err(Error::WeekdayOutOfRange(weekday as i64))
        }
    }

    pub fn from_point(when: &PointInTime) -> Self {
        when.weekday()
    }

    pub fn number(self) -> i8 {
        self as i8
    }

    fn info(self) -> &'static WeekdayInfo {
        &WEEKDAYS[self as usize - 1]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Three letters, such as “Wed”.
    pub fn short_name(self) -> &'static str {
        self.info().short
    }

    /// Two letters, such as “We”.
    pub fn shortest_name(self) -> &'static str {
        self.info().shortest
    }

    pub fn is_weekend(self) -> bool {
        self.info().weekend
    }

    pub fn is_weekday(self) -> bool {
        !self.is_weekend()
    }

    /// The following day; Sunday wraps around to Monday.
    pub fn next(self) -> Self {
        Self::ALL[self as usize % 7]
    }

    /// The preceding day; Monday wraps around to Sunday.
    pub fn previous(self) -> Self {
        Self::ALL[(self as usize + 5) % 7]
    }
}


/// A day of the month, from 1 to 31.
///
/// Any value up to 31 is accepted regardless of the month, so `Day(31)`
/// exists even though April doesn’t have one; `clamp` pulls it back into
/// a given month.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct Day(i8);

impl Day {
    pub fn new(value: i8) -> Result<Self, Error> {
        if value.is_within(1..32) {
            Ok(Day(value))
        }
        else {
            Err(Error::DayOutOfRange(value as i64))
        }
    }

    pub(crate) fn unchecked(value: i8) -> Self {
        Day(value)
    }

    pub fn from_point(when: &PointInTime) -> Self {
        when.day()
    }

    pub fn value(self) -> i8 {
        self.0
    }

    /// Caps this day to the length of the given month in the given year.
    ///
    /// ```rust
    /// use calpoint::{Day, Month, Year};
    ///
    /// let day = Day::new(31).unwrap();
    /// assert_eq!(day.clamp(Year::new(2023).unwrap(), Month::April).value(), 30);
    /// ```
    pub fn clamp(self, year: Year, month: Month) -> Self {
        Day(min(self.0, month.days_in_month(year)))
    }

    /// Whether this day actually occurs in the given month.
    pub fn is_valid_in(self, year: Year, month: Month) -> bool {
        self.0 <= month.days_in_month(year)
    }
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// By having the reference point immediately after a possible leap-year
/// day, on a year that’s a multiple of 400, the Gregorian calendar’s leap
/// day lands at the very end of each cycle and the maths for turning a
/// day count into a date reduces to simple division.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.

/// Number of days between **1st January, 1970** and **1st January, 2000**,
/// plus the leap day of 2000 itself, which `leap_year_calculations` leaves
/// out of its count for any year relative to 2000.
const DAYS_TO_2000: i64 = 30 * 365 + 7 + 1;

/// The number of days elapsed at the end of each month, starting at the
/// beginning of March (the first month after the EPOCH above), going
/// backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// A year, month, and day triple that is known to be on the calendar.
///
/// The year is a plain number so that instants before the year 1 can still
/// be broken down; every public constructor rejects them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Debug, Copy)]
pub(crate) struct YMD {
    pub(crate) year:  i64,
    pub(crate) month: Month,
    pub(crate) day:   i8,
}

impl YMD {

    /// Checks that the day exists in that month and year.
    pub(crate) fn new(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        let (_, is_leap_year) = leap_year_calculations(year);

        if day >= 1 && day <= month.day_count(is_leap_year) {
            Ok(Self { year, month, day })
        }
        else {
            Err(Error::InvalidDate { year, month: month as i8, day })
        }
    }

    /// Finds the date from a year and a day-of-year, from 1 to 366.
    pub(crate) fn from_yearday(year: i64, yearday: i64) -> Result<Self, Error> {
        let days_in_year = if leap_year_calculations(year).1 { 366 } else { 365 };

        if yearday.is_within(1 .. days_in_year + 1) {
            let jan_1 = Self { year, month: January, day: 1 };
            Ok(Self::from_days_since_epoch(jan_1.to_days_since_epoch() + yearday - 1))
        }
        else {
            Err(Error::DayOutOfRange(yearday))
        }
    }

    /// Finds the date from an ISO-8601 week-numbering year, week, and
    /// weekday. Week 1 is the week containing the 4th of January, so the
    /// calendar year can differ from the week year near its ends.
    pub(crate) fn from_week_date(year: i64, week: i64, weekday: Weekday) -> Result<Self, Error> {
        if !week.is_within(1..54) {
            return Err(Error::DayOutOfRange(week));
        }

        let jan_4 = Self { year, month: January, day: 4 }.to_days_since_epoch();
        let week_1_monday = jan_4 - (days_to_weekday(jan_4).number() as i64 - 1);
        let days = week_1_monday + (week - 1) * 7 + (weekday.number() as i64 - 1);

        let date = Self::from_days_since_epoch(days);
        if week == 53 && date.week_year() != year {
            return Err(Error::DayOutOfRange(week));
        }

        Ok(date)
    }

    /// The ISO-8601 week-numbering year this date falls into.
    fn week_year(&self) -> i64 {
        let days = self.to_days_since_epoch();
        let thursday = days + 4 - days_to_weekday(days).number() as i64;
        Self::from_days_since_epoch(thursday).year
    }

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970.
    pub(crate) fn to_days_since_epoch(&self) -> i64 {
        let years = self.year - 2000;
        let (leap_days_elapsed, is_leap_year) = leap_year_calculations(self.year);

        // The days between the start of 1970 and the start of 2000...
        let within_year = DAYS_TO_2000

            // Plus the leap years between the start of 2000 and now...
            + leap_days_elapsed

            // Plus the days in all the months leading up to this one...
            + self.month.days_before_start() as i64

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the days in the month so far (days are 1-indexed).
            + (self.day - 1) as i64;

        // Plus the number of days from the start of 2000, which saturates
        // for the far-off years that month arithmetic can reach.
        years.saturating_mul(365).saturating_add(within_year)
    }

    /// Computes the year, month, and day given the number of days that
    /// have passed since the 1st January, 1970.
    pub(crate) fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after. Find the 400-year, 100-year, and 4-year
        // cycles, then keep subtracting the leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days - EPOCH_DIFFERENCE, DAYS_IN_400Y);

        // The last 100-year cycle is one day longer than the others, so
        // its final leap day must not spill into a fifth cycle.
        let num_100y_cycles = min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;

        let mut years = min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days left in this March-based year

        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Scan the time triangle for the month that has the correct number
        // of days elapsed at the end of it (it’s “11 - index” below because
        // the triangle goes backwards).
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None                => (0, remainder),  // still in March
        };

        // Add 2 to the month to compensate for the EPOCH being in March.
        let mut month = month + 2;
        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;
        }

        Self {
            year:  years + 2000,
            month: Month::ALL[month],
            day:   (month_days + 1) as i8,
        }
    }

    pub(crate) fn weekday(&self) -> Weekday {
        days_to_weekday(self.to_days_since_epoch())
    }

    /// The day of the year, from 1 to 366.
    pub(crate) fn yearday(&self) -> i16 {
        self.month.days_before_start()
            + if leap_year_calculations(self.year).1 && self.month >= March { 1 } else { 0 }
            + self.day as i16
    }
}

/// Computes the weekday, given the number of days that have passed
/// since the 1st January, 1970.
pub(crate) fn days_to_weekday(days: i64) -> Weekday {
    // The 1st January 1970 was a Thursday, which is 3 days after Monday.
    Weekday::ALL[(days + 3).rem_euclid(7) as usize]
}


/// A **time of day** is a time that recurs once a day, without a date or
/// a time zone, to the microsecond.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct TimeOfDay {
    hour:   i8,
    minute: i8,
    second: i8,
    microsecond: i32,
}

impl TimeOfDay {

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, microsecond: 0 }
    }

    /// The last representable moment of a day, 23:59:59.999999.
    pub fn last_microsecond() -> Self {
        Self { hour: 23, minute: 59, second: 59, microsecond: 999_999 }
    }

    /// Creates a new time of day with the given hour and minute fields.
    /// The second and sub-second fields are set to 0.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms_us(hour, minute, 0, 0)
    }

    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_us(hour, minute, second, 0)
    }

    /// Creates a new time of day with the given hour, minute, second, and
    /// microsecond-of-second fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    pub fn hms_us(hour: i8, minute: i8, second: i8, microsecond: i32) -> Result<Self, Error> {
        let out_of_range = |field, value: i64| Err(Error::TimeOutOfRange { field, value });

        if !hour.is_within(0..24) {
            out_of_range(TimeField::Hour, hour as i64)
        }
        else if !minute.is_within(0..60) {
            out_of_range(TimeField::Minute, minute as i64)
        }
        else if !second.is_within(0..60) {
            out_of_range(TimeField::Second, second as i64)
        }
        else if !microsecond.is_within(0..1_000_000) {
            out_of_range(TimeField::Microsecond, microsecond as i64)
        }
        else {
            Ok(Self { hour, minute, second, microsecond })
        }
    }

    /// Like `hms_us`, but with the sub-second part given as separate
    /// millisecond and microsecond-of-millisecond fields, each 0 to 999.
    pub fn hms_ms_us(hour: i8, minute: i8, second: i8, millisecond: i16, microsecond: i16) -> Result<Self, Error> {
        if !millisecond.is_within(0..1000) {
            return Err(Error::TimeOutOfRange { field: TimeField::Millisecond, value: millisecond as i64 });
        }
        if !microsecond.is_within(0..1000) {
            return Err(Error::TimeOutOfRange { field: TimeField::Microsecond, value: microsecond as i64 });
        }

        Self::hms_us(hour, minute, second, millisecond as i32 * 1000 + microsecond as i32)
    }

    /// Computes the hours, minutes, and seconds, based on the number of
    /// seconds that have elapsed since midnight.
    pub(crate) fn from_seconds_since_midnight(seconds: i64, microsecond: i32) -> Self {
        Self {
            hour:   (seconds / SECONDS_IN_HOUR) as i8,
            minute: (seconds / SECONDS_IN_MINUTE % 60) as i8,
            second: (seconds % 60) as i8,
            microsecond,
        }
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring sub-seconds.
    pub(crate) fn to_seconds(self) -> i64 {
        self.hour as i64 * SECONDS_IN_HOUR
            + self.minute as i64 * SECONDS_IN_MINUTE
            + self.second as i64
    }

    pub fn hour(&self) -> i8 { self.hour }
    pub fn minute(&self) -> i8 { self.minute }
    pub fn second(&self) -> i8 { self.second }

    /// The microsecond of the second, from 0 to 999,999.
    pub fn microsecond_of_second(&self) -> i32 { self.microsecond }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02}:{:02}.{:06})", self.hour, self.minute, self.second, self.microsecond)
    }
}
