//! Points in time, with calendar-aware accessors and arithmetic.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use crate::cal::clock;
use crate::cal::datetime::{Day, Month, TimeOfDay, Weekday, Year, YMD};
use crate::cal::{DatePiece, TimePiece};
use crate::duration::{Duration, SECONDS_IN_DAY};
use crate::error::Error;
use crate::instant::Instant;
use crate::util::{bound, split_cycles, RangeExt};


/// Whether a point in time presents itself in the local time zone or
/// in UTC.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum Zone {
    Local,
    Utc,
}

/// A **point in time** is an exact instant on the timeline, together with
/// the zone its calendar fields are read in.
///
/// It never changes: every operation that looks like a modification
/// returns a new value. Its year, month, day, and time-of-day fields are
/// worked out from the instant each time they are asked for.
///
/// Two points are equal when they are the same instant, even if one is
/// read in UTC and the other in local time.
#[derive(Clone, Copy)]
pub struct PointInTime {
    instant: Instant,
    zone:    Zone,
}

/// The calendar fields of a point in time, as read in its own zone.
#[derive(Clone, Copy)]
pub(crate) struct Wall {
    pub(crate) date: YMD,
    pub(crate) time: TimeOfDay,
}

/// Which fields `copy_with` should replace. Fields left as `None` keep
/// their current value.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct Changes {
    pub year:        Option<i64>,
    pub month:       Option<i8>,
    pub day:         Option<i8>,
    pub hour:        Option<i8>,
    pub minute:      Option<i8>,
    pub second:      Option<i8>,
    pub millisecond: Option<i16>,
    pub microsecond: Option<i16>,
}

impl PointInTime {

    /// The current instant, in the local time zone.
    pub fn now() -> Self {
        Self::from_instant(clock::now(), Zone::Local)
    }

    /// Today’s date, in the local time zone, at the given time.
    pub fn today_at(time: TimeOfDay) -> Self {
        Self::from_wall(Zone::Local, Self::now().wall().date, time)
    }

    /// Today at the given hour and minute, failing if either is out of
    /// range.
    pub fn today_at_hm(hour: i8, minute: i8) -> Result<Self, Error> {
        TimeOfDay::hm(hour, minute).map(Self::today_at)
    }

    pub fn today_at_hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        TimeOfDay::hms(hour, minute, second).map(Self::today_at)
    }

    /// Creates a point from date and time fields read in local time.
    ///
    /// ```
    /// use calpoint::PointInTime;
    ///
    /// let when = PointInTime::local(2025, 4, 8, 13, 52, 5).unwrap();
    /// assert_eq!(when.hour(), 13);
    /// assert!(PointInTime::local(2025, 4, 31, 0, 0, 0).is_err());
    /// ```
    pub fn local(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::from_fields(Zone::Local, year, month, day, TimeOfDay::hms(hour, minute, second)?)
    }

    /// Creates a point from date and time fields read in UTC.
    pub fn utc(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::from_fields(Zone::Utc, year, month, day, TimeOfDay::hms(hour, minute, second)?)
    }

    /// Local midnight at the start of the given date. The day has to exist
    /// in that month.
    pub fn from_date(year: Year, month: Month, day: Day) -> Result<Self, Error> {
        Self::from_parts(Zone::Local, year, month, day, TimeOfDay::midnight())
    }

    /// Creates a point from the part types and a time of day, read in the
    /// given zone.
    pub fn from_parts(zone: Zone, year: Year, month: Month, day: Day, time: TimeOfDay) -> Result<Self, Error> {
        let date = YMD::new(year.value(), month, day.value())?;
        Ok(Self::from_wall(zone, date, time))
    }

    pub(crate) fn from_fields(zone: Zone, year: i64, month: i8, day: i8, time: TimeOfDay) -> Result<Self, Error> {
        let year  = Year::new(year)?;
        let month = Month::from_one(month)?;
        let day   = Day::new(day)?;
        Self::from_parts(zone, year, month, day, time)
    }

    pub fn from_instant(instant: Instant, zone: Zone) -> Self {
        Self { instant, zone }
    }

    pub fn from_epoch_millis(milliseconds: i64, zone: Zone) -> Self {
        Self::from_instant(Instant::at_millis(milliseconds), zone)
    }

    pub fn from_epoch_micros(microseconds: i64, zone: Zone) -> Self {
        Self::from_instant(Instant::at_micros(microseconds), zone)
    }

    /// Finds the instant at which the given date and time are shown in the
    /// given zone.
    ///
    /// When a local time occurs twice, because the clocks went back, the
    /// earlier offset in effect is used; a local time that was skipped
    /// lands on the other side of the gap.
    pub(crate) fn from_wall(zone: Zone, date: YMD, time: TimeOfDay) -> Self {
        let seconds = date.to_days_since_epoch().saturating_mul(SECONDS_IN_DAY).saturating_add(time.to_seconds());
        let as_utc  = Instant::at(seconds) + Duration::of_micros(time.microsecond_of_second() as i64);

        let instant = match zone {
            Zone::Utc   => as_utc,
            Zone::Local => {
                let guess = as_utc - Duration::of(clock::local_offset(as_utc) as i64);
                as_utc - Duration::of(clock::local_offset(guess) as i64)
            }
        };

        Self { instant, zone }
    }

    /// Breaks the instant down into calendar fields. This is done afresh
    /// on every call; nothing is cached.
    pub(crate) fn wall(&self) -> Wall {
        let shifted = self.instant + self.utc_offset();
        let (days, seconds) = split_cycles(shifted.seconds(), SECONDS_IN_DAY);

        Wall {
            date: YMD::from_days_since_epoch(days),
            time: TimeOfDay::from_seconds_since_midnight(seconds, shifted.microseconds()),
        }
    }

    fn with_time(&self, time: TimeOfDay) -> Self {
        Self::from_wall(self.zone, self.wall().date, time)
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn is_utc(&self) -> bool {
        self.zone == Zone::Utc
    }

    /// The same instant, read in UTC.
    pub fn to_utc(&self) -> Self {
        Self::from_instant(self.instant, Zone::Utc)
    }

    /// The same instant, read in the local time zone.
    pub fn to_local(&self) -> Self {
        Self::from_instant(self.instant, Zone::Local)
    }

    /// How far this point’s zone is ahead of UTC at this instant.
    pub fn utc_offset(&self) -> Duration {
        match self.zone {
            Zone::Utc   => Duration::zero(),
            Zone::Local => Duration::of(clock::local_offset(self.instant) as i64),
        }
    }

    pub fn year(&self) -> Year {
        self.wall().year()
    }

    pub fn month(&self) -> Month {
        self.wall().month()
    }

    pub fn day(&self) -> Day {
        self.wall().day()
    }

    pub fn weekday(&self) -> Weekday {
        self.wall().weekday()
    }

    /// The day of the year, from 1 to 366.
    pub fn day_of_year(&self) -> i16 {
        self.wall().yearday()
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.wall().time
    }

    pub fn hour(&self) -> i8 {
        self.wall().hour()
    }

    pub fn minute(&self) -> i8 {
        self.wall().minute()
    }

    pub fn second(&self) -> i8 {
        self.wall().second()
    }

    /// The millisecond of the second, from 0 to 999.
    pub fn millisecond(&self) -> i16 {
        self.wall().millisecond()
    }

    /// The microsecond of the millisecond, from 0 to 999.
    pub fn microsecond(&self) -> i16 {
        self.wall().microsecond()
    }

    pub fn epoch_milliseconds(&self) -> i64 {
        self.instant.epoch_millis()
    }

    pub fn epoch_microseconds(&self) -> i64 {
        self.instant.epoch_micros()
    }

    pub fn is_leap_year(&self) -> bool {
        self.year().is_leap_year()
    }

    pub fn days_in_month(&self) -> i8 {
        self.month().days_in_month(self.year())
    }


    // ---- comparisons ----

    pub fn is_before(&self, other: &Self) -> bool {
        self.instant < other.instant
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.instant > other.instant
    }

    pub fn is_at_same_moment_as(&self, other: &Self) -> bool {
        self.instant == other.instant
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Whether both points fall on the same calendar date, each read in its
    /// own zone.
    pub fn is_same_day(&self, other: &Self) -> bool {
        self.wall().date == other.wall().date
    }

    pub fn is_same_month(&self, other: &Self) -> bool {
        let (a, b) = (self.wall().date, other.wall().date);
        a.year == b.year && a.month == b.month
    }

    pub fn is_same_year(&self, other: &Self) -> bool {
        self.wall().date.year == other.wall().date.year
    }

    /// Whether this point lies between `start` and `end`, both included.
    pub fn is_in_range(&self, start: &Self, end: &Self) -> bool {
        self.is_in_range_with(start, end, true, true)
    }

    /// Whether this point lies between `start` and `end`, with each end
    /// point included or excluded independently.
    ///
    /// ```
    /// use calpoint::PointInTime;
    ///
    /// let a = PointInTime::utc(2025, 1, 1, 0, 0, 0).unwrap();
    /// let b = PointInTime::utc(2025, 2, 1, 0, 0, 0).unwrap();
    /// assert!(a.is_in_range_with(&a, &b, true, false));
    /// assert!(!b.is_in_range_with(&a, &b, true, false));
    /// ```
    pub fn is_in_range_with(&self, start: &Self, end: &Self, inclusive_start: bool, inclusive_end: bool) -> bool {
        self.is_between(bound(start, inclusive_start), bound(end, inclusive_end))
    }


    // ---- the clock ----
    //
    // Each of these reads the clock afresh, so two calls can disagree
    // about what “now” is.

    pub fn is_today(&self) -> bool {
        self.is_same_day(&Self::now())
    }

    pub fn is_tomorrow(&self) -> bool {
        self.is_same_day(&Self::now().add_days(1))
    }

    pub fn is_yesterday(&self) -> bool {
        self.is_same_day(&Self::now().subtract_days(1))
    }

    pub fn is_before_now(&self) -> bool {
        self.is_before(&Self::now())
    }

    pub fn is_after_now(&self) -> bool {
        self.is_after(&Self::now())
    }

    /// How long ago this was, or, if negative, how long until it happens.
    pub fn difference_from_now(&self) -> Duration {
        Self::now().difference(self)
    }


    // ---- derived points ----

    /// The same date at 00:00:00.000000.
    pub fn start_of_day(&self) -> Self {
        self.with_time(TimeOfDay::midnight())
    }

    /// The same date at 23:59:59.999999.
    pub fn end_of_day(&self) -> Self {
        self.with_time(TimeOfDay::last_microsecond())
    }

    /// Midnight on the first day of this month.
    pub fn start_of_month(&self) -> Self {
        let date = self.wall().date;
        Self::from_wall(self.zone, YMD { day: 1, ..date }, TimeOfDay::midnight())
    }

    /// The last microsecond of the last day of this month.
    pub fn end_of_month(&self) -> Self {
        let date = self.wall().date;
        let last = date.month.days_in_month(Year::unchecked(date.year));
        Self::from_wall(self.zone, YMD { day: last, ..date }, TimeOfDay::last_microsecond())
    }

    /// Replaces the given fields, keeping the rest. The result has to be
    /// a real calendar date: moving the 31st of March to April fails
    /// rather than rolling over into May.
    ///
    /// ```
    /// use calpoint::{Changes, PointInTime};
    ///
    /// let march = PointInTime::local(2023, 3, 31, 9, 0, 0).unwrap();
    /// assert!(march.copy_with(Changes { month: Some(4), ..Changes::default() }).is_err());
    /// assert!(march.copy_with(Changes { month: Some(5), ..Changes::default() }).is_ok());
    /// ```
    pub fn copy_with(&self, changes: Changes) -> Result<Self, Error> {
        let Wall { date, time } = self.wall();

        let millisecond = (time.microsecond_of_second() / 1000) as i16;
        let microsecond = (time.microsecond_of_second() % 1000) as i16;

        let time = TimeOfDay::hms_ms_us(
            changes.hour.unwrap_or(time.hour()),
            changes.minute.unwrap_or(time.minute()),
            changes.second.unwrap_or(time.second()),
            changes.millisecond.unwrap_or(millisecond),
            changes.microsecond.unwrap_or(microsecond),
        )?;

        Self::from_fields(
            self.zone,
            changes.year.unwrap_or(date.year),
            changes.month.unwrap_or(date.month as i8),
            changes.day.unwrap_or(date.day),
            time,
        )
    }


    // ---- arithmetic ----

    pub fn add(&self, duration: Duration) -> Self {
        Self::from_instant(self.instant + duration, self.zone)
    }

    pub fn subtract(&self, duration: Duration) -> Self {
        Self::from_instant(self.instant - duration, self.zone)
    }

    /// Adds whole days of 24 hours each; across a daylight-saving change
    /// the local time of day shifts by the difference.
    pub fn add_days(&self, days: i64) -> Self {
        self.add(Duration::of_days(days))
    }

    pub fn add_hours(&self, hours: i64) -> Self {
        self.add(Duration::of_hours(hours))
    }

    pub fn add_minutes(&self, minutes: i64) -> Self {
        self.add(Duration::of_minutes(minutes))
    }

    pub fn add_seconds(&self, seconds: i64) -> Self {
        self.add(Duration::of(seconds))
    }

    pub fn subtract_days(&self, days: i64) -> Self {
        self.subtract(Duration::of_days(days))
    }

    pub fn subtract_hours(&self, hours: i64) -> Self {
        self.subtract(Duration::of_hours(hours))
    }

    pub fn subtract_minutes(&self, minutes: i64) -> Self {
        self.subtract(Duration::of_minutes(minutes))
    }

    pub fn subtract_seconds(&self, seconds: i64) -> Self {
        self.subtract(Duration::of(seconds))
    }

    /// Moves by whole calendar months, keeping the time of day. If the day
    /// doesn’t exist in the new month, it is pulled back to the last day
    /// that does.
    ///
    /// ```
    /// use calpoint::{Month, PointInTime};
    ///
    /// let end_of_january = PointInTime::local(2024, 1, 31, 12, 0, 0).unwrap();
    /// let next = end_of_january.add_months(1);
    /// assert_eq!((next.month(), next.day().value()), (Month::February, 29));
    /// ```
    pub fn add_months(&self, months: i64) -> Self {
        let Wall { date, time } = self.wall();

        let total = date.year.saturating_mul(12)
                        .saturating_add(date.month.months_from_january() as i64)
                        .saturating_add(months);
        let year  = Year::unchecked(total.div_euclid(12));
        let month = Month::ALL[total.rem_euclid(12) as usize];
        let day   = Day::unchecked(date.day).clamp(year, month).value();

        Self::from_wall(self.zone, YMD { year: year.value(), month, day }, time)
    }

    pub fn add_years(&self, years: i64) -> Self {
        self.add_months(years.saturating_mul(12))
    }

    /// The signed length of time from `other` to this point: positive if
    /// this point is later.
    pub fn difference(&self, other: &Self) -> Duration {
        self.instant - other.instant
    }

    pub fn difference_in_seconds(&self, other: &Self) -> i64 {
        self.difference(other).whole_seconds()
    }

    pub fn difference_in_minutes(&self, other: &Self) -> i64 {
        self.difference(other).whole_minutes()
    }

    pub fn difference_in_hours(&self, other: &Self) -> i64 {
        self.difference(other).whole_hours()
    }

    pub fn difference_in_days(&self, other: &Self) -> i64 {
        self.difference(other).whole_days()
    }
}

impl DatePiece for Wall {
    fn year(&self) -> Year { Year::unchecked(self.date.year) }
    fn month(&self) -> Month { self.date.month }
    fn day(&self) -> Day { Day::unchecked(self.date.day) }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl TimePiece for Wall {
    fn hour(&self) -> i8 { self.time.hour() }
    fn minute(&self) -> i8 { self.time.minute() }
    fn second(&self) -> i8 { self.time.second() }
    fn millisecond(&self) -> i16 { (self.time.microsecond_of_second() / 1000) as i16 }
    fn microsecond(&self) -> i16 { (self.time.microsecond_of_second() % 1000) as i16 }
}

impl DatePiece for PointInTime {
    fn year(&self) -> Year { PointInTime::year(self) }
    fn month(&self) -> Month { PointInTime::month(self) }
    fn day(&self) -> Day { PointInTime::day(self) }
    fn yearday(&self) -> i16 { self.day_of_year() }
    fn weekday(&self) -> Weekday { PointInTime::weekday(self) }
}

impl TimePiece for PointInTime {
    fn hour(&self) -> i8 { PointInTime::hour(self) }
    fn minute(&self) -> i8 { PointInTime::minute(self) }
    fn second(&self) -> i8 { PointInTime::second(self) }
    fn millisecond(&self) -> i16 { PointInTime::millisecond(self) }
    fn microsecond(&self) -> i16 { PointInTime::microsecond(self) }
}

impl PartialEq for PointInTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for PointInTime {}

impl Hash for PointInTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state)
    }
}

impl PartialOrd for PointInTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PointInTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Add<Duration> for PointInTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        PointInTime::add(&self, duration)
    }
}

impl Sub<Duration> for PointInTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self.subtract(duration)
    }
}

impl Sub<PointInTime> for PointInTime {
    type Output = Duration;

    fn sub(self, other: Self) -> Duration {
        self.difference(&other)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::clock::{with_clock, FixedClock};

    /// 2025-04-08T11:52:05Z, which is 13:52:05 two hours east of UTC.
    const PINNED: i64 = 1_744_113_125;

    fn pinned<R>(f: impl FnOnce() -> R) -> R {
        with_clock(FixedClock::new(Instant::at(PINNED), 2 * 3600), f)
    }

    #[test]
    fn local_fields() {
        pinned(|| {
            let now = PointInTime::now();
            assert_eq!(now.year().value(), 2025);
            assert_eq!(now.month(), Month::April);
            assert_eq!(now.day().value(), 8);
            assert_eq!(now.weekday(), Weekday::Tuesday);
            assert_eq!((now.hour(), now.minute(), now.second()), (13, 52, 5));
        })
    }

    #[test]
    fn utc_fields() {
        pinned(|| {
            let now = PointInTime::now().to_utc();
            assert_eq!((now.hour(), now.minute()), (11, 52));
            assert_eq!(now.utc_offset(), Duration::zero());
        })
    }

    #[test]
    fn local_construction_round_trips() {
        pinned(|| {
            let when = PointInTime::local(2025, 4, 8, 13, 52, 5).unwrap();
            assert_eq!(when.epoch_milliseconds(), PINNED * 1000);
            assert_eq!(when.utc_offset(), Duration::of_hours(2));
        })
    }

    #[test]
    fn sub_seconds() {
        let when = PointInTime::from_epoch_micros(1_500_123_456, Zone::Utc);
        assert_eq!(when.second(), 30);
        assert_eq!(when.millisecond(), 123);
        assert_eq!(when.microsecond(), 456);
        assert_eq!(when.epoch_milliseconds(), 1_500_123);
    }

    #[test]
    fn before_the_epoch() {
        let when = PointInTime::from_epoch_micros(-1, Zone::Utc);
        assert_eq!(when.year().value(), 1969);
        assert_eq!(when.month(), Month::December);
        assert_eq!(when.day().value(), 31);
        assert_eq!((when.hour(), when.minute(), when.second()), (23, 59, 59));
        assert_eq!((when.millisecond(), when.microsecond()), (999, 999));
    }

    #[test]
    fn today_at_keeps_the_date() {
        pinned(|| {
            let when = PointInTime::today_at_hms(7, 30, 0).unwrap();
            assert!(when.is_today());
            assert_eq!((when.hour(), when.minute()), (7, 30));
            assert!(PointInTime::today_at_hm(24, 0).is_err());
        })
    }

    #[test]
    fn today_tomorrow_yesterday() {
        pinned(|| {
            let now = PointInTime::now();
            assert!(now.is_today());
            assert!(now.add_days(1).is_tomorrow());
            assert!(now.subtract_days(1).is_yesterday());
            assert!(!now.add_days(1).is_today());
            assert!(now.subtract_seconds(1).is_before_now());
            assert!(now.add_seconds(1).is_after_now());
        })
    }

    #[test]
    fn day_boundaries() {
        pinned(|| {
            let now = PointInTime::now();
            let start = now.start_of_day();
            let end = now.end_of_day();

            assert!(start.is_same_day(&now) && end.is_same_day(&now));
            assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
            assert_eq!((end.hour(), end.minute(), end.second(), end.millisecond(), end.microsecond()), (23, 59, 59, 999, 999));
            assert_eq!(end.difference(&start), Duration::of_days(1) - Duration::of_micros(1));
        })
    }

    #[test]
    fn month_boundaries() {
        let when = PointInTime::utc(2024, 2, 10, 8, 0, 0).unwrap();
        assert_eq!(when.start_of_month(), PointInTime::utc(2024, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(when.end_of_month().day().value(), 29);
        assert_eq!(when.days_in_month(), 29);
    }

    #[test]
    fn same_day_month_year() {
        let a = PointInTime::utc(2025, 4, 8, 0, 0, 0).unwrap();
        let b = PointInTime::utc(2025, 4, 8, 23, 59, 59).unwrap();
        let c = PointInTime::utc(2025, 4, 9, 0, 0, 0).unwrap();
        assert!(a.is_same_day(&b));
        assert!(!b.is_same_day(&c));
        assert!(b.is_same_month(&c));
        assert!(a.is_same_year(&PointInTime::utc(2025, 12, 31, 0, 0, 0).unwrap()));
    }

    #[test]
    fn equality_ignores_zone() {
        pinned(|| {
            let now = PointInTime::now();
            assert_eq!(now, now.to_utc());
            assert!(now.to_utc().is_utc());
            assert!(!now.to_utc().to_local().is_utc());
        })
    }

    #[test]
    fn ranges() {
        let a = PointInTime::utc(2025, 1, 1, 0, 0, 0).unwrap();
        let b = PointInTime::utc(2025, 1, 2, 0, 0, 0).unwrap();
        let middle = a.add_hours(12);

        assert!(middle.is_in_range(&a, &b));
        assert!(a.is_in_range(&a, &b) && b.is_in_range(&a, &b));
        assert!(!a.is_in_range_with(&a, &b, false, true));
        assert!(!b.is_in_range_with(&a, &b, true, false));
        assert!(!b.add_seconds(1).is_in_range(&a, &b));
    }

    #[test]
    fn arithmetic() {
        let when = PointInTime::utc(2025, 4, 8, 13, 52, 5).unwrap();
        assert_eq!(when.add_days(1).subtract_hours(24), when);
        assert_eq!(when.add_minutes(8).minute(), 0);
        assert_eq!(when + Duration::of(55), PointInTime::utc(2025, 4, 8, 13, 53, 0).unwrap());
        assert_eq!(when - Duration::of_days(8), PointInTime::utc(2025, 3, 31, 13, 52, 5).unwrap());
    }

    #[test]
    fn differences() {
        let a = PointInTime::utc(2025, 4, 8, 0, 0, 0).unwrap();
        let b = PointInTime::utc(2025, 4, 10, 12, 30, 0).unwrap();

        assert_eq!(b.difference_in_days(&a), 2);
        assert_eq!(b.difference_in_hours(&a), 60);
        assert_eq!(a.difference_in_minutes(&b), -3630);
        assert_eq!(b - a, Duration::of_minutes(3630));
    }

    #[test]
    fn far_arithmetic_saturates() {
        let when = PointInTime::utc(2025, 1, 1, 0, 0, 0).unwrap();

        let later = when.add_days(200_000_000_000_000);
        assert_eq!(later.instant().seconds(), i64::MAX);
        assert!(later.year().value() > Year::MAX);
        assert!(later > when);

        let earlier = when.add_days(-200_000_000_000_000);
        assert_eq!(earlier.instant().seconds(), i64::MIN);
        assert!(earlier < when);

        assert_eq!(when.add_months(i64::MAX).instant().seconds(), i64::MAX);
        assert_eq!(when.add_years(i64::MIN).instant().seconds(), i64::MIN);
        assert_eq!(later.difference_in_seconds(&earlier), i64::MAX);
    }

    #[test]
    fn huge_years_are_rejected() {
        assert_eq!(PointInTime::utc(100_000_000_000_000_000, 1, 1, 0, 0, 0),
                   Err(Error::YearOutOfRange(100_000_000_000_000_000)));
    }

    #[test]
    fn months_clamp() {
        let when = PointInTime::utc(2023, 1, 31, 6, 0, 0).unwrap();
        assert_eq!(when.add_months(1), PointInTime::utc(2023, 2, 28, 6, 0, 0).unwrap());
        assert_eq!(when.add_months(-2), PointInTime::utc(2022, 11, 30, 6, 0, 0).unwrap());
        assert_eq!(when.add_months(12), when.add_years(1));

        let leap_day = PointInTime::utc(2024, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(leap_day.add_years(1), PointInTime::utc(2025, 2, 28, 0, 0, 0).unwrap());
    }

    #[test]
    fn copy_with_replaces() {
        let when = PointInTime::utc(2025, 4, 8, 13, 52, 5).unwrap();
        let changed = when.copy_with(Changes { hour: Some(0), millisecond: Some(250), ..Changes::default() }).unwrap();

        assert_eq!((changed.hour(), changed.minute(), changed.millisecond()), (0, 52, 250));
        assert!(changed.is_utc());
    }

    #[test]
    fn copy_with_rejects() {
        let when = PointInTime::utc(2024, 2, 29, 0, 0, 0).unwrap();
        assert_eq!(when.copy_with(Changes { year: Some(2023), ..Changes::default() }),
                   Err(Error::InvalidDate { year: 2023, month: 2, day: 29 }));
        assert_eq!(when.copy_with(Changes { month: Some(13), ..Changes::default() }),
                   Err(Error::MonthOutOfRange(13)));
        assert!(when.copy_with(Changes { second: Some(60), ..Changes::default() }).is_err());
    }

    #[test]
    fn parts() {
        let year = Year::new(2024).unwrap();
        let day = Day::new(31).unwrap();

        assert!(PointInTime::from_date(year, Month::April, day).is_err());
        let when = PointInTime::from_date(year, Month::April, day.clamp(year, Month::April)).unwrap();
        assert_eq!(Day::from_point(&when).value(), 30);
        assert_eq!(Month::from_point(&when), Month::April);
        assert_eq!(Year::from_point(&when), year);
    }
}
