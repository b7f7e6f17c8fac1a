use calpoint::{Day, Error, Month, PointInTime, Weekday, Year, Zone, TimeOfDay};


#[test]
fn the_distant_past() {
    let when = PointInTime::utc(7, 4, 1, 0, 0, 0).unwrap();

    assert_eq!(when.year().value(), 7);
    assert_eq!(when.month(), Month::April);
    assert_eq!(when.day().value(), 1);
}


#[test]
fn the_distant_present() {
    let when = PointInTime::utc(2015, 1, 16, 0, 0, 0).unwrap();

    assert_eq!(when.year().value(), 2015);
    assert_eq!(when.month(), Month::January);
    assert_eq!(when.day().value(), 16);
    assert_eq!(when.weekday(), Weekday::Friday);
}


#[test]
fn the_distant_future() {
    let when = PointInTime::utc(9999, 10, 13, 0, 0, 0).unwrap();

    assert_eq!(when.year().value(), 9999);
    assert_eq!(when.month(), Month::October);
    assert_eq!(when.day().value(), 13);
}


#[test]
fn the_epoch() {
    let when = PointInTime::utc(1970, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(when.epoch_milliseconds(), 0);
    assert_eq!(when.weekday(), Weekday::Thursday);
}


#[test]
fn from_parts() {
    let time = TimeOfDay::hms_ms_us(13, 52, 5, 123, 456).unwrap();
    let when = PointInTime::from_parts(Zone::Utc, Year::new(2025).unwrap(), Month::April, Day::new(8).unwrap(), time).unwrap();

    assert_eq!(when.epoch_microseconds(), 1_744_120_325_123_456);
    assert_eq!(when.millisecond(), 123);
    assert_eq!(when.microsecond(), 456);
}


#[test]
fn year_zero() {
    assert_eq!(PointInTime::utc(0, 1, 1, 0, 0, 0), Err(Error::YearOutOfRange(0)));
}

#[test]
fn year_ten_thousand() {
    assert_eq!(PointInTime::utc(10_000, 1, 1, 0, 0, 0), Err(Error::YearOutOfRange(10_000)));
    assert_eq!(PointInTime::utc(100_000_000_000_000_000, 1, 1, 0, 0, 0), Err(Error::YearOutOfRange(100_000_000_000_000_000)));
}

#[test]
fn the_last_moment() {
    let when = PointInTime::utc(9999, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(when.epoch_milliseconds(), 253_402_300_799_000);
}

#[test]
fn month_thirteen() {
    assert_eq!(PointInTime::utc(2025, 13, 1, 0, 0, 0), Err(Error::MonthOutOfRange(13)));
}

#[test]
fn thirty_first_of_april() {
    assert_eq!(PointInTime::utc(2025, 4, 31, 0, 0, 0), Err(Error::InvalidDate { year: 2025, month: 4, day: 31 }));
}
