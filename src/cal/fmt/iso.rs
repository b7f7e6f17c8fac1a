use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{Day, Month, Weekday, Year};
use crate::cal::point::{PointInTime, Zone};
use crate::util::RangeExt;


impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.value().is_within(0 .. 10_000) {
            write!(f, "{:04}", self.value())
        }
        else {
            write!(f, "{:+05}", self.value())
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Extended ISO 8601 with microseconds, suffixed with `Z` in UTC.
impl fmt::Display for PointInTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let wall = self.wall();
        let micros = wall.millisecond() as i32 * 1000 + wall.microsecond() as i32;

        write!(f, "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}",
               wall.year(), wall.month().number(), wall.day().value(),
               wall.hour(), wall.minute(), wall.second(), micros)?;

        match self.zone() {
            Zone::Utc   => f.write_str("Z"),
            Zone::Local => Ok(()),
        }
    }
}

impl fmt::Debug for PointInTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PointInTime({})", self)
    }
}
