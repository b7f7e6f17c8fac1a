#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Calendar values and points in time, with pattern formatting and
//! lenient parsing.
//!
//! The centre of the crate is `PointInTime`: an instant on the timeline,
//! paired with the zone (local or UTC) its calendar fields are read in.
//! Its year, month, day, weekday and time of day are worked out from the
//! instant whenever they are asked for. Every value is immutable, and every
//! “setter” returns a new value.
//!
//! # Examples
//!
//! ```
//! use calpoint::{PointInTime, Duration, Month};
//! use calpoint::clock::{with_clock, FixedClock};
//! use calpoint::Instant;
//!
//! // Pin the clock to 2025-04-08 11:52:05 UTC, two hours ahead locally.
//! let clock = FixedClock::new(Instant::at(1_744_113_125), 2 * 60 * 60);
//!
//! with_clock(clock, || {
//!     let now = PointInTime::now();
//!     assert_eq!(now.format("yyyy-MM-dd HH:mm:ss"), "2025-04-08 13:52:05");
//!     assert_eq!(now.month(), Month::April);
//!
//!     let later = now.add(Duration::of_days(30));
//!     assert_eq!(later.format("EEE d MMM"), "Thu 8 May");
//!     assert!(later.is_after_now());
//!
//!     let parsed = PointInTime::parse("13:52:05").unwrap();
//!     assert!(parsed.is_today());
//!     assert!(parsed.is_at_same_moment_as(&now));
//! });
//! ```

mod system;
mod util;
mod error;

pub mod duration;
pub mod instant;
pub mod cal;

pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::clock;
pub use crate::cal::datetime::{Year, Month, Weekday, Day, TimeOfDay};
pub use crate::cal::point::{PointInTime, Zone, Changes};
pub use crate::duration::Duration;
pub use crate::instant::Instant;
pub use crate::error::{Error, TimeField};

#[cfg(feature="format")]
pub use crate::cal::fmt::patterns::{self, Preset};

#[cfg(feature="parse")]
pub use crate::cal::parse::ParseError;
