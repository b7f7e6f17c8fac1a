//! Named format patterns for common layouts.

/// `2025-04-08`
pub const ISO_DATE: &str = "yyyy-MM-dd";

/// `2025-04-08T13:52:05`
pub const ISO_DATE_TIME: &str = "yyyy-MM-dd'T'HH:mm:ss";

/// `2025-04-08 13:52:05`
pub const DATE_TIME: &str = "yyyy-MM-dd HH:mm:ss";

/// `13:52:05`
pub const TIME_24: &str = "HH:mm:ss";

/// `13:52`
pub const HOUR_MINUTE: &str = "HH:mm";

/// `01:52 PM`
pub const TIME_12: &str = "hh:mm a";

/// `2025-04-08T11:52:05Z`, to be rendered in UTC.
pub const ISO_8601_UTC: &str = "yyyy-MM-dd'T'HH:mm:ss'Z'";

/// `2025-04-08T11:52:05.123456Z`, to be rendered in UTC.
pub const ISO_8601_UTC_MICROS: &str = "yyyy-MM-dd'T'HH:mm:ss.SSSSSS'Z'";

/// `Tue, 08 Apr 2025 13:52:05`
pub const RFC_1123: &str = "EEE, dd MMM yyyy HH:mm:ss";

/// `Tuesday, April 8, 2025`
pub const LONG_DATE: &str = "EEEE, MMMM d, yyyy";


/// The named patterns as values, for code that picks one at run time.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum Preset {
    IsoDate,
    IsoDateTime,
    DateTime,
    Time24,
    HourMinute,
    Time12,
    Iso8601Utc,
    Iso8601UtcMicros,
    Rfc1123,
    LongDate,
}

impl Preset {
    pub const ALL: [Preset; 10] = [
        Preset::IsoDate, Preset::IsoDateTime, Preset::DateTime, Preset::Time24,
        Preset::HourMinute, Preset::Time12, Preset::Iso8601Utc,
        Preset::Iso8601UtcMicros, Preset::Rfc1123, Preset::LongDate,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            Preset::IsoDate           => ISO_DATE,
            Preset::IsoDateTime       => ISO_DATE_TIME,
            Preset::DateTime          => DATE_TIME,
            Preset::Time24            => TIME_24,
            Preset::HourMinute        => HOUR_MINUTE,
            Preset::Time12            => TIME_12,
            Preset::Iso8601Utc        => ISO_8601_UTC,
            Preset::Iso8601UtcMicros  => ISO_8601_UTC_MICROS,
            Preset::Rfc1123           => RFC_1123,
            Preset::LongDate          => LONG_DATE,
        }
    }

    /// Whether the pattern ends in a literal `Z`, and so only makes sense
    /// for a point rendered in UTC.
    pub fn is_utc(self) -> bool {
        matches!(self, Preset::Iso8601Utc | Preset::Iso8601UtcMicros)
    }
}
