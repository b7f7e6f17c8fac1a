//! Turning points in time into text.

mod iso;
#[cfg(feature="format")] pub mod pattern;
#[cfg(feature="format")] pub mod patterns;

#[cfg(feature="format")]
mod render {
    use super::pattern::Pattern;
    use super::patterns::Preset;
    use crate::cal::point::PointInTime;

    impl PointInTime {

        /// Renders this point in its own zone using a pattern such as
        /// `yyyy-MM-dd HH:mm:ss`. See `Pattern` for the letters understood.
        ///
        /// ```
        /// use calpoint::PointInTime;
        ///
        /// let when = PointInTime::local(2025, 4, 8, 13, 52, 5).unwrap();
        /// assert_eq!(when.format("yyyy-MM-dd HH:mm:ss"), "2025-04-08 13:52:05");
        /// ```
        pub fn format(&self, pattern: &str) -> String {
            Pattern::parse(pattern).format(&self.wall())
        }

        /// Renders this point after converting it to UTC.
        pub fn format_utc(&self, pattern: &str) -> String {
            self.to_utc().format(pattern)
        }

        /// Renders this point with a pattern, converting to UTC first if
        /// `utc` is set.
        pub fn format_in(&self, pattern: &str, utc: bool) -> String {
            if utc { self.format_utc(pattern) } else { self.format(pattern) }
        }

        /// Renders this point with one of the named patterns, in UTC if the
        /// preset calls for it.
        pub fn format_preset(&self, preset: Preset) -> String {
            self.format_in(preset.pattern(), preset.is_utc())
        }
    }
}
