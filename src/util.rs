//! Misc stuff.

use std::ops::{Bound, Range, RangeBounds};


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;

    /// Returns whether this value lies between two bounds, each of which
    /// may independently include or exclude its end point.
    fn is_between(&self, lower: Bound<&Self>, upper: Bound<&Self>) -> bool;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges and points in time...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        *self >= range.start && *self < range.end
    }

    fn is_between(&self, lower: Bound<&Self>, upper: Bound<&Self>) -> bool {
        (lower, upper).contains(self)
    }
}

/// Picks an inclusive or exclusive bound.
pub(crate) fn bound<T>(value: &T, inclusive: bool) -> Bound<&T> {
    if inclusive { Bound::Included(value) } else { Bound::Excluded(value) }
}

/// Split a number of periods into a number of whole cycles, and the number
/// of periods left over that don’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}
