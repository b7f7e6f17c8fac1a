//! Datetime-to-string routines, driven by a pattern of letters.
//!
//! A pattern is read left to right. Runs of the same pattern letter become
//! one field, with the length of the run picking the style:
//!
//! | letters            | renders                                     |
//! |--------------------|---------------------------------------------|
//! | `G`                | era, `AD` or `BC`                           |
//! | `yy`               | two-digit year                              |
//! | `y`, `yyyy`        | year, zero-padded to the run length         |
//! | `M`, `MM`          | month number                                |
//! | `MMM`              | short month name, `Apr`                     |
//! | `MMMM`             | full month name, `April`                    |
//! | `d`, `dd`          | day of the month                            |
//! | `D`                | day of the year                             |
//! | `E`, `EEE`         | short weekday name, `Tue`                   |
//! | `EEEE`             | full weekday name, `Tuesday`                |
//! | `H`, `HH`          | hour, 0 to 23                               |
//! | `h`, `hh`          | hour, 1 to 12                               |
//! | `K`, `k`           | hour, 0 to 11 and 1 to 24                   |
//! | `m`, `s`           | minute, second                              |
//! | `S`…               | that many digits of the fractional second   |
//! | `a`                | `AM` or `PM`                                |
//!
//! Text between single quotes is copied as-is, and `''` is a single quote.
//! Every other character, including letters that mean nothing here, is
//! copied as-is too, so any pattern can be rendered.

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::CharIndices;

use pad::{Alignment, PadStr};

use crate::cal::{DatePiece, TimePiece};


pub type Width = usize;
pub type Pos = usize;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Field<'a> {
    Literal(Cow<'a, str>),

    Era,
    Year(Width),
    Month(Width),
    Day(Width),
    YearDay(Width),
    Weekday(Width),

    Hour(Width),
    Hour12(Width),
    HourFromZero12(Width),
    HourToTwentyFour(Width),
    Minute(Width),
    Second(Width),
    Fraction(Width),
    AmPm,
}

impl<'a> Field<'a> {

    /// The field for a run of `width` copies of a pattern letter, or
    /// `None` if the letter isn’t one.
    fn from_letter(letter: char, width: Width) -> Option<Self> {
        Some(match letter {
            'G'       => Field::Era,
            'y'       => Field::Year(width),
            'M' | 'L' => Field::Month(width),
            'd'       => Field::Day(width),
            'D'       => Field::YearDay(width),
            'E'       => Field::Weekday(width),
            'H'       => Field::Hour(width),
            'h'       => Field::Hour12(width),
            'K'       => Field::HourFromZero12(width),
            'k'       => Field::HourToTwentyFour(width),
            'm'       => Field::Minute(width),
            's'       => Field::Second(width),
            'S'       => Field::Fraction(width),
            'a'       => Field::AmPm,
            _         => return None,
        })
    }

    fn format<T>(&self, when: &T, w: &mut String) where T: DatePiece + TimePiece {
        match *self {
            Field::Literal(ref s)          => w.push_str(s),
            Field::Era                     => w.push_str(if when.year().value() > 0 { "AD" } else { "BC" }),
            Field::Year(2)                 => number(w, when.year_of_century(), 2),
            Field::Year(n)                 => number(w, when.year().value(), n),
            Field::Month(n) if n >= 4      => w.push_str(when.month().name()),
            Field::Month(3)                => w.push_str(when.month().short_name()),
            Field::Month(n)                => number(w, when.month().number() as i64, n),
            Field::Day(n)                  => number(w, when.day().value() as i64, n),
            Field::YearDay(n)              => number(w, when.yearday() as i64, n),
            Field::Weekday(n) if n >= 4    => w.push_str(when.weekday().name()),
            Field::Weekday(_)              => w.push_str(when.weekday().short_name()),
            Field::Hour(n)                 => number(w, when.hour() as i64, n),
            Field::Hour12(n)               => number(w, twelve_hour(when.hour()) as i64, n),
            Field::HourFromZero12(n)       => number(w, (when.hour() % 12) as i64, n),
            Field::HourToTwentyFour(n)     => number(w, if when.hour() == 0 { 24 } else { when.hour() as i64 }, n),
            Field::Minute(n)               => number(w, when.minute() as i64, n),
            Field::Second(n)               => number(w, when.second() as i64, n),
            Field::Fraction(n)             => fraction(w, when, n),
            Field::AmPm                    => w.push_str(if when.hour() < 12 { "AM" } else { "PM" }),
        }
    }
}

fn twelve_hour(hour: i8) -> i8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Writes a number zero-padded on the left to at least `width` digits.
fn number(w: &mut String, n: i64, width: Width) {
    if n < 0 {
        w.push('-');
    }

    let digits = n.unsigned_abs().to_string();
    w.push_str(&digits.pad(width, '0', Alignment::Right, false));
}

/// Writes the first `width` digits of the six-digit fractional second,
/// with zeroes after the sixth.
fn fraction<T: TimePiece>(w: &mut String, when: &T, width: Width) {
    let micros = when.millisecond() as i64 * 1000 + when.microsecond() as i64;
    let six = format!("{:06}", micros);

    if width <= six.len() {
        w.push_str(&six[.. width]);
    }
    else {
        w.push_str(&six.pad(width, '0', Alignment::Left, false));
    }
}


/// A pattern that has been broken up into fields, ready to render any
/// number of values.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Pattern<'a> {
    pub fields: Vec<Field<'a>>,
}

impl<'a> Pattern<'a> {
    pub fn format<T>(&self, when: &T) -> String where T: DatePiece + TimePiece {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, &mut buf);
        }

        buf
    }

    pub fn parse(input: &'a str) -> Pattern<'a> {
        let mut parser = PatternParser::new(input);
        parser.parse_pattern();

        Pattern { fields: parser.fields }
    }
}


struct PatternParser<'a> {
    iter:   Peekable<CharIndices<'a>>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<Pos>,
}

impl<'a> PatternParser<'a> {
    fn new(input: &'a str) -> PatternParser<'a> {
        PatternParser {
            iter:   input.char_indices().peekable(),
            fields: Vec::new(),
            input,
            anchor: None,
        }
    }

    // Literal strings are slices of the pattern text, so consecutive
    // literal characters are gathered from an anchor position and pushed
    // as one field when something that isn’t a literal turns up.

    fn collect_up_to_anchor(&mut self, position: Option<Pos>) {
        if let Some(pos) = self.anchor.take() {
            let text = match position {
                Some(new_pos) => &self.input[pos..new_pos],
                None          => &self.input[pos..],
            };
            self.fields.push(Field::Literal(Cow::Borrowed(text)));
        }
    }

    fn parse_pattern(&mut self) {
        while let Some((pos, c)) = self.iter.next() {
            if c == '\'' {
                self.collect_up_to_anchor(Some(pos));
                self.parse_quoted(pos);
            }
            else if let Some(field) = Field::from_letter(c, 1 + self.count_repeats(c)) {
                self.collect_up_to_anchor(Some(pos));
                self.fields.push(field);
            }
            else if self.anchor.is_none() {
                self.anchor = Some(pos);
            }
        }

        // Finally, collect any literal characters after the last field
        // that haven't been turned into a Literal field yet.
        self.collect_up_to_anchor(None);
    }

    /// Consumes any further copies of `c`, returning how many there were.
    fn count_repeats(&mut self, c: char) -> Width {
        let mut count = 0;
        while self.iter.next_if(|&(_, next)| next == c).is_some() {
            count += 1;
        }
        count
    }

    fn parse_quoted(&mut self, open_pos: Pos) {

        // Two quotes in a row outside a quoted section is one quote.
        if let Some((pos, _)) = self.iter.next_if(|&(_, c)| c == '\'') {
            self.fields.push(Field::Literal(Cow::Borrowed(&self.input[pos ..= pos])));
            return;
        }

        let start = open_pos + 1;
        let mut end = self.input.len();
        let mut text = String::new();
        let mut escaped = false;

        while let Some((pos, c)) = self.iter.next() {
            if c != '\'' {
                text.push(c);
            }
            else if self.iter.next_if(|&(_, next)| next == '\'').is_some() {
                text.push('\'');
                escaped = true;
            }
            else {
                end = pos;
                break;
            }
        }

        // An unclosed quote runs to the end of the pattern.
        let literal = if escaped { Cow::Owned(text) } else { Cow::Borrowed(&self.input[start .. end]) };
        if !literal.is_empty() {
            self.fields.push(Field::Literal(literal));
        }
    }
}
