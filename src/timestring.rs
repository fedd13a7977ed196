//! Duration parsing for bilingual (English/Indonesian) time strings.
//!
//! A time string is a sequence of (quantity, unit) pairs with optional whitespace,
//! such as `"1h30s"`, `"30m 1 hours"`, or `"1 jam 30 menit 500 millis"`. Parsing
//! preserves the input order and never merges components; [`parse_timestring`]
//! returns the raw [`TimeTuple`] list, while [`parse_timestring_as_duration`] reduces
//! it into one [`Duration`].
//!
//! Unit spellings are matched case-sensitively, longest first, against a fixed
//! synonym table covering both English (`h`, `hours`, `millis`) and Indonesian
//! (`jam`, `menit`, `detik`) vocabularies.

use std::time::Duration;

use nom::character::complete::{digit1, multispace0, space0};
use nom::combinator::{cut, map_res};
use nom::error::ErrorKind;
use nom::multi::many1;
use nom::sequence::{delimited, pair, preceded};
use nom::{Finish, IResult};
use thiserror::Error;

/// The time scale of a duration component.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeScale {
    /// Milliseconds, 1/1000 of a second.
    Milliseconds,
    /// Seconds, the base unit.
    #[default]
    Seconds,
    /// Minutes, 60 seconds.
    Minutes,
    /// Hours, 60 minutes.
    Hours,
    /// Days, assumed to be 24 hours long.
    Days,
}

impl TimeScale {
    /// The conversion factor into milliseconds, the common base unit.
    pub const fn as_millis(self) -> u64 {
        match self {
            Self::Milliseconds => 1,
            Self::Seconds => 1_000,
            Self::Minutes => 60_000,
            Self::Hours => 3_600_000,
            Self::Days => 86_400_000,
        }
    }

    /// The canonical compact spelling of this scale (`"ms"`, `"s"`, `"m"`, `"h"`,
    /// `"d"`), as accepted by [`parse_timestring`].
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
        }
    }
}

/// One parsed duration component: a quantity paired with its [`TimeScale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeTuple {
    time: u16,
    scale: TimeScale,
}

impl TimeTuple {
    /// Create a new [`TimeTuple`].
    pub fn make(time: u16, scale: TimeScale) -> Self {
        Self { time, scale }
    }

    /// The quantity of this component.
    pub fn time(&self) -> u16 {
        self.time
    }

    /// The scale of this component.
    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// Convert this component into a [`Duration`].
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.time as u64 * self.scale.as_millis())
    }
}

impl From<u16> for TimeTuple {
    /// A bare quantity defaults to seconds.
    fn from(time: u16) -> Self {
        Self::make(time, TimeScale::default())
    }
}

/// The reason a time string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input did not match any known unit token.
    TagMismatch,
    /// A quantity was expected and no digit was found.
    MissingDigit,
}

/// An error produced while parsing a time string, carrying the exact residue that
/// could not be consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse remaining input \"{offending_input}\"")]
pub struct ParseError {
    pub offending_input: String,
    pub kind: ParseErrorKind,
}

impl From<nom::error::Error<&str>> for ParseError {
    fn from(err: nom::error::Error<&str>) -> Self {
        let kind = match err.code {
            ErrorKind::Tag => ParseErrorKind::TagMismatch,
            _ => ParseErrorKind::MissingDigit,
        };

        Self {
            offending_input: err.input.to_string(),
            kind,
        }
    }
}

/// Every accepted unit spelling, ordered longest first so that scanning is greedy
/// (`"menit"` wins over `"m"`). Matching is case-sensitive.
const UNIT_TOKENS: &[(&str, TimeScale)] = &[
    ("miliseconds", TimeScale::Milliseconds),
    ("milisecond", TimeScale::Milliseconds),
    ("minutes", TimeScale::Minutes),
    ("seconds", TimeScale::Seconds),
    ("milisec", TimeScale::Milliseconds),
    ("minute", TimeScale::Minutes),
    ("second", TimeScale::Seconds),
    ("millis", TimeScale::Milliseconds),
    ("hours", TimeScale::Hours),
    ("menit", TimeScale::Minutes),
    ("detik", TimeScale::Seconds),
    ("milli", TimeScale::Milliseconds),
    ("msecs", TimeScale::Milliseconds),
    ("days", TimeScale::Days),
    ("hari", TimeScale::Days),
    ("hour", TimeScale::Hours),
    ("mins", TimeScale::Minutes),
    ("secs", TimeScale::Seconds),
    ("mill", TimeScale::Milliseconds),
    ("msec", TimeScale::Milliseconds),
    ("day", TimeScale::Days),
    ("hrs", TimeScale::Hours),
    ("jam", TimeScale::Hours),
    ("min", TimeScale::Minutes),
    ("mnt", TimeScale::Minutes),
    ("sec", TimeScale::Seconds),
    ("dtk", TimeScale::Seconds),
    ("mil", TimeScale::Milliseconds),
    ("hr", TimeScale::Hours),
    ("ms", TimeScale::Milliseconds),
    ("d", TimeScale::Days),
    ("h", TimeScale::Hours),
    ("j", TimeScale::Hours),
    ("m", TimeScale::Minutes),
    ("s", TimeScale::Seconds),
];

fn quantity(input: &str) -> IResult<&str, u16> {
    map_res(digit1, str::parse)(input)
}

fn unit(input: &str) -> IResult<&str, TimeScale> {
    for (token, scale) in UNIT_TOKENS {
        if let Some(rest) = input.strip_prefix(token) {
            return Ok((rest, *scale));
        }
    }

    Err(nom::Err::Error(nom::error::make_error(
        input,
        ErrorKind::Tag,
    )))
}

fn component(input: &str) -> IResult<&str, TimeTuple> {
    // Once a quantity has been read a unit must follow, so the unit parser is
    // committed with `cut` and a mismatch reports the residue it failed on.
    let pair_parser = pair(quantity, delimited(space0, cut(unit), multispace0));
    let (rest, (time, scale)) = preceded(multispace0, pair_parser)(input)?;

    Ok((rest, TimeTuple::make(time, scale)))
}

/// Parse a time string into its ordered list of [`TimeTuple`] components.
///
/// Components are returned exactly as written; reducing them into one total is left
/// to the caller (or to [`parse_timestring_as_duration`]).
///
/// # Examples
///
/// ```rust
/// use fastnomicon::{parse_timestring, TimeScale, TimeTuple};
///
/// let tuples = parse_timestring("1h30s").unwrap();
///
/// assert_eq!(
///     tuples,
///     vec![
///         TimeTuple::make(1, TimeScale::Hours),
///         TimeTuple::make(30, TimeScale::Seconds),
///     ],
/// );
/// ```
///
/// # Errors
///
/// Fails on the first residue that is not a valid (quantity, unit) pair, reporting
/// the leftover text verbatim.
///
/// # Note
///
/// Each quantity is limited to `65535`.
pub fn parse_timestring(input: &str) -> Result<Vec<TimeTuple>, ParseError> {
    let (rest, tuples) = many1(component)(input).finish().map_err(ParseError::from)?;

    if !rest.is_empty() {
        return Err(ParseError {
            offending_input: rest.to_string(),
            kind: ParseErrorKind::MissingDigit,
        });
    }

    Ok(tuples)
}

/// Parse a time string and sum every component into a single [`Duration`].
///
/// Equivalent to reducing the output of [`parse_timestring`] with
/// [`TimeTuple::as_duration`]; the sum saturates instead of overflowing.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use fastnomicon::parse_timestring_as_duration;
///
/// let total = parse_timestring_as_duration("1h30m").unwrap();
/// assert_eq!(total, Duration::from_secs(5400));
/// ```
pub fn parse_timestring_as_duration(input: &str) -> Result<Duration, ParseError> {
    let total = parse_timestring(input)?
        .into_iter()
        .fold(Duration::default(), |acc, tuple| {
            acc.saturating_add(tuple.as_duration())
        });

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::{unit, TimeScale, TimeTuple, UNIT_TOKENS};

    #[test]
    fn unit_match_is_greedy() {
        let (rest, scale) = unit("menit").expect("menit is a unit");
        assert_eq!(rest, "");
        assert_eq!(scale, TimeScale::Minutes);

        let (rest, scale) = unit("m 1 hours").expect("m is a unit");
        assert_eq!(rest, " 1 hours");
        assert_eq!(scale, TimeScale::Minutes);

        let (rest, scale) = unit("mins").expect("mins is a unit");
        assert_eq!(rest, "");
        assert_eq!(scale, TimeScale::Minutes);
    }

    #[test]
    fn unit_match_is_case_sensitive() {
        assert!(unit("Jam").is_err());
        assert!(unit("MS").is_err());
    }

    #[test]
    fn unit_table_is_ordered_longest_first() {
        let lengths: Vec<usize> = UNIT_TOKENS.iter().map(|(token, _)| token.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        assert_eq!(lengths, sorted);
    }

    #[test]
    fn abbrevs_resolve_to_their_scale() {
        for scale in [
            TimeScale::Milliseconds,
            TimeScale::Seconds,
            TimeScale::Minutes,
            TimeScale::Hours,
            TimeScale::Days,
        ] {
            let (rest, parsed) = unit(scale.abbrev()).expect("abbrev is a unit");
            assert_eq!(rest, "");
            assert_eq!(parsed, scale);
        }
    }

    #[test]
    fn tuple_default_scale_is_seconds() {
        let tuple = TimeTuple::from(20);

        assert_eq!(tuple.time(), 20);
        assert_eq!(tuple.scale(), TimeScale::Seconds);
        assert_eq!(tuple, TimeTuple::make(20, TimeScale::Seconds));
    }

    #[test]
    fn tuple_as_duration() {
        use std::time::Duration;

        let cases = [
            (TimeTuple::make(500, TimeScale::Milliseconds), Duration::from_millis(500)),
            (TimeTuple::make(50, TimeScale::Seconds), Duration::from_secs(50)),
            (TimeTuple::make(15, TimeScale::Minutes), Duration::from_secs(900)),
            (TimeTuple::make(2, TimeScale::Hours), Duration::from_secs(7200)),
            (TimeTuple::make(1, TimeScale::Days), Duration::from_secs(86400)),
        ];

        for (tuple, expected) in cases {
            assert_eq!(tuple.as_duration(), expected);
        }
    }
}
