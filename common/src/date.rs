//! Calendar [`Date`] utilities.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Month,
};

/// `YYYY-MM-DD` format of a [`Date`].
const FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date without any time or offset.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Creates a new [`Date`] out of the provided calendar components.
    ///
    /// [`None`] is returned if the components don't denote a valid date.
    #[must_use]
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Returns the year of this [`Date`].
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month of this [`Date`] in `1..=12` range.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.0.month().into()
    }

    /// Returns the day of month of this [`Date`].
    #[must_use]
    pub fn day(&self) -> u8 {
        self.0.day()
    }

    /// Returns the [`YearMonth`] this [`Date`] belongs to.
    #[must_use]
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year(),
            month: self.month(),
        }
    }
}

impl From<time::Date> for Date {
    fn from(date: time::Date) -> Self {
        Self(date)
    }
}

impl From<Date> for time::Date {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Parses a [`Date`] from its `YYYY-MM-DD` representation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, FORMAT).map(Self).map_err(|e| {
            if matches!(e, time::error::Parse::TryFromParsed(_)) {
                ParseError::OutOfRange
            } else {
                ParseError::Format
            }
        })
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseError {
    /// Input doesn't match the `YYYY-MM-DD` format.
    #[display("expected `YYYY-MM-DD` format")]
    Format,

    /// Components are well-formed, but don't denote an existing calendar
    /// date.
    #[display("no such calendar date")]
    OutOfRange,
}

/// Calendar month of a specific year.
///
/// Ordering is chronological.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonth {
    /// Year of this [`YearMonth`].
    year: i32,

    /// Month of this [`YearMonth`] in `1..=12` range.
    month: u8,
}

impl YearMonth {
    /// Creates a new [`YearMonth`] if the provided `month` is in `1..=12`.
    #[must_use]
    pub fn new(year: i32, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Returns the year of this [`YearMonth`].
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month of this [`YearMonth`] in `1..=12` range.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }
}

/// Formats as a zero-padded `YYYY-MM` key.
impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Calendar date in a `YYYY-MM-DD` format.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Date = super::Date;

    impl Date {
        fn to_output<S: ScalarValue>(d: &Date) -> Value<S> {
            Value::scalar(d.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Date` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    s.parse().map_err(|e| {
                        format!("Cannot parse `Date` input scalar: {e}")
                    })
                })
        }
    }
}
