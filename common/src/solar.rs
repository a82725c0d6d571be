//! Validated Gregorian (solar-calendar) instants.

use std::fmt;
use std::str::FromStr;

use crate::date::Date;
use crate::error::{DateError, ParseError};

/// A validated Gregorian date with a time of day, civil Beijing time
/// (UTC+8) by convention.
///
/// This is the only input the chart derivation accepts; once a `SolarTime`
/// exists, the date is known to be real.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SolarTime {
    date: Date,
    hour: u32,
    minute: u32,
    second: u32,
}

impl SolarTime {
    /// Builds a `SolarTime`, rejecting anything that does not name a real
    /// calendar instant.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateError> {
        if hour > 23 {
            return Err(DateError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(DateError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(DateError::SecondOutOfRange(second));
        }
        let date = Date::from_gregorian(year, month, day)?;
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Convenience constructor for the CLI surface, where minutes and
    /// seconds are implicitly zero.
    pub fn from_ymdh(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, DateError> {
        Self::new(year, month, day, hour, 0, 0)
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Seconds into the civil day, 0..86400.
    pub fn seconds_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

/// Formats the instant as the report stamp `YYYY-MM-DD-HH`.
impl fmt::Display for SolarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.date.gregorian();
        write!(f, "{:04}-{:02}-{:02}-{:02}", year, month, day, self.hour)
    }
}

impl FromStr for SolarTime {
    type Err = ParseError;

    /// Parses a batch record: four whitespace-separated integer fields
    /// `YYYY MM DD HH`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [year, month, day, hour]: [&str; 4] = fields
            .try_into()
            .map_err(|extra: Vec<&str>| ParseError::FieldCount(extra.len()))?;
        Ok(Self::from_ymdh(
            parse_field("year", year)?,
            parse_field("month", month)?,
            parse_field("day", day)?,
            parse_field("hour", hour)?,
        )?)
    }
}

fn parse_field<T: FromStr<Err = std::num::ParseIntError>>(
    field: &'static str,
    value: &str,
) -> Result<T, ParseError> {
    value.parse().map_err(|source| ParseError::BadField {
        field,
        value: value.to_owned(),
        source,
    })
}
