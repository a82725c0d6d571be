//! Error types shared across the workspace.

use std::num::ParseIntError;

use thiserror::Error;

/// A date/time that is syntactically shaped but does not name a real
/// calendar instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("month {0} is not in 1..=12")]
    MonthOutOfRange(u32),
    #[error("{year}-{month:02} has no day {day}")]
    NoSuchDay { year: i32, month: u32, day: u32 },
    #[error("hour {0} is not in 0..=23")]
    HourOutOfRange(u32),
    #[error("minute {0} is not in 0..=59")]
    MinuteOutOfRange(u32),
    #[error("second {0} is not in 0..=59")]
    SecondOutOfRange(u32),
    #[error("year {0} precedes the supported range")]
    BeforeEpoch(i32),
}

/// A batch line that cannot be turned into a [`SolarTime`].
///
/// [`SolarTime`]: crate::solar::SolarTime
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 4 fields `YYYY MM DD HH`, found {0}")]
    FieldCount(usize),
    #[error("invalid {field} {value:?}")]
    BadField {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Date(#[from] DateError),
}
