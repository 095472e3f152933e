//! Error types for time conversion.

use std::fmt;

pub const NO_TIME_ERROR: &str = "No time provided";
pub const INVALID_TIME_ERROR: &str = "Invalid time provided.";
pub const NUMERIC_TIME_ERROR: &str = "Time values must be numeric.";

/// The time component a range check failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    /// Inclusive upper bound accepted for this field
    pub fn max(self) -> u32 {
        match self {
            TimeField::Hours => 23,
            TimeField::Minutes | TimeField::Seconds => 59,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeField::Hours => "Hours",
            TimeField::Minutes => "Minutes",
            TimeField::Seconds => "Seconds",
        };
        f.write_str(name)
    }
}

/// Custom error type for clock conversions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("{}", NO_TIME_ERROR)]
    MissingInput,
    #[error("{}", INVALID_TIME_ERROR)]
    MalformedFormat,
    #[error("{}", NUMERIC_TIME_ERROR)]
    NonNumericField,
    #[error("{0} out of bounds.")]
    OutOfBounds(TimeField),
}
