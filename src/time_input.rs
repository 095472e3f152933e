//! Parsing and validation of `HH:MM:SS` time strings.

use crate::error::{ClockError, TimeField};
use chrono::Timelike;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// A validated 24-hour time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInput {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl TimeInput {
    /// Build a time from its components, rejecting the first field that is out of range.
    pub fn new(hours: i32, minutes: i32, seconds: i32) -> Result<Self, ClockError> {
        Ok(Self {
            hours: check_bounds(hours, TimeField::Hours)?,
            minutes: check_bounds(minutes, TimeField::Minutes)?,
            seconds: check_bounds(seconds, TimeField::Seconds)?,
        })
    }

    /// Parse an optional time string. `None` is rejected as missing input.
    pub fn parse(input: Option<&str>) -> Result<Self, ClockError> {
        let input = input.ok_or(ClockError::MissingInput)?;

        let fields: Vec<&str> = input.splitn(3, ':').collect();
        if fields.len() != 3 {
            debug!("Rejecting '{}': expected 3 fields, found {}", input, fields.len());
            return Err(ClockError::MalformedFormat);
        }

        let mut values = [0i32; 3];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field.parse::<i32>().map_err(|_| {
                debug!("Rejecting '{}': '{}' is not numeric", input, field);
                ClockError::NonNumericField
            })?;
        }

        Self::new(values[0], values[1], values[2])
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

fn check_bounds(value: i32, field: TimeField) -> Result<u32, ClockError> {
    match u32::try_from(value) {
        Ok(v) if v <= field.max() => Ok(v),
        _ => {
            debug!("{} value {} outside 0..={}", field, value, field.max());
            Err(ClockError::OutOfBounds(field))
        }
    }
}

impl FromStr for TimeInput {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for TimeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

// chrono reports a leap second as second 59 with an oversized fraction.
impl From<chrono::NaiveTime> for TimeInput {
    fn from(time: chrono::NaiveTime) -> Self {
        Self { hours: time.hour(), minutes: time.minute(), seconds: time.second() }
    }
}
