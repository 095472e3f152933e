//! Berlin Clock conversion.
//!
//! A time is shown as five rows of lamps:
//!
//! ```text
//! seconds        1 lamp, lit on even seconds
//! hours (x5)     4 red lamps
//! hours          4 red lamps
//! minutes (x5)  11 yellow lamps, every third lit lamp red for the quarter hours
//! minutes        4 yellow lamps
//! ```

use crate::error::ClockError;
use crate::lamp::{Lamp, LampRow};
use crate::time_input::TimeInput;
use log::debug;
use std::fmt;

pub const NEW_LINE: &str = "\n";

const HOUR_ROW_WIDTH: usize = 4;
const FIVE_MINUTE_ROW_WIDTH: usize = 11;
const MINUTE_ROW_WIDTH: usize = 4;
const QUARTER_MARK_EVERY: usize = 3;

/// The five lamp rows of a Berlin Clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    pub seconds: LampRow,
    pub five_hours: LampRow,
    pub hours: LampRow,
    pub five_minutes: LampRow,
    pub minutes: LampRow,
}

impl ClockDisplay {
    pub fn from_time(time: &TimeInput) -> Self {
        let blink = if time.seconds() % 2 == 0 { Lamp::Yellow } else { Lamp::Off };
        let hours = time.hours() as usize;
        let minutes = time.minutes() as usize;

        Self {
            seconds: LampRow::lit(1, 1, blink),
            five_hours: LampRow::lit(hours / 5, HOUR_ROW_WIDTH, Lamp::Red),
            hours: LampRow::lit(hours % 5, HOUR_ROW_WIDTH, Lamp::Red),
            five_minutes: LampRow::lit(minutes / 5, FIVE_MINUTE_ROW_WIDTH, Lamp::Yellow)
                .mark_every(QUARTER_MARK_EVERY, Lamp::Red),
            minutes: LampRow::lit(minutes % 5, MINUTE_ROW_WIDTH, Lamp::Yellow),
        }
    }

    /// Rows in display order, top to bottom
    pub fn rows(&self) -> [&LampRow; 5] {
        [&self.seconds, &self.five_hours, &self.hours, &self.five_minutes, &self.minutes]
    }

    /// Join the rows with an arbitrary separator
    pub fn render(&self, separator: &str) -> String {
        self.rows().iter().map(|row| row.to_string()).collect::<Vec<_>>().join(separator)
    }

    pub fn print_clock(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(NEW_LINE))
    }
}

impl From<TimeInput> for ClockDisplay {
    fn from(time: TimeInput) -> Self {
        Self::from_time(&time)
    }
}

/// Convert an optional `HH:MM:SS` string into its clock display.
pub fn convert_time(input: Option<&str>) -> Result<ClockDisplay, ClockError> {
    let time = TimeInput::parse(input)?;
    let display = ClockDisplay::from_time(&time);
    debug!("Converted {} to {:?}", time, display.render(" "));
    Ok(display)
}

pub fn convert(input: &str) -> Result<ClockDisplay, ClockError> {
    convert_time(Some(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeField;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_midnight() {
        let display = convert("00:00:00").unwrap();
        assert_eq!(display.to_string(), "Y\n0000\n0000\n00000000000\n0000");
    }

    #[test]
    fn test_afternoon() {
        let display = convert("13:17:01").unwrap();
        assert_eq!(display.to_string(), "0\nRR00\nRRR0\nYYR00000000\nYY00");
    }

    #[test]
    fn test_end_of_day() {
        let display = convert("23:59:59").unwrap();
        assert_eq!(display.to_string(), "0\nRRRR\nRRR0\nYYRYYRYYRYY\nYYYY");
    }

    #[test]
    fn test_render_with_crlf() {
        let display = convert("12:56:01").unwrap();
        assert_eq!(display.render("\r\n"), "0\r\nRR00\r\nRR00\r\nYYRYYRYYRYY\r\nY000");
    }

    #[test]
    fn test_rejections() {
        assert_eq!(convert_time(None), Err(ClockError::MissingInput));
        assert_eq!(convert("12:30"), Err(ClockError::MalformedFormat));
        assert_eq!(convert("ab:30:00"), Err(ClockError::NonNumericField));
        assert_eq!(convert("24:00:00"), Err(ClockError::OutOfBounds(TimeField::Hours)));
        assert_eq!(convert("12:60:00"), Err(ClockError::OutOfBounds(TimeField::Minutes)));
        assert_eq!(convert("12:00:60"), Err(ClockError::OutOfBounds(TimeField::Seconds)));
    }

    #[test]
    fn test_rows_in_display_order() {
        let display = convert("13:17:01").unwrap();
        let widths: Vec<usize> = display.rows().iter().map(|row| row.width()).collect();
        assert_eq!(widths, vec![1, 4, 4, 11, 4]);
    }
}
