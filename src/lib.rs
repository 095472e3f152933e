//! Berlin Clock: converts `HH:MM:SS` times into five rows of lamps.

pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod lamp;
pub mod time_input;

// Re-export commonly used types
pub use clock::{convert, convert_time, ClockDisplay};
pub use config::Config;
pub use error::{ClockError, TimeField};
pub use lamp::{Lamp, LampRow};
pub use time_input::TimeInput;
