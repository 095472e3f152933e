use crate::config::LineEnding;
use clap::Parser;

/// Berlin Clock - show a 24-hour time as rows of lamps
#[derive(Debug, Parser)]
#[command(name = "berlin-clock")]
#[command(about = "Show HH:MM:SS times as Berlin Clock lamp rows", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Times to convert (HH:MM:SS). Without a time, enters interactive mode
    #[arg(conflicts_with = "now")]
    pub times: Vec<String>,

    /// Convert the current local time
    #[arg(long)]
    pub now: bool,

    /// Row separator, overriding the config file
    #[arg(long = "line-ending", value_enum)]
    pub line_ending: Option<LineEnding>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
