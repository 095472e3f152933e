use crate::clock::{convert, ClockDisplay};
use crate::config::Config;
use crate::time_input::TimeInput;
use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// What the terminal loop should do after a line of input
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Exit,
    Nothing,
}

const HELP_TEXT: &str = "Available commands:
  HH:MM:SS - Show the Berlin Clock for a 24-hour time
  now      - Show the Berlin Clock for the current local time
  help     - Show this help
  exit     - Exit the application";

pub struct Application {
    config: Config,
}

impl Application {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn render(&self, display: &ClockDisplay) -> String {
        display.render(self.config.display.line_ending.as_str())
    }

    /// Convert each time in order, stopping at the first invalid one
    pub fn convert_all(&self, times: &[String]) -> Result<String> {
        let mut rendered = Vec::with_capacity(times.len());
        for time in times {
            let display = convert(time).with_context(|| format!("Cannot convert '{}'", time))?;
            rendered.push(self.render(&display));
        }
        let separator = self.config.display.line_ending.as_str();
        Ok(rendered.join(separator.repeat(2).as_str()))
    }

    pub fn convert_now(&self) -> String {
        let time = TimeInput::from(chrono::Local::now().time());
        log::info!("Current local time is {}", time);
        self.render(&ClockDisplay::from(time))
    }

    pub fn process_line(&self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        match line {
            "" => Ok(Outcome::Nothing),
            "help" => Ok(Outcome::Print(HELP_TEXT.to_string())),
            "exit" | "quit" => Ok(Outcome::Exit),
            "now" => Ok(Outcome::Print(self.convert_now())),
            time => {
                let display = convert(time)?;
                Ok(Outcome::Print(self.render(&display)))
            }
        }
    }

    pub fn run_terminal(&self) -> Result<()> {
        log::info!("Starting Berlin Clock terminal");
        let mut rl = DefaultEditor::new()?;

        println!("Welcome to Berlin Clock! Enter a time as HH:MM:SS or type 'help' for commands.");

        loop {
            match rl.readline(&self.config.terminal.prompt) {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    match self.process_line(&line) {
                        Ok(Outcome::Print(text)) => println!("{}", text),
                        Ok(Outcome::Exit) => break,
                        Ok(Outcome::Nothing) => {}
                        Err(err) => {
                            log::debug!("Rejected input {:?}: {:?}", line, err);
                            println!("Error: {}", err);
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }
}
