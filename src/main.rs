use anyhow::Result;
use berlin_clock::app::Application;
use berlin_clock::cli::Cli;
use berlin_clock::config::Config;
use clap::Parser;
use env_logger::Env;
use log::{debug, error};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let mut config = Config::load_or_default();
    if let Some(line_ending) = cli.line_ending {
        config.display.line_ending = line_ending;
    }
    debug!("Using config: {:?}", config);

    let app = Application::new(config);

    if cli.now {
        println!("{}", app.convert_now());
        return Ok(());
    }

    if cli.times.is_empty() {
        return app.run_terminal();
    }

    match app.convert_all(&cli.times) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
