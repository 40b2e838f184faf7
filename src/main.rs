// #![forbid(unsafe_code)]
// #![deny(missing_docs)]

#[macro_use]
extern crate log;

mod app;
mod configuration;
mod parser;
mod reporter;
mod results;
mod utils;

use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use structopt::StructOpt;

use self::app::App;
use self::configuration::command_line::{LogLevel, Opt};
use self::results::TestExecutionResult;

fn main() {
    let mut options = Opt::from_args();

    if let Err(e) = init_logging(
        options.logging.take().unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    ) {
        eprintln!("Failed to initialize logging {}", e);
        exit(2);
    }

    match App::new(options).and_then(|app| app.run()) {
        Ok(TestExecutionResult::Failed) => exit(1),
        Ok(result) => info!("Overall result: {}", result),
        Err(e) => {
            error!("{}", e);
            exit(2);
        }
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
