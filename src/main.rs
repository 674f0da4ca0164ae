// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use word_counter::cli::Args;
use word_counter::config::AppConfig;
use word_counter::{app, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = AppConfig::from(&args);
    logging::init(config.verbosity);

    match app::run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
