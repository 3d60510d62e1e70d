//! uifactory -- Abstract Factory and Factory Method walkthroughs.
//!
//! Entry point: logger setup, optional config file, and printing of the
//! action records produced by the demonstration run.

mod abstract_factory;
mod config;
mod demo;
mod factory_method;
mod family;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use config::{Config, ConfigError};
use family::FactoryError;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Factory(#[from] FactoryError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    for record in demo::run(&config)? {
        println!("{}", record.render(config.output));
    }
    Ok(())
}
