//! `metroboard` terminal entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging, open the record file.
//! - Hand stdin/stdout to the input loop until the user quits.
//!
//! # Exit codes
//! - `0` on normal close, `1` when the record file cannot be loaded,
//!   `2` on invalid configuration overrides.

mod app;
mod commands;
mod render;

use log::error;
use metroboard_core::{init_logging, AppConfig, FormShell, JsonFileRepository};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("metroboard: {err}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("metroboard: file logging disabled: {err}");
    }

    let repo = JsonFileRepository::new(&config.settings_path);
    let mut shell = match FormShell::open(repo) {
        Ok(shell) => shell,
        Err(err) => {
            error!("event=app_open module=cli status=error error_code=load_failed");
            eprintln!("metroboard: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    if let Err(err) = app::run(&mut shell, stdin.lock(), io::stdout().lock()) {
        error!("event=app_io module=cli status=error error={}", err);
        eprintln!("metroboard: terminal error: {err}");
    }
    ExitCode::SUCCESS
}
