use std::io;
use std::process::ExitCode;

use tracing::{error, info};

use payroll_roster::config::{AppConfig, ConfigLoader};
use payroll_roster::session::Session;
use payroll_roster::terminal;

fn main() -> ExitCode {
    let config = match std::env::args_os().nth(1) {
        Some(path) => match ConfigLoader::load(&path) {
            Ok(loader) => loader.into_config(),
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::from(config.logging.level))
        .with_ansi(false)
        .with_target(false)
        .init();

    info!(format = ?config.display.format, "Configuration loaded");

    let mut session = Session::from_config(&config.display);
    let stdin = io::stdin();
    match terminal::run(&mut session, stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Terminal I/O failed");
            ExitCode::FAILURE
        }
    }
}
