//! Lispline command line entry point
//!
//! Usage: `lispline [file]` - evaluates the file, or standard input when absent.

use anyhow::Context;
use lispline::{EchoMode, Error, Session, SessionConfig};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "LISPLINE_LOG";

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    tracing::info!(version = lispline::VERSION, "lispline starting");
    let stdout = io::stdout().lock();

    match std::env::args_os().nth(1) {
        Some(path) => {
            let file =
                File::open(&path).with_context(|| path.to_string_lossy().into_owned())?;
            let config = SessionConfig::default().with_echo(EchoMode::Transcript);
            Session::new(BufReader::new(file), stdout, config).run(report)?;
        }
        None => {
            let stdin = io::stdin();
            let config = SessionConfig::default()
                .with_echo(EchoMode::Prompt)
                .with_recovery(stdin.is_terminal());
            Session::new(stdin.lock(), stdout, config).run(report)?;
        }
    }

    Ok(())
}

fn report(err: &Error) {
    eprintln!("{}", err);
}
