mod cli;
mod config;
pub mod modules;

use std::process::ExitCode;

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    match cli::cli() {
        cli::CliRes::Ok => ExitCode::from(0),
        cli::CliRes::Err => ExitCode::from(1),
    }
}
