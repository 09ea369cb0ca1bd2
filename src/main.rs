//! Tick - Local-first todo list for the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tick_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
