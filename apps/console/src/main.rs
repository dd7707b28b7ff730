//! # Shopdesk Console Entry Point
//!
//! Starts the command console with the demo store loaded. See the library
//! docs for the line protocol.

use std::process::ExitCode;

fn main() -> ExitCode {
    match shopdesk_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shopdesk-console: {err}");
            ExitCode::FAILURE
        }
    }
}
